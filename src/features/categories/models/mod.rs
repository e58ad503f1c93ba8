mod category;

pub use category::{Category, CategoryFields};
