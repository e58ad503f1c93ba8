pub mod dtos;
pub mod error;
pub mod handlers;
pub mod hierarchy;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

pub use services::CategoryService;
pub use store::PgCategoryStore;
