use sqlx::FromRow;

/// Database model for category
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Category {
    pub id: i32,
    pub name: String,
    /// `None` for root categories
    pub parent_id: Option<i32>,
    pub ico: String,
    /// Position among siblings sharing the same `parent_id`
    pub sorting: i32,
}

impl Category {
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Column values written by insert and update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFields {
    pub name: String,
    pub parent_id: Option<i32>,
    pub ico: String,
    pub sorting: i32,
}
