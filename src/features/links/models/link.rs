use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Database model for a bookmarked site
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Link {
    pub id: i32,
    pub name: String,
    pub ico: Option<String>,
    pub url: String,
    pub description: String,
    /// Category the link is filed under
    pub categories: String,
}
