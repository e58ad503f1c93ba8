//! Row-level access to the `categories` table.
//!
//! The hierarchy operations only talk to [`CategoryStore`], so the same code runs against
//! PostgreSQL in production and against an in-memory table in tests.

#[cfg(test)]
pub mod memory;
mod pg_store;

use async_trait::async_trait;

use crate::features::categories::models::{Category, CategoryFields};

pub use pg_store::PgCategoryStore;

pub type StoreResult<T> = std::result::Result<T, sqlx::Error>;

#[async_trait]
pub trait CategoryStore: Send + Sync {
    async fn fetch_by_id(&self, id: i32) -> StoreResult<Option<Category>>;

    /// Direct children of `parent_id`, or the root categories when `None`
    async fn fetch_by_parent(&self, parent_id: Option<i32>) -> StoreResult<Vec<Category>>;

    async fn fetch_all(&self) -> StoreResult<Vec<Category>>;

    async fn count_by_parent(&self, parent_id: Option<i32>) -> StoreResult<i64>;

    async fn count_by_name(&self, name: &str) -> StoreResult<i64>;

    async fn count_all(&self) -> StoreResult<i64>;

    async fn insert(&self, fields: &CategoryFields) -> StoreResult<Category>;

    /// Returns `None` when no row has this id
    async fn update(&self, id: i32, fields: &CategoryFields) -> StoreResult<Option<Category>>;

    async fn delete(&self, id: i32) -> StoreResult<()>;

    /// Rows among `ids` that are root categories
    async fn fetch_by_ids_root_only(&self, ids: &[i32]) -> StoreResult<Vec<Category>>;
}
