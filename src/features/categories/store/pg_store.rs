use async_trait::async_trait;
use sqlx::PgPool;

use super::{CategoryStore, StoreResult};
use crate::features::categories::models::{Category, CategoryFields};

/// PostgreSQL-backed category store
#[derive(Clone)]
pub struct PgCategoryStore {
    pool: PgPool,
}

impl PgCategoryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryStore for PgCategoryStore {
    async fn fetch_by_id(&self, id: i32) -> StoreResult<Option<Category>> {
        sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, parent_id, ico, sorting
            FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn fetch_by_parent(&self, parent_id: Option<i32>) -> StoreResult<Vec<Category>> {
        sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, parent_id, ico, sorting
            FROM categories
            WHERE parent_id IS NOT DISTINCT FROM $1
            ORDER BY sorting, id
            "#,
        )
        .bind(parent_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn fetch_all(&self) -> StoreResult<Vec<Category>> {
        sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, parent_id, ico, sorting
            FROM categories
            ORDER BY sorting, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn count_by_parent(&self, parent_id: Option<i32>) -> StoreResult<i64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM categories WHERE parent_id IS NOT DISTINCT FROM $1",
        )
        .bind(parent_id)
        .fetch_one(&self.pool)
        .await
    }

    async fn count_by_name(&self, name: &str) -> StoreResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM categories WHERE name = $1")
            .bind(name)
            .fetch_one(&self.pool)
            .await
    }

    async fn count_all(&self) -> StoreResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM categories")
            .fetch_one(&self.pool)
            .await
    }

    async fn insert(&self, fields: &CategoryFields) -> StoreResult<Category> {
        sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (name, parent_id, ico, sorting)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, parent_id, ico, sorting
            "#,
        )
        .bind(&fields.name)
        .bind(fields.parent_id)
        .bind(&fields.ico)
        .bind(fields.sorting)
        .fetch_one(&self.pool)
        .await
    }

    async fn update(&self, id: i32, fields: &CategoryFields) -> StoreResult<Option<Category>> {
        sqlx::query_as::<_, Category>(
            r#"
            UPDATE categories
            SET name = $1, parent_id = $2, ico = $3, sorting = $4
            WHERE id = $5
            RETURNING id, name, parent_id, ico, sorting
            "#,
        )
        .bind(&fields.name)
        .bind(fields.parent_id)
        .bind(&fields.ico)
        .bind(fields.sorting)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn delete(&self, id: i32) -> StoreResult<()> {
        sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn fetch_by_ids_root_only(&self, ids: &[i32]) -> StoreResult<Vec<Category>> {
        sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, parent_id, ico, sorting
            FROM categories
            WHERE id = ANY($1) AND parent_id IS NULL
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
    }
}
