use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::links::dtos::LinkPayloadDto;
use crate::features::links::models::Link;

/// Service for link CRUD operations
pub struct LinkService {
    pool: PgPool,
}

impl LinkService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all links, returns (links, total)
    pub async fn list(&self) -> Result<(Vec<Link>, i64)> {
        let links = sqlx::query_as::<_, Link>(
            r#"
            SELECT id, name, ico, url, description, categories
            FROM links
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let total = links.len() as i64;
        Ok((links, total))
    }

    pub async fn count(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM links")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    pub async fn create(&self, dto: LinkPayloadDto) -> Result<Link> {
        let link = sqlx::query_as::<_, Link>(
            r#"
            INSERT INTO links (name, url, ico, categories, description)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, ico, url, description, categories
            "#,
        )
        .bind(&dto.name)
        .bind(&dto.url)
        .bind(&dto.ico)
        .bind(&dto.categories)
        .bind(&dto.description)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!("Created link {} ({})", link.id, link.url);
        Ok(link)
    }

    pub async fn update(&self, id: i32, dto: LinkPayloadDto) -> Result<Link> {
        let link = sqlx::query_as::<_, Link>(
            r#"
            UPDATE links
            SET name = $1, url = $2, ico = $3, categories = $4, description = $5
            WHERE id = $6
            RETURNING id, name, ico, url, description, categories
            "#,
        )
        .bind(&dto.name)
        .bind(&dto.url)
        .bind(&dto.ico)
        .bind(&dto.categories)
        .bind(&dto.description)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Link {} not found", id)))?;

        Ok(link)
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM links WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Link {} not found", id)));
        }

        tracing::info!("Deleted link {}", id);
        Ok(())
    }
}
