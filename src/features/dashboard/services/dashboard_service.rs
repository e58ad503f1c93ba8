use async_trait::async_trait;
use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::categories::CategoryService;
use crate::features::dashboard::dtos::DashboardSummaryDto;
use crate::features::links::LinkService;

/// Anything that can report how many rows it holds
#[async_trait]
pub trait RowCount: Send + Sync {
    async fn row_count(&self) -> Result<i64>;
}

#[async_trait]
impl RowCount for LinkService {
    async fn row_count(&self) -> Result<i64> {
        self.count().await
    }
}

#[async_trait]
impl RowCount for CategoryService {
    async fn row_count(&self) -> Result<i64> {
        self.count().await.map_err(AppError::from)
    }
}

/// Service for public summary queries
pub struct DashboardService {
    links: Arc<dyn RowCount>,
    categories: Arc<dyn RowCount>,
}

impl DashboardService {
    pub fn new(links: Arc<dyn RowCount>, categories: Arc<dyn RowCount>) -> Self {
        Self { links, categories }
    }

    /// Get link and category totals
    pub async fn get_summary(&self) -> Result<DashboardSummaryDto> {
        let (links_count, categories_count) =
            tokio::try_join!(self.links.row_count(), self.categories.row_count())?;

        Ok(DashboardSummaryDto {
            links_count,
            categories_count,
        })
    }
}
