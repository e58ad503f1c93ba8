use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Row counts shown in the site header
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DashboardSummaryDto {
    pub links_count: i64,
    pub categories_count: i64,
}
