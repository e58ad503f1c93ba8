use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response envelope shared by every endpoint.
///
/// `code` mirrors the HTTP status so clients that only read the body still see it.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Row count for list endpoints
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: Option<T>, message: Option<String>, total: Option<i64>) -> Self {
        Self {
            code: 200,
            message: message.unwrap_or_else(|| "Success".to_string()),
            data,
            total,
            errors: None,
        }
    }

    pub fn error(code: u16, message: String, errors: Option<Vec<String>>) -> ApiResponse<()> {
        ApiResponse {
            code,
            message,
            data: None,
            total: None,
            errors,
        }
    }
}
