use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request DTO for creating or replacing a link
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct LinkPayloadDto {
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,

    #[validate(length(min = 1, max = 255, message = "URL is required"))]
    pub url: String,

    #[validate(length(max = 255, message = "Icon must be at most 255 characters"))]
    pub ico: Option<String>,

    #[validate(length(min = 1, max = 255, message = "Categories is required"))]
    pub categories: String,

    #[validate(length(min = 1, max = 255, message = "Description is required"))]
    pub description: String,
}
