use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::categories::dtos::{
    BatchDeleteCategoriesDto, CategoryPayloadDto, CategoryResponseDto, CategoryTreeDto,
};
use crate::features::categories::error::CategoryError;
use crate::features::categories::services::CategoryService;
use crate::shared::types::ApiResponse;

/// List all categories as a tree
///
/// Every node carries a `children` array; `total` counts all rows.
#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "Category tree", body = ApiResponse<Vec<CategoryTreeDto>>),
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<ApiResponse<Vec<CategoryTreeDto>>>> {
    let (tree, total) = service.list_tree().await?;
    Ok(Json(ApiResponse::success(Some(tree), None, Some(total))))
}

/// Create a category
#[utoipa::path(
    post,
    path = "/api/categories",
    request_body = CategoryPayloadDto,
    responses(
        (status = 200, description = "Category created", body = ApiResponse<CategoryResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "categories",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_category(
    _user: AuthenticatedUser,
    State(service): State<Arc<CategoryService>>,
    AppJson(dto): AppJson<CategoryPayloadDto>,
) -> Result<Json<ApiResponse<CategoryResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let category = service.create(dto).await?;
    Ok(Json(ApiResponse::success(
        Some(category),
        Some("Category created".to_string()),
        None,
    )))
}

/// Update a category
#[utoipa::path(
    put,
    path = "/api/categories/{id}",
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    request_body = CategoryPayloadDto,
    responses(
        (status = 200, description = "Category updated", body = ApiResponse<CategoryResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Category not found")
    ),
    tag = "categories",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_category(
    _user: AuthenticatedUser,
    State(service): State<Arc<CategoryService>>,
    Path(id): Path<i32>,
    AppJson(dto): AppJson<CategoryPayloadDto>,
) -> Result<Json<ApiResponse<CategoryResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let category = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(category),
        Some("Category updated".to_string()),
        None,
    )))
}

/// Rejects updates that do not name a category
pub async fn missing_category_id(_user: AuthenticatedUser) -> Result<Json<ApiResponse<()>>> {
    Err(CategoryError::MissingField("id").into())
}

/// Delete a category and its children
#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Category not found"),
        (status = 500, description = "Deletion failed partway")
    ),
    tag = "categories",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_category(
    _user: AuthenticatedUser,
    State(service): State<Arc<CategoryService>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Category deleted".to_string()),
        None,
    )))
}

/// Delete several root categories and their children
#[utoipa::path(
    delete,
    path = "/api/categories",
    request_body = BatchDeleteCategoriesDto,
    responses(
        (status = 200, description = "Categories deleted"),
        (status = 400, description = "No ids given"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Some ids are unknown or not root categories")
    ),
    tag = "categories",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_categories(
    _user: AuthenticatedUser,
    State(service): State<Arc<CategoryService>>,
    AppJson(dto): AppJson<BatchDeleteCategoriesDto>,
) -> Result<Json<ApiResponse<()>>> {
    let message = service.delete_many(&dto.ids).await?;
    Ok(Json(ApiResponse::success(None, Some(message), None)))
}
