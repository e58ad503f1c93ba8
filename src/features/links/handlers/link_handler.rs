use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::links::dtos::LinkPayloadDto;
use crate::features::links::models::Link;
use crate::features::links::services::LinkService;
use crate::shared::types::ApiResponse;

/// List all links
#[utoipa::path(
    get,
    path = "/api/links",
    responses(
        (status = 200, description = "All links", body = ApiResponse<Vec<Link>>),
    ),
    tag = "links"
)]
pub async fn list_links(
    State(service): State<Arc<LinkService>>,
) -> Result<Json<ApiResponse<Vec<Link>>>> {
    let (links, total) = service.list().await?;
    Ok(Json(ApiResponse::success(Some(links), None, Some(total))))
}

/// Create a link
#[utoipa::path(
    post,
    path = "/api/links",
    request_body = LinkPayloadDto,
    responses(
        (status = 200, description = "Link created", body = ApiResponse<Link>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "links",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_link(
    _user: AuthenticatedUser,
    State(service): State<Arc<LinkService>>,
    AppJson(dto): AppJson<LinkPayloadDto>,
) -> Result<Json<ApiResponse<Link>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let link = service.create(dto).await?;
    Ok(Json(ApiResponse::success(
        Some(link),
        Some("Link created".to_string()),
        None,
    )))
}

/// Update a link
#[utoipa::path(
    put,
    path = "/api/links/{id}",
    params(
        ("id" = i32, Path, description = "Link ID")
    ),
    request_body = LinkPayloadDto,
    responses(
        (status = 200, description = "Link updated", body = ApiResponse<Link>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Link not found")
    ),
    tag = "links",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_link(
    _user: AuthenticatedUser,
    State(service): State<Arc<LinkService>>,
    Path(id): Path<i32>,
    AppJson(dto): AppJson<LinkPayloadDto>,
) -> Result<Json<ApiResponse<Link>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let link = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(link),
        Some("Link updated".to_string()),
        None,
    )))
}

/// Delete a link
#[utoipa::path(
    delete,
    path = "/api/links/{id}",
    params(
        ("id" = i32, Path, description = "Link ID")
    ),
    responses(
        (status = 200, description = "Link deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Link not found")
    ),
    tag = "links",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_link(
    _user: AuthenticatedUser,
    State(service): State<Arc<LinkService>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Link deleted".to_string()),
        None,
    )))
}
