use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::dtos::{
    LoginRequestDto, LoginResponseDto, UpdateUserDto, UserResponseDto,
};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::auth::services::AuthService;
use crate::features::auth::{extract_token, JwtValidator};
use crate::shared::types::ApiResponse;
use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Json,
};
use std::sync::Arc;
use validator::Validate;

/// Login with username and password
#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = ApiResponse<LoginResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "auth"
)]
pub async fn login(
    State(service): State<Arc<AuthService>>,
    AppJson(dto): AppJson<LoginRequestDto>,
) -> Result<Json<ApiResponse<LoginResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let response = service.login(dto).await?;
    Ok(Json(ApiResponse::success(
        Some(response),
        Some("Login successful".to_string()),
        None,
    )))
}

/// Check whether the presented token is still valid
#[utoipa::path(
    get,
    path = "/api/status",
    responses(
        (status = 200, description = "Token is valid", body = ApiResponse<AuthenticatedUser>),
        (status = 400, description = "No token presented"),
        (status = 401, description = "Token expired or invalid")
    ),
    tag = "auth",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn status(
    State(validator): State<Arc<JwtValidator>>,
    headers: HeaderMap,
) -> Result<Json<ApiResponse<AuthenticatedUser>>> {
    let token = extract_token(&headers)
        .ok_or_else(|| AppError::BadRequest("Not logged in".to_string()))?;

    let user = validator
        .validate_token(token)
        .map_err(|_| AppError::Unauthorized("Login expired, please log in again".to_string()))?;

    Ok(Json(ApiResponse::success(
        Some(user),
        Some("Logged in".to_string()),
        None,
    )))
}

/// Change a user's username and password
#[utoipa::path(
    put,
    path = "/api/user/{id}",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated", body = ApiResponse<UserResponseDto>),
        (status = 400, description = "Validation error or username taken"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "User not found")
    ),
    tag = "auth",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_user(
    user: AuthenticatedUser,
    State(service): State<Arc<AuthService>>,
    Path(id): Path<i32>,
    AppJson(dto): AppJson<UpdateUserDto>,
) -> Result<Json<ApiResponse<UserResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    tracing::debug!("User {} is updating account {}", user.user_id, id);

    let updated = service.update_user(id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(updated),
        Some("User updated".to_string()),
        None,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::auth::services::TokenService;
    use axum::{routing::get, Router};
    use axum::http::{header, HeaderValue, StatusCode};
    use axum_test::TestServer;
    use serde_json::Value;
    use std::time::Duration;

    const SECRET: &str = "status-secret";

    fn server() -> TestServer {
        let validator = Arc::new(JwtValidator::new(SECRET, Duration::from_secs(0)));
        let app = Router::new()
            .route("/api/status", get(status))
            .with_state(validator);
        TestServer::new(app).unwrap()
    }

    #[tokio::test]
    async fn test_status_with_valid_token() {
        let issued = TokenService::new(SECRET, Duration::from_secs(60))
            .create_token(1, "admin")
            .unwrap();

        let response = server()
            .get("/api/status")
            .authorization_bearer(issued.token)
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["username"], "admin");
        assert_eq!(body["data"]["user_id"], 1);
    }

    #[tokio::test]
    async fn test_status_without_token_is_bad_request() {
        let response = server().get("/api/status").await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_status_with_empty_bearer_is_bad_request() {
        let response = server()
            .get("/api/status")
            .add_header(header::AUTHORIZATION, HeaderValue::from_static("Bearer "))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["message"], "Not logged in");
    }

    #[tokio::test]
    async fn test_status_with_foreign_token_is_unauthorized() {
        let issued = TokenService::new("other-secret", Duration::from_secs(60))
            .create_token(1, "admin")
            .unwrap();

        let response = server()
            .get("/api/status")
            .authorization_bearer(issued.token)
            .await;

        response.assert_status(StatusCode::UNAUTHORIZED);
        let body: Value = response.json();
        assert_eq!(body["message"], "Login expired, please log in again");
    }
}
