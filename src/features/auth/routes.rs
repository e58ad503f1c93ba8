use crate::features::auth::handlers;
use crate::features::auth::services::AuthService;
use crate::features::auth::JwtValidator;
use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

/// Public auth routes (no authentication required)
pub fn public_routes(service: Arc<AuthService>, validator: Arc<JwtValidator>) -> Router {
    Router::new()
        .route("/api/login", post(handlers::login))
        .with_state(service)
        .merge(
            Router::new()
                .route("/api/status", get(handlers::status))
                .with_state(validator),
        )
}

/// Protected account routes (require JWT authentication)
pub fn protected_routes(service: Arc<AuthService>) -> Router {
    Router::new()
        .route("/api/user/{id}", put(handlers::update_user))
        .with_state(service)
}
