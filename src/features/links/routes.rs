use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::features::links::handlers;
use crate::features::links::services::LinkService;

/// Read-only link routes (no authentication required)
pub fn public_routes(service: Arc<LinkService>) -> Router {
    Router::new()
        .route("/api/links", get(handlers::list_links))
        .with_state(service)
}

/// Link mutation routes (require JWT authentication)
pub fn protected_routes(service: Arc<LinkService>) -> Router {
    Router::new()
        .route("/api/links", post(handlers::create_link))
        .route(
            "/api/links/{id}",
            put(handlers::update_link).delete(handlers::delete_link),
        )
        .with_state(service)
}
