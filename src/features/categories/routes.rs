use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};

use crate::features::categories::handlers;
use crate::features::categories::services::CategoryService;

/// Read-only category routes (no authentication required)
pub fn public_routes(service: Arc<CategoryService>) -> Router {
    Router::new()
        .route("/api/categories", get(handlers::list_categories))
        .with_state(service)
}

/// Category mutation routes (require JWT authentication)
pub fn protected_routes(service: Arc<CategoryService>) -> Router {
    Router::new()
        .route(
            "/api/categories",
            put(handlers::missing_category_id)
                .post(handlers::create_category)
                .delete(handlers::delete_categories),
        )
        .route(
            "/api/categories/{id}",
            put(handlers::update_category).delete(handlers::delete_category),
        )
        .with_state(service)
}
