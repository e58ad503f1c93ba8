use crate::features::auth::model::AuthenticatedUser;
use axum::{extract::Request, middleware::Next, response::Response, Router};

pub fn create_test_user() -> AuthenticatedUser {
    AuthenticatedUser {
        user_id: 1,
        username: "admin".to_string(),
    }
}

async fn inject_test_user_middleware(mut request: Request, next: Next) -> Response {
    request.extensions_mut().insert(create_test_user());
    next.run(request).await
}

/// Wrap a router so every request arrives already authenticated
pub fn with_test_user(router: Router) -> Router {
    router.layer(axum::middleware::from_fn(inject_test_user_middleware))
}

/// Pool that never connects until a query runs; for handlers that fail before touching the database
pub fn lazy_pool() -> sqlx::PgPool {
    sqlx::postgres::PgPoolOptions::new()
        .connect_lazy("postgres://localhost/linkdir_test")
        .unwrap()
}
