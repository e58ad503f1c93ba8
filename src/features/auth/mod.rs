mod validator;

pub mod dtos;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod services;

use axum::http::{header, HeaderMap};

use crate::shared::constants::BEARER_PREFIX;

pub use self::validator::JwtValidator;

/// Token from the `Authorization` header, with or without the `Bearer ` prefix
pub fn extract_token(headers: &HeaderMap) -> Option<&str> {
    let raw = headers.get(header::AUTHORIZATION)?.to_str().ok()?.trim_start();
    let token = raw.strip_prefix(BEARER_PREFIX).unwrap_or(raw).trim();
    // A bare scheme with nothing after it carries no token
    (!token.is_empty() && token != BEARER_PREFIX.trim_end()).then_some(token)
}
