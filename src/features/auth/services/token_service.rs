use crate::core::error::{AppError, Result};
use crate::features::auth::model::Claims;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use std::time::Duration;

/// Signed token plus its lifetime in seconds
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_in: u64,
}

/// Issues HS256 access tokens for logged-in users
pub struct TokenService {
    encoding_key: EncodingKey,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    pub fn create_token(&self, user_id: i32, username: &str) -> Result<IssuedToken> {
        let now = chrono::Utc::now().timestamp();
        let ttl = i64::try_from(self.ttl.as_secs())
            .map_err(|_| AppError::Internal("Token lifetime is too large".to_string()))?;

        let claims = Claims {
            sub: user_id.to_string(),
            username: username.to_string(),
            iat: now,
            exp: now + ttl,
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Failed to sign token: {}", e)))?;

        tracing::debug!("Issued access token for user: {}", user_id);

        Ok(IssuedToken {
            token,
            expires_in: self.ttl.as_secs(),
        })
    }
}
