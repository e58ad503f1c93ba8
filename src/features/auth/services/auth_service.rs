use crate::core::error::{AppError, Result};
use crate::features::auth::dtos::{
    LoginRequestDto, LoginResponseDto, UpdateUserDto, UserResponseDto,
};
use crate::features::auth::model::User;
use crate::features::auth::services::token_service::TokenService;
use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use rand::rngs::OsRng;
use sqlx::PgPool;
use std::sync::Arc;

const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// Salted Argon2 hash in PHC string form, as stored in `users.password_hash`
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
}

/// Check a password against a stored PHC string; unparsable hashes never match
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let parsed = match PasswordHash::new(stored_hash) {
        Ok(hash) => hash,
        Err(_) => return false,
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// Convert database error to a user-facing AppError
fn handle_db_error(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        // Unique constraint violation
        if db_err.code() == Some(std::borrow::Cow::Borrowed("23505")) {
            return AppError::BadRequest("Username already exists".to_string());
        }
    }
    AppError::Database(e)
}

/// Service for login and account management
pub struct AuthService {
    pool: PgPool,
    token_service: Arc<TokenService>,
}

impl AuthService {
    pub fn new(pool: PgPool, token_service: Arc<TokenService>) -> Self {
        Self {
            pool,
            token_service,
        }
    }

    /// Create the administrator account when the users table is empty
    pub async fn ensure_admin_user(&self, username: &str, password: &str) -> Result<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (username, password_hash)
            SELECT $1, $2
            WHERE NOT EXISTS (SELECT 1 FROM users)
            "#,
        )
        .bind(username)
        .bind(hash_password(password)?)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() > 0 {
            tracing::info!("Created initial admin user: {}", username);
        }

        Ok(())
    }

    /// Login with username and password
    pub async fn login(&self, dto: LoginRequestDto) -> Result<LoginResponseDto> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password_hash FROM users WHERE username = $1",
        )
        .bind(&dto.username)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::Unauthorized(INVALID_CREDENTIALS.to_string()))?;

        if !verify_password(&dto.password, &user.password_hash) {
            tracing::warn!("Failed login attempt for user: {}", dto.username);
            return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        }

        let issued = self.token_service.create_token(user.id, &user.username)?;

        Ok(LoginResponseDto {
            id: user.id,
            user: user.username,
            token: issued.token,
            token_type: "Bearer".to_string(),
            expires_in: issued.expires_in,
        })
    }

    /// Replace a user's username and password
    pub async fn update_user(&self, id: i32, dto: UpdateUserDto) -> Result<UserResponseDto> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET username = $1, password_hash = $2
            WHERE id = $3
            RETURNING id, username, password_hash
            "#,
        )
        .bind(&dto.username)
        .bind(hash_password(&dto.password)?)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(handle_db_error)?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))?;

        tracing::info!("Updated credentials for user: {}", user.id);

        Ok(UserResponseDto {
            id: user.id,
            username: user.username,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashed_password_verifies() {
        let hash = hash_password("admin").unwrap();

        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("admin", &hash));
        assert!(!verify_password("admin ", &hash));
    }

    #[test]
    fn test_same_password_gets_distinct_salts() {
        let first = hash_password("secret").unwrap();
        let second = hash_password("secret").unwrap();

        assert_ne!(first, second);
        assert!(verify_password("secret", &first));
        assert!(verify_password("secret", &second));
    }

    #[test]
    fn test_unparsable_stored_hash_never_matches() {
        assert!(!verify_password("admin", ""));
        assert!(!verify_password(
            "admin",
            "8c6976e5b5410415bde908bd4dee15dfb167a9c873fc4bb8a81f6f2ab448a918"
        ));
    }
}
