//! Authentication service
//!
//! Admin credentials are argon2 hashes stored in the admins table;
//! sessions are stateless JWTs. The rest of the system never reasons
//! about identity beyond the bearer token.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::Utc;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::admin::{Admin, AdminClaims},
    repository::Repository,
};

#[derive(Clone)]
pub struct AuthService {
    repository: Repository,
    config: AuthConfig,
}

impl AuthService {
    pub fn new(repository: Repository, config: AuthConfig) -> Self {
        Self { repository, config }
    }

    /// Authenticate an admin and issue a JWT
    pub async fn login(&self, username: &str, password: &str) -> AppResult<(String, Admin)> {
        let admin = self
            .repository
            .admins
            .get_by_username(username)
            .await?
            .ok_or_else(|| AppError::Authentication("Invalid username or password".to_string()))?;

        if !self.verify_password(&admin, password)? {
            return Err(AppError::Authentication("Invalid username or password".to_string()));
        }

        let token = self.create_token(&admin)?;
        Ok((token, admin))
    }

    /// Get admin by ID (for /auth/me)
    pub async fn get_by_id(&self, id: uuid::Uuid) -> AppResult<Admin> {
        self.repository.admins.get_by_id(id).await
    }

    /// Create a JWT for an admin
    pub fn create_token(&self, admin: &Admin) -> AppResult<String> {
        let now = Utc::now();
        let claims = AdminClaims {
            sub: admin.username.clone(),
            admin_id: admin.id,
            iat: now.timestamp(),
            exp: now.timestamp() + (self.config.jwt_expiration_hours as i64) * 3600,
        };

        claims
            .create_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))
    }

    /// Hash a password using Argon2
    pub fn hash_password(&self, password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
        Ok(hash.to_string())
    }

    fn verify_password(&self, admin: &Admin, password: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(&admin.password_hash)
            .map_err(|_| AppError::Internal("Invalid password hash".to_string()))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}
