//! Admin account model and JWT claims

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Administrator account. Credentials live in the database as argon2
/// hashes; nothing is hard-coded.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Admin {
    pub id: Uuid,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Public admin info (no credentials)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AdminInfo {
    pub id: Uuid,
    pub username: String,
}

impl From<&Admin> for AdminInfo {
    fn from(admin: &Admin) -> Self {
        Self {
            id: admin.id,
            username: admin.username.clone(),
        }
    }
}

/// JWT claims for an authenticated admin session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminClaims {
    pub sub: String,
    pub admin_id: Uuid,
    pub exp: i64,
    pub iat: i64,
}

impl AdminClaims {
    /// Create a new JWT token
    pub fn create_token(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{encode, EncodingKey, Header};
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Parse JWT token
    pub fn from_token(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{decode, DecodingKey, Validation};
        let token_data = decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_round_trip() {
        let claims = AdminClaims {
            sub: "admin".to_string(),
            admin_id: Uuid::new_v4(),
            iat: Utc::now().timestamp(),
            exp: Utc::now().timestamp() + 3600,
        };

        let token = claims.create_token("test-secret").unwrap();
        let parsed = AdminClaims::from_token(&token, "test-secret").unwrap();
        assert_eq!(parsed.sub, claims.sub);
        assert_eq!(parsed.admin_id, claims.admin_id);
    }

    #[test]
    fn test_claims_wrong_secret_rejected() {
        let claims = AdminClaims {
            sub: "admin".to_string(),
            admin_id: Uuid::new_v4(),
            iat: Utc::now().timestamp(),
            exp: Utc::now().timestamp() + 3600,
        };

        let token = claims.create_token("test-secret").unwrap();
        assert!(AdminClaims::from_token(&token, "other-secret").is_err());
    }
}
