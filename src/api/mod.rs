//! API handlers for the Onewhero Bay REST endpoints

pub mod analytics;
pub mod attractions;
pub mod auth;
pub mod bookings;
pub mod events;
pub mod health;
pub mod openapi;
pub mod visitors;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use validator::Validate;

use crate::{error::AppError, models::admin::AdminClaims, AppState};

/// Extractor for an authenticated admin from the JWT bearer token
pub struct AuthenticatedAdmin(pub AdminClaims);

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedAdmin {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        // Get the Authorization header
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::Authentication("Missing authorization header".to_string()))?;

        // Check for Bearer token
        if !auth_header.starts_with("Bearer ") {
            return Err(AppError::Authentication("Invalid authorization header format".to_string()));
        }

        let token = &auth_header[7..];

        // Validate JWT token using the secret from configuration
        let claims = AdminClaims::from_token(token, &state.config.auth.jwt_secret)
            .map_err(|e| AppError::Authentication(e.to_string()))?;

        Ok(AuthenticatedAdmin(claims))
    }
}

/// Run `validator` checks on a request body, mapping failures to the
/// Validation error so malformed input never reaches the core.
pub(crate) fn check_valid<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))
}
