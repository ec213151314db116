//! Attraction catalog model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Park attraction
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Attraction {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    /// Display string, e.g. "9:00 AM - 6:00 PM"
    pub opening_hours: Option<String>,
    pub image_url: Option<String>,
    pub is_active: bool,
}

/// Create attraction request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAttraction {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub opening_hours: Option<String>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}

/// Update attraction request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateAttraction {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub opening_hours: Option<String>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}

/// Query parameters for attractions
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct AttractionQuery {
    /// Case-insensitive substring match on name, category or description
    pub search: Option<String>,
    /// Only active attractions
    pub active_only: Option<bool>,
}
