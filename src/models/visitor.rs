//! Visitor model and request types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Registered park visitor
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Visitor {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    /// Unique, case-insensitive
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    /// Interest tags picked at registration
    pub interests: Vec<String>,
    pub registration_date: DateTime<Utc>,
}

impl Visitor {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Create visitor request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateVisitor {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
}

/// Update visitor request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateVisitor {
    #[validate(length(min = 1, message = "First name must not be empty"))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, message = "Last name must not be empty"))]
    pub last_name: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub interests: Option<Vec<String>>,
}

/// Query parameters for visitors
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct VisitorQuery {
    /// Case-insensitive substring match on name, email, phone or city
    pub search: Option<String>,
}
