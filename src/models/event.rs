//! Event model (ticketed, capacity-limited park activities)

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Scheduled event with ticketed capacity
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Event {
    pub id: Uuid,
    pub event_name: String,
    pub description: Option<String>,
    pub event_date: NaiveDate,
    /// Display time, e.g. "10:00 AM"
    pub event_time: Option<String>,
    pub location: Option<String>,
    pub category: Option<String>,
    /// Fixed at creation
    pub capacity: i32,
    /// Invariant: 0 <= available_seats <= capacity
    pub available_seats: i32,
    #[schema(value_type = String, example = "25.00")]
    pub ticket_price: Decimal,
    pub image_url: Option<String>,
    pub is_active: bool,
}

/// Create event request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEvent {
    #[validate(length(min = 1, message = "Event name is required"))]
    pub event_name: String,
    pub description: Option<String>,
    /// Event date (YYYY-MM-DD)
    pub event_date: String,
    pub event_time: Option<String>,
    pub location: Option<String>,
    pub category: Option<String>,
    #[validate(range(min = 1, message = "Capacity must be at least 1"))]
    pub capacity: i32,
    /// Price per ticket, two-decimal currency
    #[schema(value_type = String, example = "25.00")]
    pub ticket_price: Decimal,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}

/// Update event request.
///
/// Capacity and available seats are not client-writable: capacity is fixed
/// at creation and the seat counter moves only through booking operations.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateEvent {
    #[validate(length(min = 1, message = "Event name must not be empty"))]
    pub event_name: Option<String>,
    pub description: Option<String>,
    pub event_date: Option<String>,
    pub event_time: Option<String>,
    pub location: Option<String>,
    pub category: Option<String>,
    #[schema(value_type = Option<String>)]
    pub ticket_price: Option<Decimal>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}

/// Query parameters for events
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct EventQuery {
    /// Case-insensitive substring match on name, category, location or description
    pub search: Option<String>,
    /// Only active events
    pub active_only: Option<bool>,
    /// Only events dated today or later (booking form listing)
    pub upcoming: Option<bool>,
}
