//! Booking model and related types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Booking lifecycle status. Stored as a Postgres enum; the accounting of
/// seats is driven by ticket counts and create/delete only, never by status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "booking_status")]
pub enum BookingStatus {
    Confirmed,
    Pending,
    Cancelled,
}

impl Default for BookingStatus {
    fn default() -> Self {
        BookingStatus::Confirmed
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Pending => "Pending",
            BookingStatus::Cancelled => "Cancelled",
        };
        f.write_str(s)
    }
}

/// Reservation of N seats against one event by one visitor
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Booking {
    pub id: Uuid,
    pub visitor_id: Uuid,
    pub event_id: Uuid,
    /// Denormalized at booking time
    pub visitor_name: String,
    /// Denormalized at booking time
    pub event_name: String,
    pub number_of_tickets: i32,
    /// tickets x ticket price at booking/update time, never re-derived
    #[schema(value_type = String, example = "250.00")]
    pub total_amount: Decimal,
    pub status: BookingStatus,
    pub booking_date: DateTime<Utc>,
}

/// Create booking request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBooking {
    pub visitor_id: Uuid,
    pub event_id: Uuid,
    #[validate(range(min = 1, message = "Number of tickets must be at least 1"))]
    pub number_of_tickets: i32,
    pub status: Option<BookingStatus>,
}

/// Update booking request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateBooking {
    #[validate(range(min = 1, message = "Number of tickets must be at least 1"))]
    pub number_of_tickets: i32,
    pub status: Option<BookingStatus>,
}

/// Query parameters for bookings
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct BookingQuery {
    /// Case-insensitive substring match on visitor name, event name or status
    pub search: Option<String>,
}

/// Compute a booking total from a ticket count and a unit price.
pub fn booking_total(number_of_tickets: i32, ticket_price: Decimal) -> Decimal {
    Decimal::from(number_of_tickets) * ticket_price
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_booking_total() {
        assert_eq!(booking_total(10, dec("25.00")), dec("250.00"));
        assert_eq!(booking_total(15, dec("25.00")), dec("375.00"));
        assert_eq!(booking_total(3, dec("9.99")), dec("29.97"));
        assert_eq!(booking_total(0, dec("25.00")), dec("0.00"));
    }

    #[test]
    fn test_status_display_matches_stored_labels() {
        assert_eq!(BookingStatus::Confirmed.to_string(), "Confirmed");
        assert_eq!(BookingStatus::Pending.to_string(), "Pending");
        assert_eq!(BookingStatus::Cancelled.to_string(), "Cancelled");
    }

    #[test]
    fn test_status_default_is_confirmed() {
        assert_eq!(BookingStatus::default(), BookingStatus::Confirmed);
    }
}
