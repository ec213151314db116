//! Booking management endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::booking::{Booking, BookingQuery, CreateBooking, UpdateBooking},
};

use super::{check_valid, AuthenticatedAdmin};

/// List bookings with optional search
#[utoipa::path(
    get,
    path = "/bookings",
    tag = "bookings",
    security(("bearer_auth" = [])),
    params(BookingQuery),
    responses(
        (status = 200, description = "List of bookings", body = Vec<Booking>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_bookings(
    State(state): State<crate::AppState>,
    AuthenticatedAdmin(_claims): AuthenticatedAdmin,
    Query(query): Query<BookingQuery>,
) -> AppResult<Json<Vec<Booking>>> {
    let bookings = state.services.bookings.list(&query).await?;
    Ok(Json(bookings))
}

/// Get booking details by ID
#[utoipa::path(
    get,
    path = "/bookings/{id}",
    tag = "bookings",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Booking details", body = Booking),
        (status = 404, description = "Booking not found")
    )
)]
pub async fn get_booking(
    State(state): State<crate::AppState>,
    AuthenticatedAdmin(_claims): AuthenticatedAdmin,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Booking>> {
    let booking = state.services.bookings.get_by_id(id).await?;
    Ok(Json(booking))
}

/// Get bookings for a specific visitor
#[utoipa::path(
    get,
    path = "/visitors/{id}/bookings",
    tag = "bookings",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Visitor ID")
    ),
    responses(
        (status = 200, description = "Visitor's bookings", body = Vec<Booking>),
        (status = 404, description = "Visitor not found")
    )
)]
pub async fn get_visitor_bookings(
    State(state): State<crate::AppState>,
    AuthenticatedAdmin(_claims): AuthenticatedAdmin,
    Path(visitor_id): Path<Uuid>,
) -> AppResult<Json<Vec<Booking>>> {
    let bookings = state.services.bookings.get_by_visitor(visitor_id).await?;
    Ok(Json(bookings))
}

/// Create a booking, reserving seats on the event atomically
#[utoipa::path(
    post,
    path = "/bookings",
    tag = "bookings",
    security(("bearer_auth" = [])),
    request_body = CreateBooking,
    responses(
        (status = 201, description = "Booking created", body = Booking),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Visitor or event not found"),
        (status = 409, description = "Not enough seats available")
    )
)]
pub async fn create_booking(
    State(state): State<crate::AppState>,
    AuthenticatedAdmin(_claims): AuthenticatedAdmin,
    Json(booking): Json<CreateBooking>,
) -> AppResult<(StatusCode, Json<Booking>)> {
    check_valid(&booking)?;

    let created = state.services.bookings.create(booking).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a booking's ticket count and status; the event's seat counter
/// is adjusted by the delta in the same transaction
#[utoipa::path(
    put,
    path = "/bookings/{id}",
    tag = "bookings",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Booking ID")
    ),
    request_body = UpdateBooking,
    responses(
        (status = 200, description = "Booking updated", body = Booking),
        (status = 404, description = "Booking or event not found"),
        (status = 409, description = "Not enough seats available")
    )
)]
pub async fn update_booking(
    State(state): State<crate::AppState>,
    AuthenticatedAdmin(_claims): AuthenticatedAdmin,
    Path(id): Path<Uuid>,
    Json(booking): Json<UpdateBooking>,
) -> AppResult<Json<Booking>> {
    check_valid(&booking)?;

    let updated = state.services.bookings.update(id, booking).await?;
    Ok(Json(updated))
}

/// Delete a booking, returning its seats to the event
#[utoipa::path(
    delete,
    path = "/bookings/{id}",
    tag = "bookings",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Booking ID")
    ),
    responses(
        (status = 204, description = "Booking deleted, seats released"),
        (status = 404, description = "Booking not found")
    )
)]
pub async fn delete_booking(
    State(state): State<crate::AppState>,
    AuthenticatedAdmin(_claims): AuthenticatedAdmin,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.bookings.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
