//! Event management endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::booking::Booking,
    models::event::{CreateEvent, Event, EventQuery, UpdateEvent},
};

use super::{check_valid, AuthenticatedAdmin};

/// List events with optional search and active/upcoming filters
#[utoipa::path(
    get,
    path = "/events",
    tag = "events",
    security(("bearer_auth" = [])),
    params(EventQuery),
    responses(
        (status = 200, description = "List of events", body = Vec<Event>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_events(
    State(state): State<crate::AppState>,
    AuthenticatedAdmin(_claims): AuthenticatedAdmin,
    Query(query): Query<EventQuery>,
) -> AppResult<Json<Vec<Event>>> {
    let events = state.services.events.list(&query).await?;
    Ok(Json(events))
}

/// Get event details by ID
#[utoipa::path(
    get,
    path = "/events/{id}",
    tag = "events",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event details", body = Event),
        (status = 404, description = "Event not found")
    )
)]
pub async fn get_event(
    State(state): State<crate::AppState>,
    AuthenticatedAdmin(_claims): AuthenticatedAdmin,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Event>> {
    let event = state.services.events.get_by_id(id).await?;
    Ok(Json(event))
}

/// Get bookings made against an event
#[utoipa::path(
    get,
    path = "/events/{id}/bookings",
    tag = "events",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event's bookings", body = Vec<Booking>),
        (status = 404, description = "Event not found")
    )
)]
pub async fn get_event_bookings(
    State(state): State<crate::AppState>,
    AuthenticatedAdmin(_claims): AuthenticatedAdmin,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Vec<Booking>>> {
    let bookings = state.services.bookings.get_by_event(id).await?;
    Ok(Json(bookings))
}

/// Create a new event. Available seats start at capacity.
#[utoipa::path(
    post,
    path = "/events",
    tag = "events",
    security(("bearer_auth" = [])),
    request_body = CreateEvent,
    responses(
        (status = 201, description = "Event created", body = Event),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_event(
    State(state): State<crate::AppState>,
    AuthenticatedAdmin(_claims): AuthenticatedAdmin,
    Json(event): Json<CreateEvent>,
) -> AppResult<(StatusCode, Json<Event>)> {
    check_valid(&event)?;

    let created = state.services.events.create(event).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an existing event (capacity and seat counter are immutable here)
#[utoipa::path(
    put,
    path = "/events/{id}",
    tag = "events",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Event ID")
    ),
    request_body = UpdateEvent,
    responses(
        (status = 200, description = "Event updated", body = Event),
        (status = 404, description = "Event not found")
    )
)]
pub async fn update_event(
    State(state): State<crate::AppState>,
    AuthenticatedAdmin(_claims): AuthenticatedAdmin,
    Path(id): Path<Uuid>,
    Json(event): Json<UpdateEvent>,
) -> AppResult<Json<Event>> {
    check_valid(&event)?;

    let updated = state.services.events.update(id, event).await?;
    Ok(Json(updated))
}

/// Delete an event. Its bookings are left in place (no cascade).
#[utoipa::path(
    delete,
    path = "/events/{id}",
    tag = "events",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 204, description = "Event deleted"),
        (status = 404, description = "Event not found")
    )
)]
pub async fn delete_event(
    State(state): State<crate::AppState>,
    AuthenticatedAdmin(_claims): AuthenticatedAdmin,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.events.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
