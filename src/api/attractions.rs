//! Attraction catalog endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::attraction::{Attraction, AttractionQuery, CreateAttraction, UpdateAttraction},
};

use super::{check_valid, AuthenticatedAdmin};

/// List attractions with optional search and active filter
#[utoipa::path(
    get,
    path = "/attractions",
    tag = "attractions",
    security(("bearer_auth" = [])),
    params(AttractionQuery),
    responses(
        (status = 200, description = "List of attractions", body = Vec<Attraction>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_attractions(
    State(state): State<crate::AppState>,
    AuthenticatedAdmin(_claims): AuthenticatedAdmin,
    Query(query): Query<AttractionQuery>,
) -> AppResult<Json<Vec<Attraction>>> {
    let attractions = state.services.attractions.list(&query).await?;
    Ok(Json(attractions))
}

/// Get attraction details by ID
#[utoipa::path(
    get,
    path = "/attractions/{id}",
    tag = "attractions",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Attraction ID")
    ),
    responses(
        (status = 200, description = "Attraction details", body = Attraction),
        (status = 404, description = "Attraction not found")
    )
)]
pub async fn get_attraction(
    State(state): State<crate::AppState>,
    AuthenticatedAdmin(_claims): AuthenticatedAdmin,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Attraction>> {
    let attraction = state.services.attractions.get_by_id(id).await?;
    Ok(Json(attraction))
}

/// Create a new attraction
#[utoipa::path(
    post,
    path = "/attractions",
    tag = "attractions",
    security(("bearer_auth" = [])),
    request_body = CreateAttraction,
    responses(
        (status = 201, description = "Attraction created", body = Attraction),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_attraction(
    State(state): State<crate::AppState>,
    AuthenticatedAdmin(_claims): AuthenticatedAdmin,
    Json(attraction): Json<CreateAttraction>,
) -> AppResult<(StatusCode, Json<Attraction>)> {
    check_valid(&attraction)?;

    let created = state.services.attractions.create(attraction).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an existing attraction
#[utoipa::path(
    put,
    path = "/attractions/{id}",
    tag = "attractions",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Attraction ID")
    ),
    request_body = UpdateAttraction,
    responses(
        (status = 200, description = "Attraction updated", body = Attraction),
        (status = 404, description = "Attraction not found")
    )
)]
pub async fn update_attraction(
    State(state): State<crate::AppState>,
    AuthenticatedAdmin(_claims): AuthenticatedAdmin,
    Path(id): Path<Uuid>,
    Json(attraction): Json<UpdateAttraction>,
) -> AppResult<Json<Attraction>> {
    check_valid(&attraction)?;

    let updated = state.services.attractions.update(id, attraction).await?;
    Ok(Json(updated))
}

/// Delete an attraction
#[utoipa::path(
    delete,
    path = "/attractions/{id}",
    tag = "attractions",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Attraction ID")
    ),
    responses(
        (status = 204, description = "Attraction deleted"),
        (status = 404, description = "Attraction not found")
    )
)]
pub async fn delete_attraction(
    State(state): State<crate::AppState>,
    AuthenticatedAdmin(_claims): AuthenticatedAdmin,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.attractions.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
