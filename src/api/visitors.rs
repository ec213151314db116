//! Visitor management endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::visitor::{CreateVisitor, UpdateVisitor, Visitor, VisitorQuery},
};

use super::{check_valid, AuthenticatedAdmin};

/// List visitors with optional search
#[utoipa::path(
    get,
    path = "/visitors",
    tag = "visitors",
    security(("bearer_auth" = [])),
    params(VisitorQuery),
    responses(
        (status = 200, description = "List of visitors", body = Vec<Visitor>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_visitors(
    State(state): State<crate::AppState>,
    AuthenticatedAdmin(_claims): AuthenticatedAdmin,
    Query(query): Query<VisitorQuery>,
) -> AppResult<Json<Vec<Visitor>>> {
    let visitors = state.services.visitors.list(&query).await?;
    Ok(Json(visitors))
}

/// Get visitor details by ID
#[utoipa::path(
    get,
    path = "/visitors/{id}",
    tag = "visitors",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Visitor ID")
    ),
    responses(
        (status = 200, description = "Visitor details", body = Visitor),
        (status = 404, description = "Visitor not found")
    )
)]
pub async fn get_visitor(
    State(state): State<crate::AppState>,
    AuthenticatedAdmin(_claims): AuthenticatedAdmin,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Visitor>> {
    let visitor = state.services.visitors.get_by_id(id).await?;
    Ok(Json(visitor))
}

/// Register a new visitor
#[utoipa::path(
    post,
    path = "/visitors",
    tag = "visitors",
    security(("bearer_auth" = [])),
    request_body = CreateVisitor,
    responses(
        (status = 201, description = "Visitor registered", body = Visitor),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn create_visitor(
    State(state): State<crate::AppState>,
    AuthenticatedAdmin(_claims): AuthenticatedAdmin,
    Json(visitor): Json<CreateVisitor>,
) -> AppResult<(StatusCode, Json<Visitor>)> {
    check_valid(&visitor)?;

    let created = state.services.visitors.create(visitor).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an existing visitor
#[utoipa::path(
    put,
    path = "/visitors/{id}",
    tag = "visitors",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Visitor ID")
    ),
    request_body = UpdateVisitor,
    responses(
        (status = 200, description = "Visitor updated", body = Visitor),
        (status = 404, description = "Visitor not found"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn update_visitor(
    State(state): State<crate::AppState>,
    AuthenticatedAdmin(_claims): AuthenticatedAdmin,
    Path(id): Path<Uuid>,
    Json(visitor): Json<UpdateVisitor>,
) -> AppResult<Json<Visitor>> {
    check_valid(&visitor)?;

    let updated = state.services.visitors.update(id, visitor).await?;
    Ok(Json(updated))
}

/// Delete a visitor
#[utoipa::path(
    delete,
    path = "/visitors/{id}",
    tag = "visitors",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Visitor ID")
    ),
    responses(
        (status = 204, description = "Visitor deleted"),
        (status = 404, description = "Visitor not found")
    )
)]
pub async fn delete_visitor(
    State(state): State<crate::AppState>,
    AuthenticatedAdmin(_claims): AuthenticatedAdmin,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.visitors.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
