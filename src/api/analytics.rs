//! Analytics endpoints

use axum::{extract::State, Json};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::AppResult;

use super::AuthenticatedAdmin;

/// One event in the popularity ranking
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PopularEvent {
    pub event_id: Uuid,
    pub event_name: String,
    pub booking_count: i64,
    #[schema(value_type = String, example = "1250.00")]
    pub revenue: Decimal,
}

/// Visitor count for a city
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CityEntry {
    pub city: String,
    pub count: i64,
}

/// Visitor count for an interest tag
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct InterestEntry {
    pub interest: String,
    pub count: i64,
}

/// Park dashboard aggregates
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AnalyticsResponse {
    pub total_visitors: i64,
    pub total_bookings: i64,
    /// Active events dated today or later
    pub active_events: i64,
    #[schema(value_type = String, example = "12500.00")]
    pub total_revenue: Decimal,
    /// Top 10 events by booking count
    pub popular_events: Vec<PopularEvent>,
    /// Top 10 visitor cities
    pub top_cities: Vec<CityEntry>,
    /// Top 10 interest tags
    pub top_interests: Vec<InterestEntry>,
}

/// Get the park dashboard aggregates
#[utoipa::path(
    get,
    path = "/analytics",
    tag = "analytics",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Dashboard aggregates", body = AnalyticsResponse),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn get_analytics(
    State(state): State<crate::AppState>,
    AuthenticatedAdmin(_claims): AuthenticatedAdmin,
) -> AppResult<Json<AnalyticsResponse>> {
    let analytics = state.services.analytics.get_analytics().await?;
    Ok(Json(analytics))
}
