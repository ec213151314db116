//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{analytics, attractions, auth, bookings, events, health, visitors};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Onewhero Bay API",
        version = "1.0.0",
        description = "Park Visitor Management REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html"),
        contact(name = "Onewhero Bay Team", email = "contact@onewherobay.nz")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::login,
        auth::me,
        // Visitors
        visitors::list_visitors,
        visitors::get_visitor,
        visitors::create_visitor,
        visitors::update_visitor,
        visitors::delete_visitor,
        // Events
        events::list_events,
        events::get_event,
        events::get_event_bookings,
        events::create_event,
        events::update_event,
        events::delete_event,
        // Bookings
        bookings::list_bookings,
        bookings::get_booking,
        bookings::get_visitor_bookings,
        bookings::create_booking,
        bookings::update_booking,
        bookings::delete_booking,
        // Attractions
        attractions::list_attractions,
        attractions::get_attraction,
        attractions::create_attraction,
        attractions::update_attraction,
        attractions::delete_attraction,
        // Analytics
        analytics::get_analytics,
    ),
    components(
        schemas(
            // Auth
            auth::LoginRequest,
            auth::LoginResponse,
            crate::models::admin::AdminInfo,
            // Visitors
            crate::models::visitor::Visitor,
            crate::models::visitor::CreateVisitor,
            crate::models::visitor::UpdateVisitor,
            crate::models::visitor::VisitorQuery,
            // Events
            crate::models::event::Event,
            crate::models::event::CreateEvent,
            crate::models::event::UpdateEvent,
            crate::models::event::EventQuery,
            // Bookings
            crate::models::booking::Booking,
            crate::models::booking::BookingStatus,
            crate::models::booking::CreateBooking,
            crate::models::booking::UpdateBooking,
            crate::models::booking::BookingQuery,
            // Attractions
            crate::models::attraction::Attraction,
            crate::models::attraction::CreateAttraction,
            crate::models::attraction::UpdateAttraction,
            crate::models::attraction::AttractionQuery,
            // Analytics
            analytics::AnalyticsResponse,
            analytics::PopularEvent,
            analytics::CityEntry,
            analytics::InterestEntry,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Authentication endpoints"),
        (name = "visitors", description = "Visitor registration and management"),
        (name = "events", description = "Ticketed event management"),
        (name = "bookings", description = "Booking and seat accounting"),
        (name = "attractions", description = "Attraction catalog"),
        (name = "analytics", description = "Park statistics")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
