//! Business logic services

pub mod analytics;
pub mod attractions;
pub mod auth;
pub mod bookings;
pub mod events;
pub mod visitors;

use crate::{config::AuthConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub visitors: visitors::VisitorsService,
    pub events: events::EventsService,
    pub bookings: bookings::BookingsService,
    pub attractions: attractions::AttractionsService,
    pub analytics: analytics::AnalyticsService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, auth_config: AuthConfig) -> Self {
        Self {
            auth: auth::AuthService::new(repository.clone(), auth_config),
            visitors: visitors::VisitorsService::new(repository.clone()),
            events: events::EventsService::new(repository.clone()),
            bookings: bookings::BookingsService::new(repository.clone()),
            attractions: attractions::AttractionsService::new(repository.clone()),
            analytics: analytics::AnalyticsService::new(repository),
        }
    }
}
