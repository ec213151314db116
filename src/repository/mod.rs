//! Repository layer for database operations

pub mod admins;
pub mod attractions;
pub mod bookings;
pub mod events;
pub mod visitors;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub visitors: visitors::VisitorsRepository,
    pub events: events::EventsRepository,
    pub bookings: bookings::BookingsRepository,
    pub attractions: attractions::AttractionsRepository,
    pub admins: admins::AdminsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            visitors: visitors::VisitorsRepository::new(pool.clone()),
            events: events::EventsRepository::new(pool.clone()),
            bookings: bookings::BookingsRepository::new(pool.clone()),
            attractions: attractions::AttractionsRepository::new(pool.clone()),
            admins: admins::AdminsRepository::new(pool.clone()),
            pool,
        }
    }
}
