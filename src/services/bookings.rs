//! Booking management service

use uuid::Uuid;

use crate::{
    error::AppResult,
    models::booking::{Booking, BookingQuery, CreateBooking, UpdateBooking},
    repository::Repository,
};

#[derive(Clone)]
pub struct BookingsService {
    repository: Repository,
}

impl BookingsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List bookings, optionally filtered
    pub async fn list(&self, query: &BookingQuery) -> AppResult<Vec<Booking>> {
        self.repository.bookings.list(query).await
    }

    /// Get a booking by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Booking> {
        self.repository.bookings.get_by_id(id).await
    }

    /// Get bookings for a visitor
    pub async fn get_by_visitor(&self, visitor_id: Uuid) -> AppResult<Vec<Booking>> {
        // Verify visitor exists
        self.repository.visitors.get_by_id(visitor_id).await?;
        self.repository.bookings.get_by_visitor(visitor_id).await
    }

    /// Get bookings for an event
    pub async fn get_by_event(&self, event_id: Uuid) -> AppResult<Vec<Booking>> {
        // Verify event exists
        self.repository.events.get_by_id(event_id).await?;
        self.repository.bookings.get_by_event(event_id).await
    }

    /// Create a booking, reserving seats atomically
    pub async fn create(&self, data: CreateBooking) -> AppResult<Booking> {
        self.repository.bookings.create(&data).await
    }

    /// Update a booking, adjusting seats by the ticket-count delta
    pub async fn update(&self, id: Uuid, data: UpdateBooking) -> AppResult<Booking> {
        self.repository.bookings.update(id, &data).await
    }

    /// Delete a booking, releasing its seats
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.bookings.delete(id).await
    }
}
