//! Event management service

use uuid::Uuid;

use crate::{
    error::AppResult,
    models::event::{CreateEvent, Event, EventQuery, UpdateEvent},
    repository::Repository,
};

#[derive(Clone)]
pub struct EventsService {
    repository: Repository,
}

impl EventsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List events, optionally filtered
    pub async fn list(&self, query: &EventQuery) -> AppResult<Vec<Event>> {
        self.repository.events.list(query).await
    }

    /// Get an event by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Event> {
        self.repository.events.get_by_id(id).await
    }

    /// Create an event (seat counter starts at capacity)
    pub async fn create(&self, data: CreateEvent) -> AppResult<Event> {
        self.repository.events.create(&data).await
    }

    /// Update an event
    pub async fn update(&self, id: Uuid, data: UpdateEvent) -> AppResult<Event> {
        self.repository.events.update(id, &data).await
    }

    /// Delete an event (bookings are not cascaded)
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.events.delete(id).await
    }
}
