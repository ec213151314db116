//! Attraction catalog service

use uuid::Uuid;

use crate::{
    error::AppResult,
    models::attraction::{Attraction, AttractionQuery, CreateAttraction, UpdateAttraction},
    repository::Repository,
};

#[derive(Clone)]
pub struct AttractionsService {
    repository: Repository,
}

impl AttractionsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List attractions, optionally filtered
    pub async fn list(&self, query: &AttractionQuery) -> AppResult<Vec<Attraction>> {
        self.repository.attractions.list(query).await
    }

    /// Get an attraction by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Attraction> {
        self.repository.attractions.get_by_id(id).await
    }

    /// Create an attraction
    pub async fn create(&self, data: CreateAttraction) -> AppResult<Attraction> {
        self.repository.attractions.create(&data).await
    }

    /// Update an attraction
    pub async fn update(&self, id: Uuid, data: UpdateAttraction) -> AppResult<Attraction> {
        self.repository.attractions.update(id, &data).await
    }

    /// Delete an attraction
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.attractions.delete(id).await
    }
}
