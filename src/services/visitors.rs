//! Visitor management service

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::visitor::{CreateVisitor, UpdateVisitor, Visitor, VisitorQuery},
    repository::Repository,
};

#[derive(Clone)]
pub struct VisitorsService {
    repository: Repository,
}

impl VisitorsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List visitors, optionally filtered
    pub async fn list(&self, query: &VisitorQuery) -> AppResult<Vec<Visitor>> {
        self.repository.visitors.list(query).await
    }

    /// Get a visitor by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Visitor> {
        self.repository.visitors.get_by_id(id).await
    }

    /// Register a new visitor
    pub async fn create(&self, data: CreateVisitor) -> AppResult<Visitor> {
        if self.repository.visitors.get_by_email(&data.email).await?.is_some() {
            return Err(AppError::Conflict(
                "A visitor with this email already exists".to_string(),
            ));
        }
        self.repository.visitors.create(&data).await
    }

    /// Update a visitor
    pub async fn update(&self, id: Uuid, data: UpdateVisitor) -> AppResult<Visitor> {
        if let Some(ref email) = data.email {
            if self.repository.visitors.email_exists(email, Some(id)).await? {
                return Err(AppError::Conflict(
                    "A visitor with this email already exists".to_string(),
                ));
            }
        }
        self.repository.visitors.update(id, &data).await
    }

    /// Delete a visitor. Bookings referencing them are left in place.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.visitors.delete(id).await
    }
}
