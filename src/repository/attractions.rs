//! Attractions repository

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::attraction::{Attraction, AttractionQuery, CreateAttraction, UpdateAttraction},
};

#[derive(Clone)]
pub struct AttractionsRepository {
    pool: Pool<Postgres>,
}

impl AttractionsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List attractions with optional search and active filter
    pub async fn list(&self, query: &AttractionQuery) -> AppResult<Vec<Attraction>> {
        let mut conditions = Vec::new();

        let pattern = query
            .search
            .as_ref()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| format!("%{}%", s));

        if pattern.is_some() {
            conditions.push("(name ILIKE $1 OR category ILIKE $1 OR description ILIKE $1)".to_string());
        }
        if query.active_only.unwrap_or(false) {
            conditions.push("is_active = TRUE".to_string());
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let select_q = format!("SELECT * FROM attractions {} ORDER BY name", where_clause);
        let mut builder = sqlx::query_as::<_, Attraction>(&select_q);
        if let Some(ref p) = pattern {
            builder = builder.bind(p);
        }

        let rows = builder.fetch_all(&self.pool).await?;
        Ok(rows)
    }

    /// Get attraction by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Attraction> {
        sqlx::query_as::<_, Attraction>("SELECT * FROM attractions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Attraction {} not found", id)))
    }

    /// Create an attraction
    pub async fn create(&self, data: &CreateAttraction) -> AppResult<Attraction> {
        let row = sqlx::query_as::<_, Attraction>(
            r#"
            INSERT INTO attractions (
                name, description, category, opening_hours, image_url, is_active
            ) VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.category)
        .bind(&data.opening_hours)
        .bind(&data.image_url)
        .bind(data.is_active.unwrap_or(true))
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update an attraction
    pub async fn update(&self, id: Uuid, data: &UpdateAttraction) -> AppResult<Attraction> {
        let mut sets = Vec::new();
        let mut idx = 2;

        macro_rules! add_f {
            ($field:expr, $name:expr) => {
                if $field.is_some() {
                    sets.push(format!("{} = ${}", $name, idx));
                    idx += 1;
                }
            };
        }

        add_f!(data.name, "name");
        add_f!(data.description, "description");
        add_f!(data.category, "category");
        add_f!(data.opening_hours, "opening_hours");
        add_f!(data.image_url, "image_url");
        add_f!(data.is_active, "is_active");

        if sets.is_empty() {
            return self.get_by_id(id).await;
        }

        let query = format!(
            "UPDATE attractions SET {} WHERE id = $1 RETURNING *",
            sets.join(", ")
        );

        let mut builder = sqlx::query_as::<_, Attraction>(&query).bind(id);

        macro_rules! bind_f {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_f!(data.name);
        bind_f!(data.description);
        bind_f!(data.category);
        bind_f!(data.opening_hours);
        bind_f!(data.image_url);
        if let Some(val) = data.is_active {
            builder = builder.bind(val);
        }

        builder
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Attraction {} not found", id)))
    }

    /// Delete an attraction
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM attractions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Attraction {} not found", id)));
        }
        Ok(())
    }
}
