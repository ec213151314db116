//! Events repository

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::event::{CreateEvent, Event, EventQuery, UpdateEvent},
};

#[derive(Clone)]
pub struct EventsRepository {
    pool: Pool<Postgres>,
}

impl EventsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List events with optional search and active/upcoming filters
    pub async fn list(&self, query: &EventQuery) -> AppResult<Vec<Event>> {
        let mut conditions = Vec::new();
        let mut idx = 1;

        let pattern = query
            .search
            .as_ref()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| format!("%{}%", s));

        if pattern.is_some() {
            conditions.push(format!(
                "(event_name ILIKE ${i} OR category ILIKE ${i} OR location ILIKE ${i} OR description ILIKE ${i})",
                i = idx
            ));
            idx += 1;
        }
        let _ = idx;
        if query.active_only.unwrap_or(false) {
            conditions.push("is_active = TRUE".to_string());
        }
        if query.upcoming.unwrap_or(false) {
            conditions.push("event_date >= CURRENT_DATE".to_string());
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let select_q = format!(
            "SELECT * FROM events {} ORDER BY event_date",
            where_clause
        );
        let mut builder = sqlx::query_as::<_, Event>(&select_q);
        if let Some(ref p) = pattern {
            builder = builder.bind(p);
        }

        let rows = builder.fetch_all(&self.pool).await?;
        Ok(rows)
    }

    /// Get event by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Event> {
        sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Event {} not found", id)))
    }

    /// Create an event. The seat counter starts at capacity.
    pub async fn create(&self, data: &CreateEvent) -> AppResult<Event> {
        let event_date = NaiveDate::parse_from_str(&data.event_date, "%Y-%m-%d")
            .map_err(|_| AppError::Validation("Invalid event_date, expected YYYY-MM-DD".to_string()))?;

        if data.ticket_price < Decimal::ZERO {
            return Err(AppError::Validation("Ticket price must not be negative".to_string()));
        }

        let row = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (
                event_name, description, event_date, event_time, location,
                category, capacity, available_seats, ticket_price,
                image_url, is_active
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(&data.event_name)
        .bind(&data.description)
        .bind(event_date)
        .bind(&data.event_time)
        .bind(&data.location)
        .bind(&data.category)
        .bind(data.capacity)
        .bind(data.ticket_price)
        .bind(&data.image_url)
        .bind(data.is_active.unwrap_or(true))
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update an event. Capacity and available seats are never touched here;
    /// the seat counter moves only through booking operations.
    pub async fn update(&self, id: Uuid, data: &UpdateEvent) -> AppResult<Event> {
        if let Some(price) = data.ticket_price {
            if price < Decimal::ZERO {
                return Err(AppError::Validation("Ticket price must not be negative".to_string()));
            }
        }

        let event_date = match data.event_date {
            Some(ref s) => Some(
                NaiveDate::parse_from_str(s, "%Y-%m-%d")
                    .map_err(|_| AppError::Validation("Invalid event_date, expected YYYY-MM-DD".to_string()))?,
            ),
            None => None,
        };

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

        add_f!(data.event_name, "event_name");
        add_f!(data.description, "description");
        add_f!(data.event_date, "event_date");
        add_f!(data.event_time, "event_time");
        add_f!(data.location, "location");
        add_f!(data.category, "category");
        add_f!(data.ticket_price, "ticket_price");
        add_f!(data.image_url, "image_url");
        add_f!(data.is_active, "is_active");

        if sets.is_empty() {
            return self.get_by_id(id).await;
        }

        let query = format!(
            "UPDATE events SET {} WHERE id = $1 RETURNING *",
            sets.join(", ")
        );

        let mut builder = sqlx::query_as::<_, Event>(&query).bind(id);

        if let Some(ref val) = data.event_name {
            builder = builder.bind(val);
        }
        if let Some(ref val) = data.description {
            builder = builder.bind(val);
        }
        if event_date.is_some() {
            builder = builder.bind(event_date);
        }
        if let Some(ref val) = data.event_time {
            builder = builder.bind(val);
        }
        if let Some(ref val) = data.location {
            builder = builder.bind(val);
        }
        if let Some(ref val) = data.category {
            builder = builder.bind(val);
        }
        if let Some(val) = data.ticket_price {
            builder = builder.bind(val);
        }
        if let Some(ref val) = data.image_url {
            builder = builder.bind(val);
        }
        if let Some(val) = data.is_active {
            builder = builder.bind(val);
        }

        builder
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Event {} not found", id)))
    }

    /// Delete an event. Bookings referencing it are left in place (no cascade).
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Event {} not found", id)));
        }
        Ok(())
    }
}
