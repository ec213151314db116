//! Visitors repository for database operations

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::visitor::{CreateVisitor, UpdateVisitor, Visitor, VisitorQuery},
};

#[derive(Clone)]
pub struct VisitorsRepository {
    pool: Pool<Postgres>,
}

impl VisitorsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List visitors, optionally filtered by a search term over
    /// first name, last name, email, phone and city
    pub async fn list(&self, query: &VisitorQuery) -> AppResult<Vec<Visitor>> {
        let visitors = match query.search {
            Some(ref term) if !term.trim().is_empty() => {
                let pattern = format!("%{}%", term.trim());
                sqlx::query_as::<_, Visitor>(
                    r#"
                    SELECT * FROM visitors
                    WHERE first_name ILIKE $1
                       OR last_name ILIKE $1
                       OR email ILIKE $1
                       OR phone ILIKE $1
                       OR city ILIKE $1
                    ORDER BY first_name, last_name
                    "#,
                )
                .bind(pattern)
                .fetch_all(&self.pool)
                .await?
            }
            _ => {
                sqlx::query_as::<_, Visitor>(
                    "SELECT * FROM visitors ORDER BY first_name, last_name",
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(visitors)
    }

    /// Get visitor by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Visitor> {
        sqlx::query_as::<_, Visitor>("SELECT * FROM visitors WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Visitor {} not found", id)))
    }

    /// Get visitor by email (case-insensitive)
    pub async fn get_by_email(&self, email: &str) -> AppResult<Option<Visitor>> {
        let visitor = sqlx::query_as::<_, Visitor>(
            "SELECT * FROM visitors WHERE LOWER(email) = LOWER($1)",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(visitor)
    }

    /// Check if email already exists
    pub async fn email_exists(&self, email: &str, exclude_id: Option<Uuid>) -> AppResult<bool> {
        let exists: bool = if let Some(id) = exclude_id {
            sqlx::query_scalar(
                "SELECT EXISTS(SELECT 1 FROM visitors WHERE LOWER(email) = LOWER($1) AND id != $2)",
            )
            .bind(email)
            .bind(id)
            .fetch_one(&self.pool)
            .await?
        } else {
            sqlx::query_scalar(
                "SELECT EXISTS(SELECT 1 FROM visitors WHERE LOWER(email) = LOWER($1))",
            )
            .bind(email)
            .fetch_one(&self.pool)
            .await?
        };
        Ok(exists)
    }

    /// Create a visitor. Registration date is assigned server-side.
    pub async fn create(&self, data: &CreateVisitor) -> AppResult<Visitor> {
        let visitor = sqlx::query_as::<_, Visitor>(
            r#"
            INSERT INTO visitors (
                first_name, last_name, email, phone,
                address, city, country, interests
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(&data.address)
        .bind(&data.city)
        .bind(&data.country)
        .bind(&data.interests)
        .fetch_one(&self.pool)
        .await?;

        Ok(visitor)
    }

    /// Update a visitor
    pub async fn update(&self, id: Uuid, data: &UpdateVisitor) -> AppResult<Visitor> {
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

        add_f!(data.first_name, "first_name");
        add_f!(data.last_name, "last_name");
        add_f!(data.email, "email");
        add_f!(data.phone, "phone");
        add_f!(data.address, "address");
        add_f!(data.city, "city");
        add_f!(data.country, "country");
        add_f!(data.interests, "interests");

        if sets.is_empty() {
            return self.get_by_id(id).await;
        }

        let query = format!(
            "UPDATE visitors SET {} WHERE id = $1 RETURNING *",
            sets.join(", ")
        );

        let mut builder = sqlx::query_as::<_, Visitor>(&query).bind(id);

        macro_rules! bind_f {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_f!(data.first_name);
        bind_f!(data.last_name);
        bind_f!(data.email);
        bind_f!(data.phone);
        bind_f!(data.address);
        bind_f!(data.city);
        bind_f!(data.country);
        bind_f!(data.interests);

        builder
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Visitor {} not found", id)))
    }

    /// Delete a visitor
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM visitors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Visitor {} not found", id)));
        }
        Ok(())
    }
}
