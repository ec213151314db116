//! Bookings repository: seat-accounting core
//!
//! Every mutation runs in a single transaction. The seat counter is only
//! ever moved by a conditional UPDATE that re-checks availability at write
//! time, so two racing bookings against the same event can never both take
//! the last seats. The `available_seats BETWEEN 0 AND capacity` constraint
//! on the events table backstops every path.

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        booking::{booking_total, Booking, BookingQuery, CreateBooking, UpdateBooking},
        event::Event,
        visitor::Visitor,
    },
};

#[derive(Clone)]
pub struct BookingsRepository {
    pool: Pool<Postgres>,
}

impl BookingsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List bookings, optionally filtered by a search term over the
    /// denormalized visitor name, event name and status
    pub async fn list(&self, query: &BookingQuery) -> AppResult<Vec<Booking>> {
        let bookings = match query.search {
            Some(ref term) if !term.trim().is_empty() => {
                let pattern = format!("%{}%", term.trim());
                sqlx::query_as::<_, Booking>(
                    r#"
                    SELECT * FROM bookings
                    WHERE visitor_name ILIKE $1
                       OR event_name ILIKE $1
                       OR status::TEXT ILIKE $1
                    ORDER BY booking_date DESC
                    "#,
                )
                .bind(pattern)
                .fetch_all(&self.pool)
                .await?
            }
            _ => {
                sqlx::query_as::<_, Booking>(
                    "SELECT * FROM bookings ORDER BY booking_date DESC",
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(bookings)
    }

    /// Get booking by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", id)))
    }

    /// Get bookings for a visitor
    pub async fn get_by_visitor(&self, visitor_id: Uuid) -> AppResult<Vec<Booking>> {
        let bookings = sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE visitor_id = $1 ORDER BY booking_date DESC",
        )
        .bind(visitor_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(bookings)
    }

    /// Get bookings for an event
    pub async fn get_by_event(&self, event_id: Uuid) -> AppResult<Vec<Booking>> {
        let bookings = sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE event_id = $1 ORDER BY booking_date DESC",
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(bookings)
    }

    /// Create a booking and reserve its seats as one atomic unit.
    ///
    /// The visitor and event are read fresh inside the transaction; the
    /// decrement re-checks availability, so a concurrent booking that
    /// drained the seats causes this one to fail with no state change.
    pub async fn create(&self, data: &CreateBooking) -> AppResult<Booking> {
        let mut tx = self.pool.begin().await?;

        let visitor = sqlx::query_as::<_, Visitor>("SELECT * FROM visitors WHERE id = $1")
            .bind(data.visitor_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Visitor {} not found", data.visitor_id)))?;

        let event = sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = $1")
            .bind(data.event_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Event {} not found", data.event_id)))?;

        let reserved = sqlx::query(
            "UPDATE events SET available_seats = available_seats - $1 WHERE id = $2 AND available_seats >= $1",
        )
        .bind(data.number_of_tickets)
        .bind(data.event_id)
        .execute(&mut *tx)
        .await?;

        if reserved.rows_affected() == 0 {
            return Err(AppError::InsufficientSeats {
                available: event.available_seats,
                requested: data.number_of_tickets,
            });
        }

        let total_amount = booking_total(data.number_of_tickets, event.ticket_price);

        let booking = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (
                visitor_id, event_id, visitor_name, event_name,
                number_of_tickets, total_amount, status
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(data.visitor_id)
        .bind(data.event_id)
        .bind(visitor.full_name())
        .bind(&event.event_name)
        .bind(data.number_of_tickets)
        .bind(total_amount)
        .bind(data.status.unwrap_or_default())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(booking)
    }

    /// Change a booking's ticket count and status, adjusting the event's
    /// seat counter by the delta in the same transaction.
    pub async fn update(&self, id: Uuid, data: &UpdateBooking) -> AppResult<Booking> {
        let mut tx = self.pool.begin().await?;

        let existing = sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", id)))?;

        let event = sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = $1")
            .bind(existing.event_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Event {} not found", existing.event_id)))?;

        let seat_delta = data.number_of_tickets - existing.number_of_tickets;

        // A decrease (negative delta) always applies and releases seats;
        // an increase must re-check availability at write time.
        if seat_delta != 0 {
            let adjusted = sqlx::query(
                "UPDATE events SET available_seats = available_seats - $1 WHERE id = $2 AND available_seats >= $1",
            )
            .bind(seat_delta)
            .bind(existing.event_id)
            .execute(&mut *tx)
            .await?;

            if adjusted.rows_affected() == 0 {
                return Err(AppError::InsufficientSeats {
                    available: event.available_seats,
                    requested: seat_delta,
                });
            }
        }

        let total_amount = booking_total(data.number_of_tickets, event.ticket_price);
        let status = data.status.unwrap_or(existing.status);

        let booking = sqlx::query_as::<_, Booking>(
            r#"
            UPDATE bookings
            SET number_of_tickets = $2, total_amount = $3, status = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(data.number_of_tickets)
        .bind(total_amount)
        .bind(status)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(booking)
    }

    /// Delete a booking, releasing its seats back to the event.
    ///
    /// The event is looked up fresh in the same transaction; if it was
    /// deleted in the meantime there is nothing to release into and only
    /// the booking row is removed. Deleting an already-deleted booking is
    /// NotFound, so seats can never be double-released.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let booking = sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", id)))?;

        let event_exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM events WHERE id = $1)",
        )
        .bind(booking.event_id)
        .fetch_one(&mut *tx)
        .await?;

        if event_exists {
            sqlx::query(
                "UPDATE events SET available_seats = available_seats + $1 WHERE id = $2",
            )
            .bind(booking.number_of_tickets)
            .bind(booking.event_id)
            .execute(&mut *tx)
            .await?;
        }

        sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }
}
