//! Analytics service
//!
//! Pure aggregation over the four collections: totals, revenue and
//! top-10 group-bys. Ties are broken by label so results are stable.

use rust_decimal::Decimal;
use sqlx::Row;

use crate::{
    api::analytics::{AnalyticsResponse, CityEntry, InterestEntry, PopularEvent},
    error::AppResult,
    repository::Repository,
};

const TOP_N: i64 = 10;

#[derive(Clone)]
pub struct AnalyticsService {
    repository: Repository,
}

impl AnalyticsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Get the park dashboard aggregates
    pub async fn get_analytics(&self) -> AppResult<AnalyticsResponse> {
        let pool = &self.repository.pool;

        let total_visitors: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM visitors")
            .fetch_one(pool)
            .await?;

        let total_bookings: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM bookings")
            .fetch_one(pool)
            .await?;

        let active_events: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM events WHERE is_active = TRUE AND event_date >= CURRENT_DATE",
        )
        .fetch_one(pool)
        .await?;

        let total_revenue: Decimal = sqlx::query_scalar(
            "SELECT COALESCE(SUM(total_amount), 0) FROM bookings",
        )
        .fetch_one(pool)
        .await?;

        // Popular events by booking count, with per-event revenue
        let popular_events = sqlx::query(
            r#"
            SELECT event_id, event_name,
                   COUNT(*) as booking_count,
                   SUM(total_amount) as revenue
            FROM bookings
            GROUP BY event_id, event_name
            ORDER BY booking_count DESC, event_name ASC
            LIMIT $1
            "#,
        )
        .bind(TOP_N)
        .fetch_all(pool)
        .await?
        .into_iter()
        .map(|row| PopularEvent {
            event_id: row.get("event_id"),
            event_name: row.get("event_name"),
            booking_count: row.get("booking_count"),
            revenue: row.get("revenue"),
        })
        .collect();

        // Top visitor cities (empty cities excluded)
        let top_cities = sqlx::query(
            r#"
            SELECT city, COUNT(*) as count
            FROM visitors
            WHERE city IS NOT NULL AND city != ''
            GROUP BY city
            ORDER BY count DESC, city ASC
            LIMIT $1
            "#,
        )
        .bind(TOP_N)
        .fetch_all(pool)
        .await?
        .into_iter()
        .map(|row| CityEntry {
            city: row.get("city"),
            count: row.get("count"),
        })
        .collect();

        // Popular interest tags, unnested from the visitor arrays
        let top_interests = sqlx::query(
            r#"
            SELECT interest, COUNT(*) as count
            FROM (SELECT UNNEST(interests) AS interest FROM visitors) tags
            WHERE interest != ''
            GROUP BY interest
            ORDER BY count DESC, interest ASC
            LIMIT $1
            "#,
        )
        .bind(TOP_N)
        .fetch_all(pool)
        .await?
        .into_iter()
        .map(|row| InterestEntry {
            interest: row.get("interest"),
            count: row.get("count"),
        })
        .collect();

        Ok(AnalyticsResponse {
            total_visitors,
            total_bookings,
            active_events,
            total_revenue,
            popular_events,
            top_cities,
            top_interests,
        })
    }
}
