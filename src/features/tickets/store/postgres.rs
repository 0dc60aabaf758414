use async_trait::async_trait;
use sqlx::PgPool;

use crate::features::tickets::models::{LocationId, Period, TicketCounter};
use crate::features::tickets::store::TicketCounterStore;

/// `ticket_counters` table in PostgreSQL
pub struct PgTicketCounterStore {
    pool: PgPool,
}

impl PgTicketCounterStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TicketCounterStore for PgTicketCounterStore {
    async fn fetch(
        &self,
        location_id: LocationId,
        period: Period,
    ) -> Result<Option<TicketCounter>, sqlx::Error> {
        sqlx::query_as::<_, TicketCounter>(
            r#"
            SELECT id, business_location_id, year, month, current_count, manual_reset,
                   created_at, last_updated
            FROM ticket_counters
            WHERE business_location_id = $1 AND year = $2 AND month = $3
            "#,
        )
        .bind(location_id.get())
        .bind(period.year())
        .bind(period.month() as i32)
        .fetch_optional(&self.pool)
        .await
    }

    async fn increment(&self, location_id: LocationId, period: Period) -> Result<i32, sqlx::Error> {
        // Read-modify-write happens inside one statement under the row lock
        sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO ticket_counters (business_location_id, year, month, current_count)
            VALUES ($1, $2, $3, 1)
            ON CONFLICT (business_location_id, year, month)
            DO UPDATE SET
                current_count = ticket_counters.current_count + 1,
                last_updated = NOW()
            RETURNING current_count
            "#,
        )
        .bind(location_id.get())
        .bind(period.year())
        .bind(period.month() as i32)
        .fetch_one(&self.pool)
        .await
    }

    async fn reset(
        &self,
        location_id: LocationId,
        period: Period,
    ) -> Result<TicketCounter, sqlx::Error> {
        sqlx::query_as::<_, TicketCounter>(
            r#"
            INSERT INTO ticket_counters
                (business_location_id, year, month, current_count, manual_reset)
            VALUES ($1, $2, $3, 0, TRUE)
            ON CONFLICT (business_location_id, year, month)
            DO UPDATE SET
                current_count = 0,
                manual_reset = TRUE,
                last_updated = NOW()
            RETURNING id, business_location_id, year, month, current_count, manual_reset,
                      created_at, last_updated
            "#,
        )
        .bind(location_id.get())
        .bind(period.year())
        .bind(period.month() as i32)
        .fetch_one(&self.pool)
        .await
    }

    async fn seed(&self, location_id: LocationId, period: Period) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO ticket_counters (business_location_id, year, month, current_count)
            VALUES ($1, $2, $3, 0)
            ON CONFLICT (business_location_id, year, month) DO NOTHING
            "#,
        )
        .bind(location_id.get())
        .bind(period.year())
        .bind(period.month() as i32)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn list_for_location(
        &self,
        location_id: LocationId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<TicketCounter>, sqlx::Error> {
        sqlx::query_as::<_, TicketCounter>(
            r#"
            SELECT id, business_location_id, year, month, current_count, manual_reset,
                   created_at, last_updated
            FROM ticket_counters
            WHERE business_location_id = $1
            ORDER BY year DESC, month DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(location_id.get())
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
    }

    async fn count_for_location(&self, location_id: LocationId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM ticket_counters WHERE business_location_id = $1",
        )
        .bind(location_id.get())
        .fetch_one(&self.pool)
        .await
    }
}
