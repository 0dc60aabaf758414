//! Persistence seam for ticket counters.
//!
//! Every mutation is a single atomic statement in the store, so concurrent
//! callers never observe or produce a lost update.

mod postgres;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;

use crate::features::tickets::models::{LocationId, Period, TicketCounter};

pub use postgres::PgTicketCounterStore;

#[async_trait]
pub trait TicketCounterStore: Send + Sync {
    /// Read the counter row for a location and period, if any. Never writes.
    async fn fetch(
        &self,
        location_id: LocationId,
        period: Period,
    ) -> Result<Option<TicketCounter>, sqlx::Error>;

    /// Increment the counter and return the new value. Creates the row at 1 when
    /// the period has no row yet.
    async fn increment(&self, location_id: LocationId, period: Period) -> Result<i32, sqlx::Error>;

    /// Zero the counter and set `manual_reset`, creating the row if needed
    async fn reset(
        &self,
        location_id: LocationId,
        period: Period,
    ) -> Result<TicketCounter, sqlx::Error>;

    /// Create a zero row if none exists. Returns true when a row was created.
    async fn seed(&self, location_id: LocationId, period: Period) -> Result<bool, sqlx::Error>;

    /// Rows for a location, newest period first
    async fn list_for_location(
        &self,
        location_id: LocationId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<TicketCounter>, sqlx::Error>;

    async fn count_for_location(&self, location_id: LocationId) -> Result<i64, sqlx::Error>;
}
