use std::sync::Arc;

use chrono::FixedOffset;

use crate::core::error::{AppError, Result};
use crate::features::tickets::models::{
    CounterSnapshot, IssuedTicket, LocationId, Period, TicketCounter,
};
use crate::features::tickets::store::TicketCounterStore;
use crate::shared::types::PaginationQuery;

/// Issues sequential ticket numbers per business location and monthly period.
///
/// Holds no counter state of its own: every operation goes to the store, so any
/// number of instances can serve requests side by side.
pub struct TicketCounterService {
    store: Arc<dyn TicketCounterStore>,
    period_offset: FixedOffset,
}

impl TicketCounterService {
    pub fn new(store: Arc<dyn TicketCounterStore>, period_offset: FixedOffset) -> Self {
        Self {
            store,
            period_offset,
        }
    }

    /// The period new tickets are issued in right now
    pub fn current_period(&self) -> Period {
        Period::current(self.period_offset)
    }

    fn unavailable(operation: &str, location_id: LocationId, e: sqlx::Error) -> AppError {
        tracing::error!(
            "Failed to {} for location {}: {:?}",
            operation,
            location_id,
            e
        );
        AppError::CounterUnavailable(e.to_string())
    }

    /// Counter state for the location in the current period; the count is 0 if
    /// no ticket has been issued yet
    pub async fn get_current_count(&self, location_id: LocationId) -> Result<CounterSnapshot> {
        let period = self.current_period();
        self.get_current_count_for(location_id, period).await
    }

    pub async fn get_current_count_for(
        &self,
        location_id: LocationId,
        period: Period,
    ) -> Result<CounterSnapshot> {
        self.snapshot_for(location_id, period).await
    }

    async fn snapshot_for(
        &self,
        location_id: LocationId,
        period: Period,
    ) -> Result<CounterSnapshot> {
        let counter = self
            .store
            .fetch(location_id, period)
            .await
            .map_err(|e| Self::unavailable("read ticket counter", location_id, e))?;

        Ok(match counter {
            Some(counter) => CounterSnapshot::from_counter(location_id, period, &counter),
            None => CounterSnapshot::empty(location_id, period),
        })
    }

    /// Allocate the next ticket number for the location in the current period
    pub async fn get_next_ticket_number(&self, location_id: LocationId) -> Result<IssuedTicket> {
        let period = self.current_period();
        self.get_next_ticket_number_for(location_id, period).await
    }

    pub async fn get_next_ticket_number_for(
        &self,
        location_id: LocationId,
        period: Period,
    ) -> Result<IssuedTicket> {
        let ticket = self
            .store
            .increment(location_id, period)
            .await
            .map_err(|e| Self::unavailable("issue ticket", location_id, e))?;

        tracing::debug!(
            "Ticket issued: location={}, period={}, ticket={}",
            location_id,
            period,
            ticket
        );

        Ok(IssuedTicket {
            location_id,
            period,
            ticket,
        })
    }

    /// Zero the location's counter for the current period and flag the manual reset
    pub async fn reset_ticket_counter(&self, location_id: LocationId) -> Result<TicketCounter> {
        let period = self.current_period();
        self.reset_ticket_counter_for(location_id, period).await
    }

    pub async fn reset_ticket_counter_for(
        &self,
        location_id: LocationId,
        period: Period,
    ) -> Result<TicketCounter> {
        let counter = self
            .store
            .reset(location_id, period)
            .await
            .map_err(|e| Self::unavailable("reset ticket counter", location_id, e))?;

        tracing::info!(
            "Ticket counter reset: location={}, period={}",
            location_id,
            period
        );

        Ok(counter)
    }

    /// Counter rows for a location across periods, newest first, plus the total
    pub async fn list_history(
        &self,
        location_id: LocationId,
        pagination: &PaginationQuery,
    ) -> Result<(Vec<TicketCounter>, i64)> {
        let counters = self
            .store
            .list_for_location(location_id, pagination.limit(), pagination.offset())
            .await
            .map_err(|e| Self::unavailable("list ticket counters", location_id, e))?;

        let total = self
            .store
            .count_for_location(location_id)
            .await
            .map_err(|e| Self::unavailable("count ticket counters", location_id, e))?;

        Ok((counters, total))
    }

    /// Make sure each known location has a counter row for the current period.
    /// Existing rows are left untouched. Returns how many rows were created.
    pub async fn seed_locations(&self, location_ids: &[i32]) -> Result<usize> {
        let period = self.current_period();
        let mut created = 0;

        for &id in location_ids {
            let location_id = LocationId::new(id)?;
            let inserted = self
                .store
                .seed(location_id, period)
                .await
                .map_err(|e| Self::unavailable("seed ticket counter", location_id, e))?;

            if inserted {
                created += 1;
            }
        }

        tracing::info!(
            "Ticket counters seeded: period={}, locations={}, created={}",
            period,
            location_ids.len(),
            created
        );

        Ok(created)
    }
}
