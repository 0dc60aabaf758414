use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::core::error::AppError;
use crate::features::tickets::models::{LocationId, Period};

/// Ticket after `count`, or an error once the period's sequence is exhausted
fn ticket_after(location_id: i32, count: i32) -> Result<i32, AppError> {
    count.checked_add(1).ok_or_else(|| {
        AppError::CounterUnavailable(format!(
            "Ticket sequence exhausted for location {}",
            location_id
        ))
    })
}

/// Database model for a ticket counter row, one per (location, year, month)
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct TicketCounter {
    pub id: i64,
    pub business_location_id: i32,
    pub year: i32,
    pub month: i32,
    /// Last issued ticket number for the period; 0 when none issued
    pub current_count: i32,
    /// Set when an operator reset the counter during this period
    pub manual_reset: bool,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl TicketCounter {
    pub fn next_ticket(&self) -> Result<i32, AppError> {
        ticket_after(self.business_location_id, self.current_count)
    }
}

/// Counter state for a location and period, whether or not a row exists yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterSnapshot {
    pub location_id: LocationId,
    pub period: Period,
    pub current_count: i32,
    pub manual_reset: bool,
}

impl CounterSnapshot {
    /// Snapshot for a location with no tickets issued in the period
    pub fn empty(location_id: LocationId, period: Period) -> Self {
        Self {
            location_id,
            period,
            current_count: 0,
            manual_reset: false,
        }
    }

    pub fn from_counter(location_id: LocationId, period: Period, counter: &TicketCounter) -> Self {
        Self {
            location_id,
            period,
            current_count: counter.current_count,
            manual_reset: counter.manual_reset,
        }
    }

    pub fn next_ticket(&self) -> Result<i32, AppError> {
        ticket_after(self.location_id.get(), self.current_count)
    }
}

/// A freshly allocated ticket number and the period it belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IssuedTicket {
    pub location_id: LocationId,
    pub period: Period,
    pub ticket: i32,
}
