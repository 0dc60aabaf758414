//! Test doubles for the counter store.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use crate::features::tickets::models::{LocationId, Period, TicketCounter};
use crate::features::tickets::store::TicketCounterStore;

#[derive(Default)]
struct Rows {
    next_id: i64,
    counters: HashMap<(LocationId, Period), TicketCounter>,
}

impl Rows {
    fn entry(&mut self, location_id: LocationId, period: Period) -> &mut TicketCounter {
        let next_id = &mut self.next_id;
        self.counters.entry((location_id, period)).or_insert_with(|| {
            *next_id += 1;
            let now = Utc::now();
            TicketCounter {
                id: *next_id,
                business_location_id: location_id.get(),
                year: period.year(),
                month: period.month() as i32,
                current_count: 0,
                manual_reset: false,
                created_at: now,
                last_updated: now,
            }
        })
    }
}

/// Store backed by a map behind one async mutex; each call is atomic
#[derive(Default)]
pub struct InMemoryTicketCounterStore {
    rows: Mutex<Rows>,
    calls: AtomicUsize,
    writes: AtomicUsize,
}

impl InMemoryTicketCounterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of store calls made so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Number of mutating calls made so far
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Put a location's counter at an arbitrary value
    pub async fn set_count(&self, location_id: LocationId, period: Period, count: i32) {
        let mut rows = self.rows.lock().await;
        rows.entry(location_id, period).current_count = count;
    }

    fn record(&self, write: bool) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if write {
            self.writes.fetch_add(1, Ordering::SeqCst);
        }
    }
}

#[async_trait]
impl TicketCounterStore for InMemoryTicketCounterStore {
    async fn fetch(
        &self,
        location_id: LocationId,
        period: Period,
    ) -> Result<Option<TicketCounter>, sqlx::Error> {
        self.record(false);
        let rows = self.rows.lock().await;
        Ok(rows.counters.get(&(location_id, period)).cloned())
    }

    async fn increment(&self, location_id: LocationId, period: Period) -> Result<i32, sqlx::Error> {
        self.record(true);
        let mut rows = self.rows.lock().await;
        let counter = rows.entry(location_id, period);
        counter.current_count = counter
            .current_count
            .checked_add(1)
            .ok_or_else(|| sqlx::Error::Protocol("integer out of range".to_string()))?;
        counter.last_updated = Utc::now();
        Ok(counter.current_count)
    }

    async fn reset(
        &self,
        location_id: LocationId,
        period: Period,
    ) -> Result<TicketCounter, sqlx::Error> {
        self.record(true);
        let mut rows = self.rows.lock().await;
        let counter = rows.entry(location_id, period);
        counter.current_count = 0;
        counter.manual_reset = true;
        counter.last_updated = Utc::now();
        Ok(counter.clone())
    }

    async fn seed(&self, location_id: LocationId, period: Period) -> Result<bool, sqlx::Error> {
        self.record(true);
        let mut rows = self.rows.lock().await;
        if rows.counters.contains_key(&(location_id, period)) {
            return Ok(false);
        }
        rows.entry(location_id, period);
        Ok(true)
    }

    async fn list_for_location(
        &self,
        location_id: LocationId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<TicketCounter>, sqlx::Error> {
        self.record(false);
        let rows = self.rows.lock().await;
        let mut counters: Vec<TicketCounter> = rows
            .counters
            .iter()
            .filter(|((location, _), _)| *location == location_id)
            .map(|(_, counter)| counter.clone())
            .collect();
        counters.sort_by(|a, b| (b.year, b.month).cmp(&(a.year, a.month)));

        Ok(counters
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect())
    }

    async fn count_for_location(&self, location_id: LocationId) -> Result<i64, sqlx::Error> {
        self.record(false);
        let rows = self.rows.lock().await;
        Ok(rows
            .counters
            .keys()
            .filter(|(location, _)| *location == location_id)
            .count() as i64)
    }
}

/// Store whose every call fails the way an exhausted pool does
pub struct UnavailableTicketCounterStore;

#[async_trait]
impl TicketCounterStore for UnavailableTicketCounterStore {
    async fn fetch(
        &self,
        _location_id: LocationId,
        _period: Period,
    ) -> Result<Option<TicketCounter>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn increment(
        &self,
        _location_id: LocationId,
        _period: Period,
    ) -> Result<i32, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn reset(
        &self,
        _location_id: LocationId,
        _period: Period,
    ) -> Result<TicketCounter, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn seed(&self, _location_id: LocationId, _period: Period) -> Result<bool, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn list_for_location(
        &self,
        _location_id: LocationId,
        _limit: i64,
        _offset: i64,
    ) -> Result<Vec<TicketCounter>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn count_for_location(&self, _location_id: LocationId) -> Result<i64, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }
}
