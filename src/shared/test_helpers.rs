#[cfg(test)]
use crate::features::tickets::{
    routes,
    store::{memory::InMemoryTicketCounterStore, TicketCounterStore},
    TicketCounterService,
};

#[cfg(test)]
use axum::Router;

#[cfg(test)]
use chrono::{Offset, Utc};

#[cfg(test)]
use std::sync::Arc;

/// Service over the given store with UTC periods
#[cfg(test)]
pub fn ticket_service(store: Arc<dyn TicketCounterStore>) -> Arc<TicketCounterService> {
    Arc::new(TicketCounterService::new(store, Utc.fix()))
}

/// Tickets router over a fresh in-memory store, plus the store for inspection
#[cfg(test)]
pub fn ticket_router() -> (Router, Arc<InMemoryTicketCounterStore>) {
    let store = Arc::new(InMemoryTicketCounterStore::new());
    let router = routes::routes(ticket_service(store.clone()));
    (router, store)
}
