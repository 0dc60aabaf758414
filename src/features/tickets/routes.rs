use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::tickets::handlers;
use crate::features::tickets::services::TicketCounterService;

/// Create routes for the tickets feature
pub fn routes(service: Arc<TicketCounterService>) -> Router {
    Router::new()
        .route(
            "/tickets/current/{location_id}",
            get(handlers::get_current_count),
        )
        .route("/tickets/next/{location_id}", get(handlers::get_next_ticket))
        .route(
            "/tickets/reset/{location_id}",
            post(handlers::reset_ticket_counter),
        )
        .route(
            "/tickets/history/{location_id}",
            get(handlers::list_counter_history),
        )
        .with_state(service)
}
