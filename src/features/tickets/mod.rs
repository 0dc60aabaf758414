//! Ticket numbering per business location and monthly period.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/tickets/current/{location_id}` | Current count and next ticket (read-only) |
//! | GET | `/tickets/next/{location_id}` | Issue the next ticket number |
//! | POST | `/tickets/reset/{location_id}` | Manual reset of the current period's counter |
//! | GET | `/tickets/history/{location_id}` | Counter per period, newest first |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

pub use services::TicketCounterService;
pub use store::PgTicketCounterStore;
