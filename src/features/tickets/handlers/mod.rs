mod ticket_counter_handler;

pub use ticket_counter_handler::*;
