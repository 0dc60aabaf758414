mod ticket_counter_service;

pub use ticket_counter_service::TicketCounterService;
