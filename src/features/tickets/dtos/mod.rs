mod ticket_counter_dto;

pub use ticket_counter_dto::*;
