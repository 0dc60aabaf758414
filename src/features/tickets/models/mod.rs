mod location;
mod period;
mod ticket_counter;

pub use location::LocationId;
pub use period::Period;
pub use ticket_counter::{CounterSnapshot, IssuedTicket, TicketCounter};
