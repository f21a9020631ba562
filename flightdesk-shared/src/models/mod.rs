pub mod events;

pub use events::{BookingEvent, RefundInitiatedEvent, TicketConfirmedEvent};
