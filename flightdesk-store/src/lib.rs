pub mod app_config;
pub mod booking_store;
pub mod support_store;

pub use booking_store::BookingStore;
pub use support_store::{SupportTicket, SupportTicketStore, TicketStatus};
