use crate::pii::Masked;
use uuid::Uuid;

/// Emitted once per successful payment; drives the ticket confirmation email.
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq)]
pub struct TicketConfirmedEvent {
    pub booking_id: Uuid,
    pub pnr: String,
    pub email: Masked<String>,
    pub ticket_id: Uuid,
    pub timestamp: i64,
}

/// Emitted once per successful cancellation; drives the refund.
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq)]
pub struct RefundInitiatedEvent {
    pub booking_id: Uuid,
    pub pnr: String,
    pub amount: u32,
    pub timestamp: i64,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingEvent {
    TicketConfirmed(TicketConfirmedEvent),
    RefundInitiated(RefundInitiatedEvent),
}

impl BookingEvent {
    pub fn pnr(&self) -> &str {
        match self {
            BookingEvent::TicketConfirmed(e) => &e.pnr,
            BookingEvent::RefundInitiated(e) => &e.pnr,
        }
    }

    pub fn topic(&self) -> &'static str {
        match self {
            BookingEvent::TicketConfirmed(_) => "booking.confirmed",
            BookingEvent::RefundInitiated(_) => "booking.refunded",
        }
    }
}
