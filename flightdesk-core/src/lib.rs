pub mod booking;
pub mod ids;
pub mod notify;
pub mod payment;
pub mod search;

use booking::BookingStatus;
use serde::Serialize;

pub use booking::{BoardingPass, Booking, Passenger};
pub use ids::{IdGenerator, RandomIdGenerator, SequentialIdGenerator};
pub use notify::{MemoryNotifier, NoopNotifier, Notifier};
pub use payment::{CardFormatGateway, PaymentGateway};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("Flight not found: {0}")]
    FlightNotFound(String),
    #[error("No seats available on flight {0}")]
    NoSeatsAvailable(String),
    #[error("Booking not found: {0}")]
    BookingNotFound(String),
    #[error("Card rejected by payment gateway")]
    InvalidCard,
    #[error("Booking {0} is not confirmed")]
    BookingNotConfirmed(String),
    #[error("Passport does not match booking {0}")]
    IdentityMismatch(String),
    #[error("Invalid state transition from {from} to {to}")]
    InvalidState {
        from: BookingStatus,
        to: BookingStatus,
    },
    #[error("Support ticket not found: {0}")]
    TicketNotFound(String),
    #[error("Internal service error: {0}")]
    InternalError(String),
}

/// Caller-facing classification of a [`CoreError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    NotFound,
    Unavailable,
    InvalidInput,
    Forbidden,
    InvalidState,
    Internal,
}

impl CoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::FlightNotFound(_) | CoreError::NoSeatsAvailable(_) => ErrorKind::Unavailable,
            CoreError::BookingNotFound(_) | CoreError::TicketNotFound(_) => ErrorKind::NotFound,
            CoreError::InvalidCard => ErrorKind::InvalidInput,
            CoreError::IdentityMismatch(_) => ErrorKind::Forbidden,
            CoreError::BookingNotConfirmed(_) | CoreError::InvalidState { .. } => {
                ErrorKind::InvalidState
            }
            CoreError::InternalError(_) => ErrorKind::Internal,
        }
    }

    /// Message safe to hand back to a client. Both inventory misses collapse
    /// into "Flight unavailable" so callers cannot probe the catalog.
    pub fn public_message(&self) -> String {
        match self {
            CoreError::FlightNotFound(_) | CoreError::NoSeatsAvailable(_) => {
                "Flight unavailable".to_string()
            }
            CoreError::BookingNotFound(_) => "Booking not found".to_string(),
            CoreError::InvalidCard => "Invalid Card".to_string(),
            CoreError::BookingNotConfirmed(_) => "Booking not confirmed".to_string(),
            CoreError::IdentityMismatch(_) => "Identity mismatch".to_string(),
            CoreError::InvalidState { from, to } => {
                format!("Booking is {} and cannot become {}", from, to)
            }
            CoreError::TicketNotFound(_) => "Support ticket not found".to_string(),
            CoreError::InternalError(_) => "Internal Server Error".to_string(),
        }
    }
}

pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inventory_errors_share_a_kind() {
        let missing = CoreError::FlightNotFound("FL999".to_string());
        let sold_out = CoreError::NoSeatsAvailable("FL001".to_string());

        assert_eq!(missing.kind(), ErrorKind::Unavailable);
        assert_eq!(sold_out.kind(), ErrorKind::Unavailable);
        assert_eq!(missing.public_message(), sold_out.public_message());
        assert_ne!(missing, sold_out);
    }

    #[test]
    fn test_kind_mapping() {
        assert_eq!(CoreError::BookingNotFound("PNR000000".into()).kind(), ErrorKind::NotFound);
        assert_eq!(CoreError::InvalidCard.kind(), ErrorKind::InvalidInput);
        assert_eq!(CoreError::IdentityMismatch("PNR000000".into()).kind(), ErrorKind::Forbidden);
        assert_eq!(
            CoreError::InvalidState {
                from: BookingStatus::Cancelled,
                to: BookingStatus::Confirmed,
            }
            .kind(),
            ErrorKind::InvalidState
        );
    }
}
