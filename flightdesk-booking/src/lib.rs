pub mod boarding;
pub mod lifecycle;

pub use boarding::{BoardingPassIssuer, FixedSeatAssigner, SeatAssigner, SeatAssignment};
pub use lifecycle::{BookingDetails, BookingLifecycle, InventorySnapshot, PaymentReceipt};
