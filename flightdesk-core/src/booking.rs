use chrono::{DateTime, Utc};
use flightdesk_shared::pii::Masked;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::{CoreError, CoreResult};

/// Booking status in the lifecycle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    PendingPayment,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    /// PENDING_PAYMENT → CONFIRMED → CANCELLED, plus PENDING_PAYMENT → CANCELLED.
    pub fn can_transition_to(self, next: BookingStatus) -> bool {
        matches!(
            (self, next),
            (BookingStatus::PendingPayment, BookingStatus::Confirmed)
                | (BookingStatus::PendingPayment, BookingStatus::Cancelled)
                | (BookingStatus::Confirmed, BookingStatus::Cancelled)
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BookingStatus::PendingPayment => "PENDING_PAYMENT",
            BookingStatus::Confirmed => "CONFIRMED",
            BookingStatus::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Passenger {
    pub passenger_name: String,
    pub email: Masked<String>,
    pub passport: Masked<String>,
}

impl Passenger {
    pub fn new(
        passenger_name: impl Into<String>,
        email: impl Into<String>,
        passport: impl Into<String>,
    ) -> Self {
        Self {
            passenger_name: passenger_name.into(),
            email: Masked::new(email.into()),
            passport: Masked::new(passport.into()),
        }
    }

    /// Exact string comparison, no normalization.
    pub fn matches_passport(&self, passport: &str) -> bool {
        self.passport.expose() == passport
    }
}

/// A reservation on a single flight. Never deleted; cancelled bookings stay
/// queryable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub booking_id: Uuid,
    pub pnr: String,
    pub flight_id: String,
    pub passenger: Passenger,
    pub status: BookingStatus,
    pub total_price: u32,
    pub ticket_issued: bool,
    pub checked_in: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    pub fn new(
        booking_id: Uuid,
        pnr: String,
        flight_id: String,
        passenger: Passenger,
        total_price: u32,
    ) -> Self {
        let now = Utc::now();
        Self {
            booking_id,
            pnr,
            flight_id,
            passenger,
            status: BookingStatus::PendingPayment,
            total_price,
            ticket_issued: false,
            checked_in: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Transition: PendingPayment → Confirmed (ticket issued)
    pub fn confirm(&mut self) -> CoreResult<()> {
        self.transition(BookingStatus::Confirmed)?;
        self.ticket_issued = true;
        Ok(())
    }

    /// Mark the passenger as checked in. Only valid while confirmed.
    pub fn check_in(&mut self) -> CoreResult<()> {
        if self.status != BookingStatus::Confirmed {
            return Err(CoreError::BookingNotConfirmed(self.pnr.clone()));
        }
        self.checked_in = true;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Transition: PendingPayment | Confirmed → Cancelled
    pub fn cancel(&mut self) -> CoreResult<()> {
        self.transition(BookingStatus::Cancelled)?;
        self.ticket_issued = false;
        self.checked_in = false;
        Ok(())
    }

    pub fn ensure_transition(&self, next: BookingStatus) -> CoreResult<()> {
        if self.status.can_transition_to(next) {
            Ok(())
        } else {
            Err(CoreError::InvalidState {
                from: self.status,
                to: next,
            })
        }
    }

    fn transition(&mut self, next: BookingStatus) -> CoreResult<()> {
        self.ensure_transition(next)?;
        self.status = next;
        self.updated_at = Utc::now();
        Ok(())
    }
}

/// Issued at check-in. Field names match what the kiosk front-end expects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BoardingPass {
    #[serde(rename = "passenger")]
    pub passenger_name: String,
    #[serde(rename = "flight")]
    pub flight_id: String,
    pub seat: String,
    pub gate: String,
    pub boarding_time: String,
    #[serde(rename = "qrCode")]
    pub boarding_token: String,
}
