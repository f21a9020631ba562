use flightdesk_core::booking::{Booking, BookingStatus};
use flightdesk_core::ids::is_well_formed_pnr;
use flightdesk_core::{CoreError, CoreResult};
use std::collections::HashMap;
use uuid::Uuid;

/// Every booking ever made, keyed by PNR with a secondary index on booking id.
///
/// Not synchronized; the lifecycle owns it behind its lock.
#[derive(Debug, Default)]
pub struct BookingStore {
    bookings: HashMap<String, Booking>,
    by_id: HashMap<Uuid, String>,
}

impl BookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains_pnr(&self, pnr: &str) -> bool {
        self.bookings.contains_key(pnr)
    }

    /// Both the PNR and the booking id must be unused.
    pub fn insert(&mut self, booking: Booking) -> CoreResult<()> {
        if !is_well_formed_pnr(&booking.pnr) {
            return Err(CoreError::InternalError(format!(
                "malformed PNR {:?}",
                booking.pnr
            )));
        }
        if self.contains_pnr(&booking.pnr) {
            return Err(CoreError::InternalError(format!(
                "PNR {} already allocated",
                booking.pnr
            )));
        }
        if self.by_id.contains_key(&booking.booking_id) {
            return Err(CoreError::InternalError(format!(
                "booking id {} already allocated",
                booking.booking_id
            )));
        }

        self.by_id.insert(booking.booking_id, booking.pnr.clone());
        self.bookings.insert(booking.pnr.clone(), booking);
        Ok(())
    }

    pub fn get(&self, pnr: &str) -> CoreResult<&Booking> {
        self.bookings
            .get(pnr)
            .ok_or_else(|| CoreError::BookingNotFound(pnr.to_string()))
    }

    pub fn get_mut(&mut self, pnr: &str) -> CoreResult<&mut Booking> {
        self.bookings
            .get_mut(pnr)
            .ok_or_else(|| CoreError::BookingNotFound(pnr.to_string()))
    }

    pub fn get_by_id(&self, booking_id: &Uuid) -> Option<&Booking> {
        self.by_id.get(booking_id).and_then(|pnr| self.bookings.get(pnr))
    }

    /// Bookings on `flight_id` still holding a seat.
    pub fn seats_held(&self, flight_id: &str) -> usize {
        self.bookings
            .values()
            .filter(|b| b.flight_id == flight_id && b.status != BookingStatus::Cancelled)
            .count()
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }
}
