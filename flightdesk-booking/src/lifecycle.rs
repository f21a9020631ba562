use chrono::Utc;
use flightdesk_catalog::{Flight, FlightCatalog};
use flightdesk_core::booking::{BoardingPass, Booking, BookingStatus, Passenger};
use flightdesk_core::{
    CardFormatGateway, CoreError, CoreResult, IdGenerator, NoopNotifier, Notifier,
    PaymentGateway, RandomIdGenerator,
};
use flightdesk_core::ids::is_well_formed_pnr;
use flightdesk_shared::models::events::{BookingEvent, RefundInitiatedEvent, TicketConfirmedEvent};
use flightdesk_shared::pii::Masked;
use flightdesk_store::BookingStore;
use serde::Serialize;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

use crate::boarding::BoardingPassIssuer;

/// PNR draws before giving up on finding an unused one.
pub const MAX_PNR_ATTEMPTS: usize = 32;

/// Seat inventory and bookings, always mutated together.
struct Ledger {
    catalog: FlightCatalog,
    bookings: BookingStore,
}

#[derive(Debug, Clone)]
pub struct PaymentReceipt {
    pub booking: Booking,
    pub ticket_id: Uuid,
}

/// A booking together with the flight it is on.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDetails {
    #[serde(flatten)]
    pub booking: Booking,
    pub flight_details: Option<Flight>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventorySnapshot {
    pub seats_remaining: u32,
    pub seats_held: usize,
    pub capacity: u32,
}

/// Drives bookings through PENDING_PAYMENT → CONFIRMED → CANCELLED while
/// keeping the flight seat counters in step.
///
/// One lock guards the catalog and the booking store, so every operation is
/// atomic with respect to the others. Readers share the lock.
pub struct BookingLifecycle {
    ledger: RwLock<Ledger>,
    ids: Arc<dyn IdGenerator>,
    notifier: Arc<dyn Notifier>,
    payments: Arc<dyn PaymentGateway>,
    boarding: BoardingPassIssuer,
}

impl BookingLifecycle {
    pub fn new(catalog: FlightCatalog) -> Self {
        Self {
            ledger: RwLock::new(Ledger {
                catalog,
                bookings: BookingStore::new(),
            }),
            ids: Arc::new(RandomIdGenerator),
            notifier: Arc::new(NoopNotifier),
            payments: Arc::new(CardFormatGateway::default()),
            boarding: BoardingPassIssuer::default(),
        }
    }

    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn with_payment_gateway(mut self, payments: Arc<dyn PaymentGateway>) -> Self {
        self.payments = payments;
        self
    }

    pub fn with_boarding_pass_issuer(mut self, boarding: BoardingPassIssuer) -> Self {
        self.boarding = boarding;
        self
    }

    pub fn search_flights(&self, origin: &str, destination: &str, date: &str) -> Vec<Flight> {
        self.read().catalog.find_by_route(origin, destination, date)
    }

    pub fn flight(&self, flight_id: &str) -> CoreResult<Flight> {
        self.read()
            .catalog
            .get(flight_id)
            .cloned()
            .ok_or_else(|| CoreError::FlightNotFound(flight_id.to_string()))
    }

    /// Reserve a seat and open a booking awaiting payment.
    pub fn create_booking(&self, flight_id: &str, passenger: Passenger) -> CoreResult<Booking> {
        let mut ledger = self.write();
        self.open_booking(&mut ledger, flight_id, passenger)
    }

    /// Like [`create_booking`](Self::create_booking), with the flight as it
    /// stood right after the seat was taken.
    pub fn create_booking_details(
        &self,
        flight_id: &str,
        passenger: Passenger,
    ) -> CoreResult<BookingDetails> {
        let mut ledger = self.write();
        let booking = self.open_booking(&mut ledger, flight_id, passenger)?;
        let flight_details = ledger.catalog.get(flight_id).cloned();

        Ok(BookingDetails {
            booking,
            flight_details,
        })
    }

    fn open_booking(
        &self,
        ledger: &mut Ledger,
        flight_id: &str,
        passenger: Passenger,
    ) -> CoreResult<Booking> {
        let flight = ledger
            .catalog
            .get(flight_id)
            .ok_or_else(|| CoreError::FlightNotFound(flight_id.to_string()))?;
        if flight.is_sold_out() {
            return Err(CoreError::NoSeatsAvailable(flight_id.to_string()));
        }
        let price = flight.price;

        // Allocate every id before touching inventory so failures leave no trace.
        let pnr = self.allocate_pnr(&ledger.bookings)?;
        let booking_id = self.ids.booking_id();
        if ledger.bookings.get_by_id(&booking_id).is_some() {
            return Err(CoreError::InternalError(format!(
                "booking id {} already allocated",
                booking_id
            )));
        }

        let booking = Booking::new(booking_id, pnr, flight_id.to_string(), passenger, price);
        ledger.catalog.decrement_seat(flight_id)?;
        if let Err(err) = ledger.bookings.insert(booking.clone()) {
            ledger.catalog.increment_seat(flight_id)?;
            return Err(err);
        }

        Ok(booking)
    }

    /// Transition: PendingPayment → Confirmed, issuing a ticket.
    pub fn pay(&self, pnr: &str, card_number: &Masked<String>) -> CoreResult<PaymentReceipt> {
        let booking = {
            let mut ledger = self.write();
            let booking = ledger.bookings.get_mut(pnr)?;

            booking.ensure_transition(BookingStatus::Confirmed)?;
            self.payments.charge(pnr, card_number, booking.total_price)?;
            booking.confirm()?;
            booking.clone()
        };

        let ticket_id = self.ids.ticket_id();
        self.notifier
            .notify(BookingEvent::TicketConfirmed(TicketConfirmedEvent {
                booking_id: booking.booking_id,
                pnr: booking.pnr.clone(),
                email: booking.passenger.email.clone(),
                ticket_id,
                timestamp: Utc::now().timestamp(),
            }));

        Ok(PaymentReceipt { booking, ticket_id })
    }

    /// Checks run in a fixed order: existence, status, identity.
    pub fn check_in(&self, pnr: &str, passport: &str) -> CoreResult<BoardingPass> {
        let mut guard = self.write();
        let ledger = &mut *guard;

        let booking = ledger.bookings.get_mut(pnr)?;
        if booking.status != BookingStatus::Confirmed {
            return Err(CoreError::BookingNotConfirmed(pnr.to_string()));
        }
        if !booking.passenger.matches_passport(passport) {
            return Err(CoreError::IdentityMismatch(pnr.to_string()));
        }

        let flight = ledger.catalog.get(&booking.flight_id).ok_or_else(|| {
            CoreError::InternalError(format!(
                "booking {} references unknown flight {}",
                pnr, booking.flight_id
            ))
        })?;

        booking.check_in()?;
        Ok(self.boarding.issue(booking, flight))
    }

    /// Transition: PendingPayment | Confirmed → Cancelled. The seat goes back
    /// on sale and the fare is refunded.
    pub fn cancel(&self, pnr: &str) -> CoreResult<Booking> {
        let booking = {
            let mut guard = self.write();
            let ledger = &mut *guard;

            let booking = ledger.bookings.get_mut(pnr)?;
            booking.ensure_transition(BookingStatus::Cancelled)?;
            ledger.catalog.increment_seat(&booking.flight_id)?;
            booking.cancel()?;
            booking.clone()
        };

        self.notifier
            .notify(BookingEvent::RefundInitiated(RefundInitiatedEvent {
                booking_id: booking.booking_id,
                pnr: booking.pnr.clone(),
                amount: booking.total_price,
                timestamp: Utc::now().timestamp(),
            }));

        Ok(booking)
    }

    pub fn get_booking(&self, pnr: &str) -> CoreResult<Booking> {
        self.read().bookings.get(pnr).cloned()
    }

    /// Booking plus a snapshot of its flight, read under one lock.
    pub fn booking_details(&self, pnr: &str) -> CoreResult<BookingDetails> {
        let ledger = self.read();
        let booking = ledger.bookings.get(pnr)?.clone();
        let flight_details = ledger.catalog.get(&booking.flight_id).cloned();

        Ok(BookingDetails {
            booking,
            flight_details,
        })
    }

    pub fn inventory(&self, flight_id: &str) -> CoreResult<InventorySnapshot> {
        let ledger = self.read();
        let flight = ledger
            .catalog
            .get(flight_id)
            .ok_or_else(|| CoreError::FlightNotFound(flight_id.to_string()))?;

        Ok(InventorySnapshot {
            seats_remaining: flight.seats,
            seats_held: ledger.bookings.seats_held(flight_id),
            capacity: flight.capacity,
        })
    }

    pub fn booking_count(&self) -> usize {
        self.read().bookings.len()
    }

    fn allocate_pnr(&self, bookings: &BookingStore) -> CoreResult<String> {
        for _ in 0..MAX_PNR_ATTEMPTS {
            let candidate = self.ids.pnr();
            if is_well_formed_pnr(&candidate) && !bookings.contains_pnr(&candidate) {
                return Ok(candidate);
            }
        }
        Err(CoreError::InternalError(format!(
            "no unused PNR after {} attempts",
            MAX_PNR_ATTEMPTS
        )))
    }

    // Every mutation validates before it writes, so a poisoned lock still
    // holds consistent data.
    fn read(&self) -> RwLockReadGuard<'_, Ledger> {
        self.ledger.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Ledger> {
        self.ledger.write().unwrap_or_else(PoisonError::into_inner)
    }
}
