use flightdesk_booking::BookingLifecycle;
use flightdesk_catalog::{FlightCatalog, FlightSeed};
use flightdesk_core::booking::{BookingStatus, Passenger};
use flightdesk_core::{CoreError, ErrorKind, MemoryNotifier, SequentialIdGenerator};
use flightdesk_shared::models::events::BookingEvent;
use flightdesk_shared::pii::Masked;
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

fn seed(flight_id: &str, seats: u32) -> FlightSeed {
    FlightSeed {
        flight_id: flight_id.to_string(),
        origin: "NYC".to_string(),
        destination: "LON".to_string(),
        date: "2025-10-15".to_string(),
        time: "10:00".to_string(),
        price: 500,
        seats,
    }
}

#[test]
fn test_full_journey_on_fl001() {
    let notifier = Arc::new(MemoryNotifier::new());
    let lifecycle = BookingLifecycle::new(FlightCatalog::with_default_seed())
        .with_id_generator(Arc::new(SequentialIdGenerator::new()))
        .with_notifier(notifier.clone());
    let seats_before = lifecycle.flight("FL001").unwrap().seats;

    let booking = lifecycle
        .create_booking("FL001", Passenger::new("Alice", "a@x.com", "P1"))
        .unwrap();
    assert_eq!(booking.status, BookingStatus::PendingPayment);
    assert_eq!(lifecycle.flight("FL001").unwrap().seats, seats_before - 1);

    let receipt = lifecycle
        .pay(&booking.pnr, &Masked::from("4111111111111111"))
        .unwrap();
    assert_eq!(receipt.booking.status, BookingStatus::Confirmed);
    assert!(receipt.booking.ticket_issued);

    let pass = lifecycle.check_in(&booking.pnr, "P1").unwrap();
    assert!(lifecycle.get_booking(&booking.pnr).unwrap().checked_in);
    assert_eq!(pass.flight_id, "FL001");
    assert_eq!(pass.passenger_name, "Alice");

    let cancelled = lifecycle.cancel(&booking.pnr).unwrap();
    assert_eq!(cancelled.status, BookingStatus::Cancelled);
    assert!(!cancelled.ticket_issued);

    let events = notifier.events();
    assert_eq!(events.len(), 2);
    match &events[0] {
        BookingEvent::TicketConfirmed(e) => {
            assert_eq!(e.pnr, booking.pnr);
            assert_eq!(e.ticket_id, receipt.ticket_id);
            assert_eq!(e.email.expose(), "a@x.com");
        }
        other => panic!("unexpected event {:?}", other),
    }
    assert!(matches!(events[1], BookingEvent::RefundInitiated(_)));
}

#[test]
fn test_sold_out_flight_creates_nothing() {
    let catalog = FlightCatalog::from_seeds(vec![seed("FL100", 0)]).unwrap();
    let lifecycle = BookingLifecycle::new(catalog);

    let err = lifecycle
        .create_booking("FL100", Passenger::new("Bob", "b@x.com", "P2"))
        .unwrap_err();

    assert_eq!(err, CoreError::NoSeatsAvailable("FL100".to_string()));
    assert_eq!(err.kind(), ErrorKind::Unavailable);
    assert_eq!(lifecycle.booking_count(), 0);
    assert_eq!(lifecycle.flight("FL100").unwrap().seats, 0);
}

#[test]
fn test_wrong_passport_on_confirmed_booking() {
    let lifecycle = BookingLifecycle::new(FlightCatalog::with_default_seed());
    let booking = lifecycle
        .create_booking("FL001", Passenger::new("Alice", "a@x.com", "P1"))
        .unwrap();
    lifecycle
        .pay(&booking.pnr, &Masked::from("1234-5678-9012-3456"))
        .unwrap();

    let err = lifecycle.check_in(&booking.pnr, "P2").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Forbidden);
    assert!(!lifecycle.get_booking(&booking.pnr).unwrap().checked_in);
}

#[test]
fn test_last_seat_goes_to_exactly_one_buyer() {
    let catalog = FlightCatalog::from_seeds(vec![seed("FL100", 25)]).unwrap();
    let lifecycle = Arc::new(BookingLifecycle::new(catalog));

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let lifecycle = Arc::clone(&lifecycle);
            thread::spawn(move || {
                (0..10)
                    .filter_map(|i| {
                        let passenger =
                            Passenger::new(format!("P{}-{}", t, i), "x@x.com", "X");
                        lifecycle.create_booking("FL100", passenger).ok()
                    })
                    .map(|b| b.pnr)
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let pnrs: Vec<String> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();
    let unique: HashSet<&String> = pnrs.iter().collect();

    assert_eq!(pnrs.len(), 25);
    assert_eq!(unique.len(), 25);
    assert_eq!(lifecycle.booking_count(), 25);

    let inventory = lifecycle.inventory("FL100").unwrap();
    assert_eq!(inventory.seats_remaining, 0);
    assert_eq!(inventory.seats_held, 25);
}

#[test]
fn test_seats_and_bookings_stay_balanced() {
    let catalog = FlightCatalog::from_seeds(vec![seed("FL100", 10)]).unwrap();
    let lifecycle = Arc::new(BookingLifecycle::new(catalog));

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let lifecycle = Arc::clone(&lifecycle);
            thread::spawn(move || {
                for i in 0..20 {
                    let passenger = Passenger::new(format!("P{}-{}", t, i), "x@x.com", "X");
                    if let Ok(booking) = lifecycle.create_booking("FL100", passenger) {
                        if i % 2 == 0 {
                            let _ = lifecycle.pay(&booking.pnr, &Masked::from("4111111111111111"));
                        }
                        if i % 3 == 0 {
                            lifecycle.cancel(&booking.pnr).unwrap();
                        }
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let inventory = lifecycle.inventory("FL100").unwrap();
    assert_eq!(
        inventory.seats_remaining as usize + inventory.seats_held,
        inventory.capacity as usize
    );
}
