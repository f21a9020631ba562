use chrono::{Duration, NaiveTime};
use flightdesk_catalog::Flight;
use flightdesk_core::booking::{BoardingPass, Booking};
use std::sync::Arc;

pub const DEFAULT_SEAT: &str = "12A";
pub const DEFAULT_GATE: &str = "B4";
pub const DEFAULT_BOARDING_LEAD_MINUTES: i64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatAssignment {
    pub seat: String,
    pub gate: String,
}

/// Stand-in for a seat-map service.
pub trait SeatAssigner: Send + Sync {
    fn assign(&self, booking: &Booking, flight: &Flight) -> SeatAssignment;
}

/// Hands every passenger the same seat and gate.
#[derive(Debug, Clone)]
pub struct FixedSeatAssigner {
    seat: String,
    gate: String,
}

impl FixedSeatAssigner {
    pub fn new(seat: impl Into<String>, gate: impl Into<String>) -> Self {
        Self {
            seat: seat.into(),
            gate: gate.into(),
        }
    }
}

impl Default for FixedSeatAssigner {
    fn default() -> Self {
        Self::new(DEFAULT_SEAT, DEFAULT_GATE)
    }
}

impl SeatAssigner for FixedSeatAssigner {
    fn assign(&self, _booking: &Booking, _flight: &Flight) -> SeatAssignment {
        SeatAssignment {
            seat: self.seat.clone(),
            gate: self.gate.clone(),
        }
    }
}

/// Builds boarding passes for checked-in bookings
pub struct BoardingPassIssuer {
    assigner: Arc<dyn SeatAssigner>,
    boarding_lead: Duration,
}

impl BoardingPassIssuer {
    /// `boarding_lead_minutes` is clamped to a single day.
    pub fn new(assigner: Arc<dyn SeatAssigner>, boarding_lead_minutes: i64) -> Self {
        Self {
            assigner,
            boarding_lead: Duration::minutes(boarding_lead_minutes.clamp(0, 24 * 60)),
        }
    }

    pub fn issue(&self, booking: &Booking, flight: &Flight) -> BoardingPass {
        let SeatAssignment { seat, gate } = self.assigner.assign(booking, flight);

        BoardingPass {
            passenger_name: booking.passenger.passenger_name.clone(),
            flight_id: booking.flight_id.clone(),
            seat,
            gate,
            boarding_time: self.boarding_time(&flight.time),
            boarding_token: Self::boarding_token(booking),
        }
    }

    /// Departure minus the boarding lead, wrapping past midnight.
    /// Departure times that are not `HH:MM` are passed through untouched.
    fn boarding_time(&self, departure: &str) -> String {
        NaiveTime::parse_from_str(departure, "%H:%M")
            .map(|t| (t - self.boarding_lead).format("%H:%M").to_string())
            .unwrap_or_else(|_| departure.to_string())
    }

    // Format: FD-{pnr}-{short booking id}
    fn boarding_token(booking: &Booking) -> String {
        let id = booking.booking_id.simple().to_string();
        format!("FD-{}-{}", booking.pnr, id[..8].to_uppercase())
    }
}

impl Default for BoardingPassIssuer {
    fn default() -> Self {
        Self::new(
            Arc::new(FixedSeatAssigner::default()),
            DEFAULT_BOARDING_LEAD_MINUTES,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flightdesk_catalog::default_seed;
    use flightdesk_core::booking::Passenger;
    use uuid::Uuid;

    fn booking() -> Booking {
        Booking::new(
            Uuid::from_u128(0xabcdef12_0000_0000_0000_000000000001),
            "PNR100000".to_string(),
            "FL001".to_string(),
            Passenger::new("Alice", "a@x.com", "P1"),
            500,
        )
    }

    fn flight(time: &str) -> Flight {
        let mut flight = Flight::from(default_seed().remove(0));
        flight.time = time.to_string();
        flight
    }

    #[test]
    fn test_default_boarding_pass() {
        let pass = BoardingPassIssuer::default().issue(&booking(), &flight("10:00"));

        assert_eq!(pass.passenger_name, "Alice");
        assert_eq!(pass.flight_id, "FL001");
        assert_eq!(pass.seat, "12A");
        assert_eq!(pass.gate, "B4");
        assert_eq!(pass.boarding_time, "09:30");
        assert_eq!(pass.boarding_token, "FD-PNR100000-ABCDEF12");
    }

    #[test]
    fn test_boarding_time_wraps_and_tolerates_bad_input() {
        let issuer = BoardingPassIssuer::new(Arc::new(FixedSeatAssigner::new("1C", "A1")), 45);

        assert_eq!(issuer.issue(&booking(), &flight("00:15")).boarding_time, "23:30");
        assert_eq!(issuer.issue(&booking(), &flight("TBA")).boarding_time, "TBA");
        assert_eq!(issuer.issue(&booking(), &flight("00:15")).seat, "1C");
    }

    #[test]
    fn test_wire_format() {
        let pass = BoardingPassIssuer::default().issue(&booking(), &flight("10:00"));
        let json = serde_json::to_value(&pass).unwrap();

        assert_eq!(json["passenger"], "Alice");
        assert_eq!(json["flight"], "FL001");
        assert_eq!(json["boardingTime"], "09:30");
        assert!(json["qrCode"].as_str().unwrap().starts_with("FD-PNR100000-"));
    }
}
