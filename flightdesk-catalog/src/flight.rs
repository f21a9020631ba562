use serde::{Deserialize, Serialize};

/// A scheduled flight. Only `seats` changes after startup.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub flight_id: String,
    pub origin: String,
    pub destination: String,
    pub date: String,
    pub time: String,
    pub price: u32,
    pub seats: u32,
    #[serde(skip)]
    pub capacity: u32,
}

impl Flight {
    pub fn serves(&self, origin: &str, destination: &str, date: &str) -> bool {
        self.origin.eq_ignore_ascii_case(origin)
            && self.destination.eq_ignore_ascii_case(destination)
            && self.date == date
    }

    pub fn is_sold_out(&self) -> bool {
        self.seats == 0
    }
}

/// Startup record for a flight, loaded from configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlightSeed {
    pub flight_id: String,
    pub origin: String,
    pub destination: String,
    pub date: String,
    pub time: String,
    pub price: u32,
    pub seats: u32,
}

impl From<FlightSeed> for Flight {
    fn from(seed: FlightSeed) -> Self {
        Self {
            flight_id: seed.flight_id,
            origin: seed.origin,
            destination: seed.destination,
            date: seed.date,
            time: seed.time,
            price: seed.price,
            seats: seed.seats,
            capacity: seed.seats,
        }
    }
}

fn seed(
    flight_id: &str,
    origin: &str,
    destination: &str,
    date: &str,
    time: &str,
    price: u32,
    seats: u32,
) -> FlightSeed {
    FlightSeed {
        flight_id: flight_id.to_string(),
        origin: origin.to_string(),
        destination: destination.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        price,
        seats,
    }
}

/// Schedule used when no flights are configured.
pub fn default_seed() -> Vec<FlightSeed> {
    vec![
        seed("FL001", "NYC", "LON", "2025-10-15", "10:00", 500, 150),
        seed("FL002", "NYC", "PAR", "2025-10-15", "14:00", 450, 120),
        seed("FL003", "LON", "NYC", "2025-10-20", "09:00", 520, 150),
        seed("FL004", "PAR", "NYC", "2025-10-20", "11:00", 480, 120),
    ]
}
