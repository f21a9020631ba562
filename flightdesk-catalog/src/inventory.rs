use flightdesk_core::{CoreError, CoreResult};
use std::collections::HashMap;

use crate::flight::{default_seed, Flight, FlightSeed};

/// Seat inventory for every scheduled flight.
///
/// Flights keep their insertion order, which is also the order search results
/// come back in.
#[derive(Debug, Clone, Default)]
pub struct FlightCatalog {
    flights: Vec<Flight>,
    index: HashMap<String, usize>,
}

impl FlightCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_seeds(seeds: impl IntoIterator<Item = FlightSeed>) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for seed in seeds {
            catalog.add(seed)?;
        }
        Ok(catalog)
    }

    /// The built-in four-flight schedule.
    pub fn with_default_seed() -> Self {
        let mut catalog = Self::new();
        for seed in default_seed() {
            catalog.push(Flight::from(seed));
        }
        catalog
    }

    /// Register a flight
    pub fn add(&mut self, seed: FlightSeed) -> Result<(), CatalogError> {
        if self.index.contains_key(&seed.flight_id) {
            return Err(CatalogError::DuplicateFlight(seed.flight_id));
        }
        if seed.price == 0 {
            return Err(CatalogError::InvalidPrice(seed.flight_id));
        }

        self.push(Flight::from(seed));
        Ok(())
    }

    pub fn get(&self, flight_id: &str) -> Option<&Flight> {
        self.index.get(flight_id).map(|&i| &self.flights[i])
    }

    /// Case-insensitive on airports, exact on the date string.
    pub fn find_by_route(&self, origin: &str, destination: &str, date: &str) -> Vec<Flight> {
        self.flights
            .iter()
            .filter(|f| f.serves(origin, destination, date))
            .cloned()
            .collect()
    }

    /// Take one seat. Returns the seats left.
    pub fn decrement_seat(&mut self, flight_id: &str) -> CoreResult<u32> {
        let flight = self.get_mut(flight_id)?;

        if flight.is_sold_out() {
            return Err(CoreError::NoSeatsAvailable(flight_id.to_string()));
        }

        flight.seats -= 1;
        Ok(flight.seats)
    }

    /// Give one seat back. Returns the seats left.
    pub fn increment_seat(&mut self, flight_id: &str) -> CoreResult<u32> {
        let flight = self.get_mut(flight_id)?;

        if flight.seats >= flight.capacity {
            return Err(CoreError::InternalError(format!(
                "seat inventory for {} already at capacity {}",
                flight_id, flight.capacity
            )));
        }

        flight.seats += 1;
        Ok(flight.seats)
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Flight> {
        self.flights.iter()
    }

    fn push(&mut self, flight: Flight) {
        self.index.insert(flight.flight_id.clone(), self.flights.len());
        self.flights.push(flight);
    }

    fn get_mut(&mut self, flight_id: &str) -> CoreResult<&mut Flight> {
        let i = *self
            .index
            .get(flight_id)
            .ok_or_else(|| CoreError::FlightNotFound(flight_id.to_string()))?;
        Ok(&mut self.flights[i])
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Duplicate flight id: {0}")]
    DuplicateFlight(String),

    #[error("Flight {0} must have a positive price")]
    InvalidPrice(String),
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn test_seat_lifecycle() {
        let mut catalog = FlightCatalog::from_seeds(vec![seed("FL100", 2)]).unwrap();

        assert_eq!(catalog.decrement_seat("FL100").unwrap(), 1);
        assert_eq!(catalog.decrement_seat("FL100").unwrap(), 0);
        assert_eq!(
            catalog.decrement_seat("FL100"),
            Err(CoreError::NoSeatsAvailable("FL100".to_string()))
        );
        assert_eq!(catalog.get("FL100").unwrap().seats, 0);

        assert_eq!(catalog.increment_seat("FL100").unwrap(), 1);
        assert_eq!(catalog.increment_seat("FL100").unwrap(), 2);
        assert!(catalog.increment_seat("FL100").is_err());
        assert_eq!(catalog.get("FL100").unwrap().seats, 2);
    }

    #[test]
    fn test_unknown_flight() {
        let mut catalog = FlightCatalog::with_default_seed();

        assert_eq!(
            catalog.decrement_seat("FL999"),
            Err(CoreError::FlightNotFound("FL999".to_string()))
        );
        assert!(catalog.increment_seat("FL999").is_err());
        assert!(catalog.get("FL999").is_none());
    }

    #[test]
    fn test_search_keeps_insertion_order() {
        let mut catalog = FlightCatalog::new();
        catalog.add(seed("FL200", 10)).unwrap();
        catalog.add(seed("FL100", 10)).unwrap();
        let mut other = seed("FL300", 10);
        other.destination = "PAR".to_string();
        catalog.add(other).unwrap();

        let ids: Vec<String> = catalog
            .find_by_route("nyc", "lon", "2025-10-15")
            .into_iter()
            .map(|f| f.flight_id)
            .collect();
        assert_eq!(ids, vec!["FL200", "FL100"]);

        assert!(catalog.find_by_route("NYC", "LON", "2025-10-16").is_empty());
    }

    #[test]
    fn test_default_seed() {
        let catalog = FlightCatalog::with_default_seed();
        assert_eq!(catalog.len(), 4);

        let results = catalog.find_by_route("NYC", "LON", "2025-10-15");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].flight_id, "FL001");
        assert_eq!(results[0].seats, 150);
    }

    #[test]
    fn test_rejects_bad_seed() {
        let mut catalog = FlightCatalog::new();
        catalog.add(seed("FL100", 1)).unwrap();

        assert!(matches!(
            catalog.add(seed("FL100", 1)),
            Err(CatalogError::DuplicateFlight(_))
        ));

        let mut free = seed("FL101", 1);
        free.price = 0;
        assert!(matches!(catalog.add(free), Err(CatalogError::InvalidPrice(_))));
    }
}
