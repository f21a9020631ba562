pub mod flight;
pub mod inventory;

pub use flight::{default_seed, Flight, FlightSeed};
pub use inventory::{CatalogError, FlightCatalog};
