use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError};
use flightdesk_catalog::{default_seed, FlightSeed};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub checkin: CheckInConfig,
    pub payment: PaymentConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CheckInConfig {
    pub seat: String,
    pub gate: String,
    pub boarding_lead_minutes: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PaymentConfig {
    pub min_card_length: usize,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CatalogConfig {
    #[serde(default)]
    pub flights: Vec<FlightSeed>,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        Self::defaults()?
            // Optional: the built-in defaults cover every key
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg.. `FLIGHTDESK__SERVER__PORT=8080`
            .add_source(config::Environment::with_prefix("FLIGHTDESK").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// Built-in defaults overlaid with a TOML document.
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        Self::defaults()?
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    /// Configured flights, or the built-in schedule when none are set.
    pub fn flight_seeds(&self) -> Vec<FlightSeed> {
        if self.catalog.flights.is_empty() {
            default_seed()
        } else {
            self.catalog.flights.clone()
        }
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        config::Config::builder()
            .set_default("server.port", 3000_i64)?
            .set_default("checkin.seat", "12A")?
            .set_default("checkin.gate", "B4")?
            .set_default("checkin.boarding_lead_minutes", 30_i64)?
            .set_default("payment.min_card_length", 10_i64)
    }
}
