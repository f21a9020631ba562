use serde::Deserialize;

/// Route search as sent by the booking front-end.
#[derive(Debug, Clone, Deserialize)]
pub struct FlightSearchQuery {
    pub origin: String,
    pub destination: String,
    /// `YYYY-MM-DD`, matched as an exact string.
    pub date: String,
}
