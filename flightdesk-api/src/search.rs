use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use flightdesk_catalog::Flight;
use flightdesk_core::search::FlightSearchQuery;
use tracing::info;

use crate::extract::ApiQuery;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/flights", get(search_flights))
}

/// GET /api/flights?origin=NYC&destination=LON&date=2025-10-15
async fn search_flights(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<FlightSearchQuery>,
) -> Json<Vec<Flight>> {
    info!(
        "Searching: {} -> {} on {}",
        query.origin, query.destination, query.date
    );

    Json(
        state
            .lifecycle
            .search_flights(&query.origin, &query.destination, &query.date),
    )
}
