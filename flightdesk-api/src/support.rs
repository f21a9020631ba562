use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use flightdesk_store::SupportTicket;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::AppError;
use crate::extract::ApiJson;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTicketRequest {
    pub pnr: String,
    pub issue_type: String,
    #[serde(default)]
    pub details: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTicketResponse {
    pub message: String,
    pub ticket_id: String,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/support", post(create_ticket))
        .route("/api/support/{ticket_id}", get(get_ticket))
        .route("/api/booking/{pnr}/support", get(tickets_for_booking))
}

/// POST /api/support
/// The PNR is not checked against existing bookings.
async fn create_ticket(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateTicketRequest>,
) -> Json<CreateTicketResponse> {
    let ticket = state
        .support
        .create_ticket(req.pnr, req.issue_type, req.details);

    info!("Created ticket {} for PNR {}", ticket.ticket_id, ticket.pnr);

    Json(CreateTicketResponse {
        message: "Support ticket created".to_string(),
        ticket_id: ticket.ticket_id,
    })
}

/// GET /api/support/{ticket_id}
async fn get_ticket(
    State(state): State<AppState>,
    Path(ticket_id): Path<String>,
) -> Result<Json<SupportTicket>, AppError> {
    Ok(Json(state.support.get(&ticket_id)?))
}

/// GET /api/booking/{pnr}/support
async fn tickets_for_booking(
    State(state): State<AppState>,
    Path(pnr): Path<String>,
) -> Json<Vec<SupportTicket>> {
    Json(state.support.for_pnr(&pnr))
}
