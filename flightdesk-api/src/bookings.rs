use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use flightdesk_booking::BookingDetails;
use flightdesk_core::booking::{BoardingPass, BookingStatus, Passenger};
use flightdesk_shared::pii::Masked;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::error::AppError;
use crate::extract::ApiJson;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub flight_id: String,
    #[serde(default)]
    pub passenger_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub passport: Masked<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub pnr: String,
    #[serde(default)]
    pub card_number: Masked<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    pub message: String,
    pub status: BookingStatus,
    pub ticket_id: Uuid,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInRequest {
    pub pnr: String,
    #[serde(default)]
    pub passport: Masked<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInResponse {
    pub message: String,
    pub boarding_pass: BoardingPass,
}

#[derive(Debug, Deserialize)]
pub struct CancelRequest {
    pub pnr: String,
}

#[derive(Debug, Serialize)]
pub struct CancelResponse {
    pub message: String,
    pub status: BookingStatus,
}

// ============================================================================
// Handlers
// ============================================================================

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/booking", post(create_booking))
        .route("/api/booking/{pnr}", get(get_booking))
        .route("/api/payment", post(pay))
        .route("/api/checkin", post(check_in))
        .route("/api/cancel", post(cancel))
}

/// POST /api/booking
/// Reserve a seat; the booking waits for payment.
async fn create_booking(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateBookingRequest>,
) -> Result<Json<BookingDetails>, AppError> {
    if req.passenger_name.trim().is_empty() || req.passport.expose().trim().is_empty() {
        return Err(AppError::ValidationError(
            "passengerName and passport are required".to_string(),
        ));
    }

    let passenger = Passenger {
        passenger_name: req.passenger_name,
        email: Masked::new(req.email),
        passport: req.passport,
    };
    let details = state
        .lifecycle
        .create_booking_details(&req.flight_id, passenger)?;

    info!(
        "Created Booking {} with PNR {}",
        details.booking.booking_id, details.booking.pnr
    );

    Ok(Json(details))
}

/// GET /api/booking/{pnr}
async fn get_booking(
    State(state): State<AppState>,
    Path(pnr): Path<String>,
) -> Result<Json<BookingDetails>, AppError> {
    Ok(Json(state.lifecycle.booking_details(&pnr)?))
}

/// POST /api/payment
async fn pay(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<PaymentRequest>,
) -> Result<Json<PaymentResponse>, AppError> {
    let receipt = state.lifecycle.pay(&req.pnr, &req.card_number)?;

    info!("Payment received for {}, ticket {}", req.pnr, receipt.ticket_id);

    Ok(Json(PaymentResponse {
        message: "Payment Successful".to_string(),
        status: receipt.booking.status,
        ticket_id: receipt.ticket_id,
    }))
}

/// POST /api/checkin
async fn check_in(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CheckInRequest>,
) -> Result<Json<CheckInResponse>, AppError> {
    let boarding_pass = state.lifecycle.check_in(&req.pnr, req.passport.expose())?;

    info!("Check-in successful for {}", req.pnr);

    Ok(Json(CheckInResponse {
        message: "Check-in Successful".to_string(),
        boarding_pass,
    }))
}

/// POST /api/cancel
/// Cancels the booking, releases the seat and starts the refund.
async fn cancel(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CancelRequest>,
) -> Result<Json<CancelResponse>, AppError> {
    let booking = state.lifecycle.cancel(&req.pnr)?;

    info!("Cancelled {}, refund of {} queued", booking.pnr, booking.total_price);

    Ok(Json(CancelResponse {
        message: "Booking Cancelled. Refund Initiated.".to_string(),
        status: booking.status,
    }))
}
