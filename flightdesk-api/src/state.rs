use anyhow::Context;
use flightdesk_booking::{BoardingPassIssuer, BookingLifecycle, FixedSeatAssigner};
use flightdesk_catalog::FlightCatalog;
use flightdesk_core::{CardFormatGateway, Notifier};
use flightdesk_store::app_config::Config;
use flightdesk_store::SupportTicketStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub lifecycle: Arc<BookingLifecycle>,
    pub support: Arc<SupportTicketStore>,
}

impl AppState {
    pub fn new(lifecycle: BookingLifecycle) -> Self {
        Self {
            lifecycle: Arc::new(lifecycle),
            support: Arc::new(SupportTicketStore::new()),
        }
    }

    pub fn from_config(config: &Config, notifier: Arc<dyn Notifier>) -> anyhow::Result<Self> {
        let catalog =
            FlightCatalog::from_seeds(config.flight_seeds()).context("Invalid flight catalog")?;

        let boarding = BoardingPassIssuer::new(
            Arc::new(FixedSeatAssigner::new(
                config.checkin.seat.as_str(),
                config.checkin.gate.as_str(),
            )),
            config.checkin.boarding_lead_minutes,
        );

        let lifecycle = BookingLifecycle::new(catalog)
            .with_notifier(notifier)
            .with_payment_gateway(Arc::new(CardFormatGateway::new(
                config.payment.min_card_length,
            )))
            .with_boarding_pass_issuer(boarding);

        Ok(Self::new(lifecycle))
    }
}
