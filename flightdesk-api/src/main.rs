use anyhow::Context;
use flightdesk_api::{app, state::AppState, worker};
use flightdesk_store::app_config::Config;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "flightdesk_api=debug,tower_http=debug,axum::rejection=trace".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!("Starting FlightDesk API on port {}", config.server.port);

    // Confirmation emails and refunds are drained off the request path
    let (notifier, events) = worker::ChannelNotifier::new();
    tokio::spawn(worker::start_notification_worker(events));

    let app_state = AppState::from_config(&config, Arc::new(notifier))?;
    tracing::info!(flights = config.flight_seeds().len(), "Flight catalog loaded");

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
