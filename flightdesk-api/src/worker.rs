use flightdesk_core::Notifier;
use flightdesk_shared::models::events::BookingEvent;
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Hands booking events to the notification worker without blocking the
/// request that produced them.
#[derive(Clone)]
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<BookingEvent>,
}

impl ChannelNotifier {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<BookingEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, event: BookingEvent) {
        if let Err(mpsc::error::SendError(event)) = self.tx.send(event) {
            warn!(
                "Notification worker stopped, dropping {} event for {}",
                event.topic(),
                event.pnr()
            );
        }
    }
}

/// Drains booking events until every sender is dropped.
pub async fn start_notification_worker(mut events: mpsc::UnboundedReceiver<BookingEvent>) {
    info!("Notification worker started");

    while let Some(event) = events.recv().await {
        dispatch(&event);
    }

    info!("Notification worker stopped");
}

// Email and refund providers are not wired up; the log line is the delivery.
fn dispatch(event: &BookingEvent) {
    match event {
        BookingEvent::TicketConfirmed(e) => info!(
            topic = event.topic(),
            booking_id = %e.booking_id,
            ticket_id = %e.ticket_id,
            "Sending email to {}: Ticket Confirmed for {}",
            e.email,
            e.pnr
        ),
        BookingEvent::RefundInitiated(e) => info!(
            topic = event.topic(),
            booking_id = %e.booking_id,
            "Initiating refund of ${} for {}",
            e.amount,
            e.pnr
        ),
    }
}
