use flightdesk_shared::models::events::BookingEvent;
use std::sync::{Mutex, PoisonError};

/// Fire-and-forget side effects (confirmation email, refund).
///
/// Invoked synchronously, exactly once per successful payment or cancellation.
/// Implementations must not block; hand the event off and return.
pub trait Notifier: Send + Sync {
    fn notify(&self, event: BookingEvent);
}

/// Drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&self, _event: BookingEvent) {}
}

/// Keeps every event in memory. Handy in tests.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    events: Mutex<Vec<BookingEvent>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<BookingEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, event: BookingEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}
