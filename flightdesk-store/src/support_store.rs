use chrono::{DateTime, Utc};
use flightdesk_core::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::sync::{PoisonError, RwLock};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    Open,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportTicket {
    pub ticket_id: String,
    pub pnr: String,
    pub issue_type: String,
    pub details: String,
    pub status: TicketStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct Tickets {
    entries: Vec<SupportTicket>,
    next_seq: u64,
}

/// Append-only support intake.
///
/// The PNR is taken as given: customers may write in before their booking
/// can be looked up.
#[derive(Debug, Default)]
pub struct SupportTicketStore {
    tickets: RwLock<Tickets>,
}

impl SupportTicketStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_ticket(
        &self,
        pnr: impl Into<String>,
        issue_type: impl Into<String>,
        details: impl Into<String>,
    ) -> SupportTicket {
        let mut tickets = self.tickets.write().unwrap_or_else(PoisonError::into_inner);
        tickets.next_seq += 1;

        let ticket = SupportTicket {
            ticket_id: format!("TKT{:06}", tickets.next_seq),
            pnr: pnr.into(),
            issue_type: issue_type.into(),
            details: details.into(),
            status: TicketStatus::Open,
            created_at: Utc::now(),
        };
        tickets.entries.push(ticket.clone());
        ticket
    }

    pub fn get(&self, ticket_id: &str) -> CoreResult<SupportTicket> {
        self.tickets
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .iter()
            .find(|t| t.ticket_id == ticket_id)
            .cloned()
            .ok_or_else(|| CoreError::TicketNotFound(ticket_id.to_string()))
    }

    /// Tickets raised against `pnr`, oldest first.
    pub fn for_pnr(&self, pnr: &str) -> Vec<SupportTicket> {
        self.tickets
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .iter()
            .filter(|t| t.pnr == pnr)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tickets.read().unwrap_or_else(PoisonError::into_inner).entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_ticket_creation() {
        let store = SupportTicketStore::new();

        let first = store.create_ticket("PNR100000", "BAGGAGE", "Lost bag");
        let second = store.create_ticket("PNR100000", "REFUND", "Where is my refund?");

        assert_eq!(first.ticket_id, "TKT000001");
        assert_eq!(second.ticket_id, "TKT000002");
        assert_eq!(first.status, TicketStatus::Open);
        assert_eq!(store.get("TKT000002").unwrap().issue_type, "REFUND");
        assert_eq!(store.for_pnr("PNR100000").len(), 2);
    }

    #[test]
    fn test_unknown_pnr_accepted() {
        let store = SupportTicketStore::new();
        let ticket = store.create_ticket("PNR000000", "OTHER", "No booking yet");

        assert_eq!(ticket.pnr, "PNR000000");
        assert_eq!(store.len(), 1);
        assert!(matches!(store.get("TKT999999"), Err(CoreError::TicketNotFound(_))));
    }

    #[test]
    fn test_ids_unique_under_contention() {
        let store = Arc::new(SupportTicketStore::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    (0..50)
                        .map(|_| store.create_ticket("PNR100000", "OTHER", "").ticket_id)
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let ids: HashSet<String> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        assert_eq!(ids.len(), 400);
        assert_eq!(store.len(), 400);
    }

    #[test]
    fn test_wire_format() {
        let store = SupportTicketStore::new();
        let json = serde_json::to_value(store.create_ticket("PNR1", "DELAY", "late")).unwrap();

        assert_eq!(json["ticketId"], "TKT000001");
        assert_eq!(json["issueType"], "DELAY");
        assert_eq!(json["status"], "OPEN");
    }
}
