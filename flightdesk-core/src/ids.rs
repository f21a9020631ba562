use rand::Rng;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

pub const PNR_PREFIX: &str = "PNR";
pub const PNR_MIN: u32 = 100_000;
pub const PNR_MAX: u32 = 999_999;

/// Source of booking identifiers. Injected so tests can pin the values.
pub trait IdGenerator: Send + Sync {
    /// A candidate PNR. Uniqueness is checked by the caller.
    fn pnr(&self) -> String;

    fn booking_id(&self) -> Uuid;

    /// Ticket number handed out on payment (not stored).
    fn ticket_id(&self) -> Uuid;
}

pub fn format_pnr(number: u32) -> String {
    format!("{}{:06}", PNR_PREFIX, number)
}

/// `PNR` followed by exactly six ASCII digits.
pub fn is_well_formed_pnr(pnr: &str) -> bool {
    pnr.strip_prefix(PNR_PREFIX)
        .map(|digits| digits.len() == 6 && digits.bytes().all(|b| b.is_ascii_digit()))
        .unwrap_or(false)
}

/// Production generator: random six-digit PNRs and v4 UUIDs.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn pnr(&self) -> String {
        format_pnr(rand::thread_rng().gen_range(PNR_MIN..=PNR_MAX))
    }

    fn booking_id(&self) -> Uuid {
        Uuid::new_v4()
    }

    fn ticket_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Deterministic generator: PNR100000, PNR100001, ... and counter-derived UUIDs.
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    next_pnr: AtomicU64,
    next_uuid: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn pnr(&self) -> String {
        let span = u64::from(PNR_MAX - PNR_MIN + 1);
        let n = self.next_pnr.fetch_add(1, Ordering::Relaxed) % span;
        format_pnr(PNR_MIN + n as u32)
    }

    fn booking_id(&self) -> Uuid {
        Uuid::from_u128(u128::from(self.next_uuid.fetch_add(1, Ordering::Relaxed)) + 1)
    }

    fn ticket_id(&self) -> Uuid {
        let n = u128::from(self.next_uuid.fetch_add(1, Ordering::Relaxed)) + 1;
        Uuid::from_u128((1u128 << 64) | n)
    }
}
