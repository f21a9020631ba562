use flightdesk_shared::pii::Masked;

use crate::{CoreError, CoreResult};

pub const DEFAULT_MIN_CARD_LENGTH: usize = 10;

/// Contract a real payment provider would be reached through.
pub trait PaymentGateway: Send + Sync {
    /// Charge `amount` for the booking identified by `pnr`.
    /// Rejections surface as [`CoreError::InvalidCard`].
    fn charge(&self, pnr: &str, card_number: &Masked<String>, amount: u32) -> CoreResult<()>;
}

/// Placeholder gateway: accepts any card number of at least `min_card_length`
/// characters. Digits and separators are not validated.
#[derive(Debug, Clone, Copy)]
pub struct CardFormatGateway {
    min_card_length: usize,
}

impl CardFormatGateway {
    pub fn new(min_card_length: usize) -> Self {
        Self { min_card_length }
    }
}

impl Default for CardFormatGateway {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_CARD_LENGTH)
    }
}

impl PaymentGateway for CardFormatGateway {
    fn charge(&self, _pnr: &str, card_number: &Masked<String>, _amount: u32) -> CoreResult<()> {
        if card_number.expose().chars().count() < self.min_card_length {
            return Err(CoreError::InvalidCard);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_length_check() {
        let gateway = CardFormatGateway::default();

        assert!(gateway.charge("PNR100000", &Masked::from("4111111111111111"), 500).is_ok());
        assert!(gateway.charge("PNR100000", &Masked::from("1234-5678-9012-3456"), 500).is_ok());
        assert!(gateway.charge("PNR100000", &Masked::from("1234567890"), 500).is_ok());
        assert_eq!(
            gateway.charge("PNR100000", &Masked::from("123456789"), 500),
            Err(CoreError::InvalidCard)
        );
        assert_eq!(
            gateway.charge("PNR100000", &Masked::from(""), 500),
            Err(CoreError::InvalidCard)
        );
    }
}
