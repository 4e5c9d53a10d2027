//! The single currency pair offered to the user.

use rust_decimal::Decimal;
use swapquote_shared::config::OfferingConfig;
use swapquote_shared::types::Currency;

use super::error::EntryError;
use crate::units::{UnitRate, format_money, from_cents, get_exchange_rate};

/// A pairing of payin and payout currencies with the rate between them.
///
/// Supplied by the caller and read-only for the lifetime of an entry session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Offering {
    payin: Currency,
    payout: Currency,
    rate: UnitRate,
    fee: Decimal,
}

impl Offering {
    /// Creates a new offering.
    ///
    /// # Errors
    ///
    /// Returns an error if the fee is negative or both currencies are the same.
    pub fn new(
        payin: Currency,
        payout: Currency,
        rate: UnitRate,
        fee_subunits: Option<i64>,
    ) -> Result<Self, EntryError> {
        if payin == payout {
            return Err(EntryError::SameCurrency(payin.code().to_string()));
        }
        let fee = from_cents(fee_subunits.unwrap_or(0))?;

        Ok(Self {
            payin,
            payout,
            rate,
            fee,
        })
    }

    /// Currency the user sends.
    #[must_use]
    pub const fn payin(&self) -> &Currency {
        &self.payin
    }

    /// Currency the user receives.
    #[must_use]
    pub const fn payout(&self) -> &Currency {
        &self.payout
    }

    /// Payout units per payin unit.
    #[must_use]
    pub const fn rate(&self) -> &UnitRate {
        &self.rate
    }

    /// Flat service fee, in payin currency.
    #[must_use]
    pub const fn fee(&self) -> Decimal {
        self.fee
    }

    /// Human-readable rate line, e.g. `"1 USD = 0.91 EUR"`.
    #[must_use]
    pub fn rate_line(&self) -> String {
        get_exchange_rate(&self.rate, self.payin.code(), self.payout.code())
    }

    /// Human-readable fee line, e.g. `"2.50 USD"`.
    #[must_use]
    pub fn fee_line(&self) -> String {
        format_money(self.fee, self.payin.code())
    }
}

impl TryFrom<&OfferingConfig> for Offering {
    type Error = EntryError;

    fn try_from(config: &OfferingConfig) -> Result<Self, Self::Error> {
        let payin: Currency = config
            .payin_currency
            .parse()
            .map_err(EntryError::InvalidCurrency)?;
        let payout: Currency = config
            .payout_currency
            .parse()
            .map_err(EntryError::InvalidCurrency)?;
        let rate = UnitRate::new(config.payout_units_per_payin_unit)?;

        Self::new(payin, payout, rate, config.fee_subunits)
    }
}
