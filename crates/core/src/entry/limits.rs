//! Payin amount bounds.

use rust_decimal::Decimal;
use serde::Serialize;
use swapquote_shared::config::LimitsConfig;
use swapquote_shared::types::Currency;

/// Reason a payin amount failed bound validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BoundViolation {
    /// Amount is below the minimum.
    BelowMinimum {
        /// The minimum payin amount.
        min: Decimal,
    },
    /// Amount is above the maximum.
    AboveMaximum {
        /// The maximum payin amount.
        max: Decimal,
    },
}

impl BoundViolation {
    /// User-facing message, e.g. `"Minimum order is 1 USD"`.
    #[must_use]
    pub fn message(&self, currency: &Currency) -> String {
        match self {
            Self::BelowMinimum { min } => format!("Minimum order is {} {currency}", min.normalize()),
            Self::AboveMaximum { max } => format!("Maximum order is {} {currency}", max.normalize()),
        }
    }
}

/// Optional minimum and maximum payin amounts, in whole payin units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PayinLimits {
    min: Option<Decimal>,
    max: Option<Decimal>,
}

impl PayinLimits {
    /// No bounds at all.
    pub const UNBOUNDED: Self = Self {
        min: None,
        max: None,
    };

    /// Creates limits from explicit optional bounds.
    #[must_use]
    pub const fn new(min: Option<Decimal>, max: Option<Decimal>) -> Self {
        Self { min, max }
    }

    /// Creates limits where a negative bound means "no bound".
    #[must_use]
    pub fn from_sentinels(min: Decimal, max: Decimal) -> Self {
        let bound = |value: Decimal| (value >= Decimal::ZERO).then_some(value);
        Self {
            min: bound(min),
            max: bound(max),
        }
    }

    /// Minimum payin amount, if bounded.
    #[must_use]
    pub const fn min(&self) -> Option<Decimal> {
        self.min
    }

    /// Maximum payin amount, if bounded.
    #[must_use]
    pub const fn max(&self) -> Option<Decimal> {
        self.max
    }

    /// Checks an amount against the bounds. The minimum is checked first.
    #[must_use]
    pub fn check(&self, amount: Decimal) -> Option<BoundViolation> {
        if let Some(min) = self.min.filter(|min| amount < *min) {
            return Some(BoundViolation::BelowMinimum { min });
        }
        if let Some(max) = self.max.filter(|max| amount > *max) {
            return Some(BoundViolation::AboveMaximum { max });
        }
        None
    }
}

impl From<&LimitsConfig> for PayinLimits {
    fn from(config: &LimitsConfig) -> Self {
        Self::from_sentinels(config.min_payin_amount, config.max_payin_amount)
    }
}
