//! Exchange rates and payout derivation.
//!
//! CRITICAL: Conversion multiplies the integer base-unit count by the
//! rate's integer mantissa and rescales with floor division. The result is
//! the exact product truncated at the amount's scale, never rounded up.

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::amount::{Amount, SCALE};
use super::error::UnitsError;

/// Decimal places shown in the human-readable rate line.
pub const RATE_DISPLAY_DP: u32 = 4;

/// Fewest decimal places shown in the rate line after trimming zeros.
const RATE_MIN_DP: u32 = 2;

/// Payout base units obtained per one payin base unit.
///
/// Always positive. Stored normalized, with a mantissa that fits in `u64`
/// so the product with any accepted amount fits in `u128`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct UnitRate {
    value: Decimal,
    mantissa: u64,
}

impl UnitRate {
    /// Creates a rate from a decimal value.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRate` if the rate is not positive or carries more
    /// than 19 significant digits.
    pub fn new(rate: Decimal) -> Result<Self, UnitsError> {
        if rate <= Decimal::ZERO {
            return Err(UnitsError::InvalidRate(format!("{rate} is not positive")));
        }

        let value = rate.normalize();
        let mantissa = u64::try_from(value.mantissa())
            .map_err(|_| UnitsError::InvalidRate(format!("{rate} is too precise")))?;

        Ok(Self { value, mantissa })
    }

    /// Returns the rate as a decimal.
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.value
    }

    /// Multiplies an amount by this rate, truncating at the amount's scale.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if the intermediate product overflows or the
    /// payout does not fit a `Decimal`.
    pub fn apply(&self, amount: &Amount) -> Result<Amount, UnitsError> {
        let product = amount
            .base_units()
            .checked_mul(u128::from(self.mantissa))
            .ok_or(UnitsError::OutOfRange)?;
        let divisor = 10u128.pow(self.value.scale());

        Amount::from_base_units(product / divisor, amount.scale())
    }
}

impl TryFrom<Decimal> for UnitRate {
    type Error = UnitsError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UnitRate> for Decimal {
    fn from(rate: UnitRate) -> Self {
        rate.value
    }
}

impl TryFrom<f64> for UnitRate {
    type Error = UnitsError;

    /// Converts through the shortest decimal text that round-trips the
    /// float, so `0.91` becomes exactly `0.91` rather than its binary
    /// approximation.
    fn try_from(rate: f64) -> Result<Self, Self::Error> {
        if !rate.is_finite() {
            return Err(UnitsError::InvalidRate(rate.to_string()));
        }
        rate.to_string().parse()
    }
}

impl std::str::FromStr for UnitRate {
    type Err = UnitsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: Decimal = s
            .trim()
            .parse()
            .map_err(|_| UnitsError::InvalidRate(s.to_string()))?;
        Self::new(value)
    }
}

impl std::fmt::Display for UnitRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Converts an amount using the given rate.
///
/// # Errors
///
/// See [`UnitRate::apply`].
pub fn convert(amount: &Amount, rate: &UnitRate) -> Result<Amount, UnitsError> {
    rate.apply(amount)
}

/// Multiplies a decimal amount string by the rate and returns the product
/// as a canonical string at [`SCALE`].
///
/// Empty, zero, or malformed amounts yield zero.
///
/// # Example
///
/// ```
/// use swapquote_core::units::{UnitRate, convert_to_base_units};
///
/// let rate: UnitRate = "0.91".parse().unwrap();
/// assert_eq!(convert_to_base_units("100", &rate), "91.00000000");
/// ```
#[must_use]
pub fn convert_to_base_units(amount: &str, rate: &UnitRate) -> String {
    let amount = Amount::from_input(amount, SCALE);
    match rate.apply(&amount) {
        Ok(converted) => converted.to_string(),
        Err(err) => {
            warn!(error = %err, amount = %amount, rate = %rate, "Conversion overflowed");
            Amount::zero(SCALE).to_string()
        }
    }
}

/// Renders the rate as `"1 FROM = X TO"`.
///
/// X is rounded half-to-even at [`RATE_DISPLAY_DP`] places, with trailing
/// zeros trimmed down to two decimals. A rate that would round to zero is
/// shown at [`RATE_DISPLAY_DP`] significant digits instead.
#[must_use]
pub fn get_exchange_rate(rate: &UnitRate, from_currency: &str, to_currency: &str) -> String {
    let mut shown = rate
        .value()
        .round_dp_with_strategy(RATE_DISPLAY_DP, RoundingStrategy::MidpointNearestEven);
    if shown.is_zero() {
        // Rates below the display precision keep their leading significant digits.
        shown = rate
            .value()
            .round_sf_with_strategy(RATE_DISPLAY_DP, RoundingStrategy::MidpointNearestEven)
            .unwrap_or_else(|| rate.value());
    }
    let mut shown = shown.normalize();
    if shown.scale() < RATE_MIN_DP {
        shown.rescale(RATE_MIN_DP);
    }

    format!("1 {from_currency} = {shown} {to_currency}")
}
