//! Fixed-scale amounts parsed from user-typed decimal text.
//!
//! CRITICAL: Digits beyond the scale are truncated, never rounded, so an
//! amount never overstates what the user typed.

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;
use swapquote_shared::types::DEFAULT_SCALE;
use tracing::debug;

use super::error::UnitsError;

/// Scale (fractional digits) used for every amount in this system.
pub const SCALE: u32 = DEFAULT_SCALE;

/// Largest scale `format_units` honours; larger requests are clamped.
pub const MAX_SCALE: u32 = 18;

/// Largest base-unit count accepted from user input (`u64::MAX`).
pub const MAX_BASE_UNITS: u128 = 18_446_744_073_709_551_615;

/// A non-negative amount held as a `Decimal` at a fixed scale.
///
/// The mantissa is the integer count of base units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Amount {
    value: Decimal,
}

impl Amount {
    /// Creates an amount from a raw base-unit count.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if the count does not fit a `Decimal` mantissa.
    pub fn from_base_units(base_units: u128, scale: u32) -> Result<Self, UnitsError> {
        let mantissa = i128::try_from(base_units).map_err(|_| UnitsError::OutOfRange)?;
        let value = Decimal::try_from_i128_with_scale(mantissa, clamp_scale(scale))
            .map_err(|_| UnitsError::OutOfRange)?;
        Ok(Self { value })
    }

    /// Creates a zero amount at the given scale.
    #[must_use]
    pub fn zero(scale: u32) -> Self {
        Self {
            value: Decimal::new(0, clamp_scale(scale)),
        }
    }

    /// Parses a decimal string, truncating at `scale`.
    ///
    /// Accepts an optional leading `+`, `,` thousands separators in the
    /// integer part (`"1,234,567"`), and a partial fraction (`"5."`, `".5"`).
    ///
    /// # Errors
    ///
    /// Returns `MalformedInput` for anything that is not a non-negative
    /// decimal number and `OutOfRange` when the base-unit count exceeds
    /// [`MAX_BASE_UNITS`].
    pub fn parse(raw: &str, scale: u32) -> Result<Self, UnitsError> {
        let scale = clamp_scale(scale);
        let malformed = || UnitsError::MalformedInput(raw.to_string());

        let trimmed = raw.trim();
        let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
        let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        if int_part.is_empty() && frac_part.is_empty() {
            return Err(malformed());
        }
        if !is_digits(frac_part) {
            return Err(malformed());
        }
        let int_digits = ungroup(int_part).ok_or_else(malformed)?;

        // Cut the fraction as text so no digit past the scale can round up.
        let kept: String = frac_part.chars().take(scale as usize).collect();
        let int_digits = match int_digits.trim_start_matches('0') {
            "" => "0",
            digits => digits,
        };
        let text = if kept.is_empty() {
            int_digits.to_string()
        } else {
            format!("{int_digits}.{kept}")
        };

        let mut value = text
            .parse::<Decimal>()
            .map_err(|_| UnitsError::OutOfRange)?
            .round_dp_with_strategy(scale, RoundingStrategy::ToZero);
        value.rescale(scale);

        if value.scale() != scale {
            return Err(UnitsError::OutOfRange);
        }
        let base_units = u128::try_from(value.mantissa()).map_err(|_| malformed())?;
        if base_units > MAX_BASE_UNITS {
            return Err(UnitsError::OutOfRange);
        }

        Ok(Self { value })
    }

    /// Parses user input, treating anything malformed or out of range as zero.
    #[must_use]
    pub fn from_input(raw: &str, scale: u32) -> Self {
        match Self::parse(raw, scale) {
            Ok(amount) => amount,
            Err(err) => {
                if !raw.trim().is_empty() {
                    debug!(error = %err, "Treating unparseable amount as zero");
                }
                Self::zero(scale)
            }
        }
    }

    /// Returns the integer base-unit count.
    #[must_use]
    pub fn base_units(&self) -> u128 {
        u128::try_from(self.value.mantissa()).unwrap_or(0)
    }

    /// Returns the number of fractional digits.
    #[must_use]
    pub fn scale(&self) -> u32 {
        self.value.scale()
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Returns the amount as an exact `Decimal`.
    #[must_use]
    pub const fn to_decimal(&self) -> Decimal {
        self.value
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Normalizes user-typed text to a canonical decimal string with exactly
/// `scale` fractional digits.
///
/// Never fails: empty or malformed input yields zero at the scale.
///
/// # Example
///
/// ```
/// use swapquote_core::units::format_units;
///
/// assert_eq!(format_units("12.5", 8), "12.50000000");
/// assert_eq!(format_units("abc", 8), "0.00000000");
/// ```
#[must_use]
pub fn format_units(raw: &str, scale: u32) -> String {
    Amount::from_input(raw, scale).to_string()
}

const fn clamp_scale(scale: u32) -> u32 {
    if scale > MAX_SCALE { MAX_SCALE } else { scale }
}

fn is_digits(text: &str) -> bool {
    text.bytes().all(|b| b.is_ascii_digit())
}

/// Strips thousands separators. The first group holds 1-3 digits and every
/// later group exactly 3, so a decimal comma (`"1,5"`) is rejected.
fn ungroup(int_part: &str) -> Option<String> {
    let mut groups = int_part.split(',');
    let first = groups.next().unwrap_or_default();
    let rest: Vec<&str> = groups.collect();

    if !is_digits(first) {
        return None;
    }
    if rest.is_empty() {
        return Some(first.to_string());
    }
    if first.is_empty() || first.len() > 3 {
        return None;
    }
    if rest.iter().any(|g| g.len() != 3 || !is_digits(g)) {
        return None;
    }

    Some(std::iter::once(first).chain(rest).collect())
}
