//! Service fee display.

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;

use super::error::UnitsError;

/// Decimal places used when displaying fees (cents convention).
pub const FEE_DISPLAY_DP: u32 = 2;

/// Converts a subunit (cent) count into a decimal amount.
///
/// # Errors
///
/// Returns `InvalidAmount` for negative counts. A negative fee is a
/// configuration bug, never user input.
pub fn from_cents(subunits: i64) -> Result<Decimal, UnitsError> {
    if subunits < 0 {
        return Err(UnitsError::InvalidAmount(subunits));
    }
    Ok(Decimal::new(subunits, FEE_DISPLAY_DP))
}

/// Renders an amount as `"1,234.56 CODE"`.
///
/// Digits past two decimals are truncated.
#[must_use]
pub fn format_money(amount: Decimal, currency: &str) -> String {
    let mut shown = amount.round_dp_with_strategy(FEE_DISPLAY_DP, RoundingStrategy::ToZero);
    shown.rescale(FEE_DISPLAY_DP);

    let text = shown.abs().to_string();
    let (whole, frac) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let sign = if shown.is_sign_negative() && !shown.is_zero() { "-" } else { "" };

    format!("{sign}{}.{frac} {currency}", group_thousands(whole))
}

/// Formats an optional fee given in subunits. Absent means zero.
///
/// # Errors
///
/// Returns `InvalidAmount` for negative subunit counts.
///
/// # Example
///
/// ```
/// use swapquote_core::units::format_fee;
///
/// assert_eq!(format_fee(Some(250), "USD").unwrap(), "2.50 USD");
/// assert_eq!(format_fee(None, "USD").unwrap(), "0.00 USD");
/// ```
pub fn format_fee(fee_subunits: Option<i64>, currency: &str) -> Result<String, UnitsError> {
    let fee = from_cents(fee_subunits.unwrap_or(0))?;
    Ok(format_money(fee, currency))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
