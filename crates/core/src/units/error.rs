//! Errors raised by the unit conversion core.

use thiserror::Error;

/// Errors that can occur while parsing, converting, or formatting amounts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitsError {
    /// Text is not a non-negative decimal number.
    ///
    /// Recovered locally by treating the amount as zero.
    #[error("Malformed amount: {0:?}")]
    MalformedInput(String),

    /// Amount has more base units than the system can represent.
    #[error("Amount exceeds the representable range")]
    OutOfRange,

    /// Negative subunit count passed to fee formatting.
    #[error("Amount cannot be negative: {0}")]
    InvalidAmount(i64),

    /// Exchange rate is zero, negative, non-finite, or too precise.
    #[error("Invalid exchange rate: {0}")]
    InvalidRate(String),
}
