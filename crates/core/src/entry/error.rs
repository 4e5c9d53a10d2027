//! Errors raised while assembling an entry session.

use thiserror::Error;

use crate::units::UnitsError;

/// Errors that can occur when building an offering or controller.
///
/// These are caller or configuration bugs. User keystrokes never produce
/// an `EntryError`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    /// A unit-level rule was violated (negative fee, bad rate).
    #[error(transparent)]
    Units(#[from] UnitsError),

    /// Currency code could not be parsed.
    #[error("Invalid currency: {0}")]
    InvalidCurrency(String),

    /// Payin and payout currencies must differ.
    #[error("Payin and payout currencies must be different: {0}")]
    SameCurrency(String),
}
