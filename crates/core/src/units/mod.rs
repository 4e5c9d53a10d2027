//! Unit conversion core.
//!
//! All money math is done on integer base-unit counts at a fixed scale.
//! Public helpers accept and return strings so a presentation layer can
//! call them with raw keystrokes.

pub mod amount;
pub mod error;
pub mod fee;
pub mod rate;

#[cfg(test)]
mod props;

pub use amount::{Amount, MAX_BASE_UNITS, MAX_SCALE, SCALE, format_units};
pub use error::UnitsError;
pub use fee::{FEE_DISPLAY_DP, format_fee, format_money, from_cents};
pub use rate::{RATE_DISPLAY_DP, UnitRate, convert, convert_to_base_units, get_exchange_rate};
