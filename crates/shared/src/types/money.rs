//! Currency identifiers with a fixed base-unit scale.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Every currency in this system is represented internally as an integer
//! count of base units at `DEFAULT_SCALE` fractional digits.

use serde::{Deserialize, Serialize};

/// Number of fractional digits used for base units of every currency.
pub const DEFAULT_SCALE: u32 = 8;

/// Longest accepted currency code.
const MAX_CODE_LEN: usize = 10;

/// A currency code plus the base-unit scale used for it.
///
/// Codes are upper-cased on parse, so `"usd"` and `"USD"` are the same
/// currency. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency {
    code: String,
    scale: u32,
}

impl Currency {
    /// Returns the currency code (e.g., "USD", "BTC").
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the number of fractional digits in one base unit.
    #[must_use]
    pub const fn scale(&self) -> u32 {
        self.scale
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.code)
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        if code.is_empty()
            || code.len() > MAX_CODE_LEN
            || !code.chars().all(|c| c.is_ascii_alphanumeric())
        {
            return Err(format!("Invalid currency code: {s}"));
        }

        Ok(Self {
            code: code.to_ascii_uppercase(),
            scale: DEFAULT_SCALE,
        })
    }
}

impl TryFrom<String> for Currency {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.code
    }
}
