//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// The single currency pair offered to the user.
    pub offering: OfferingConfig,
    /// Payin amount bounds.
    #[serde(default)]
    pub limits: LimitsConfig,
    /// Driver output configuration.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Offering configuration, as supplied by the quoting side.
#[derive(Debug, Clone, Deserialize)]
pub struct OfferingConfig {
    /// Currency the user sends.
    pub payin_currency: String,
    /// Currency the user receives.
    pub payout_currency: String,
    /// Payout base units obtained per one payin base unit.
    pub payout_units_per_payin_unit: Decimal,
    /// Flat fee in fee-currency subunits (cents). Absent means zero.
    #[serde(default)]
    pub fee_subunits: Option<i64>,
}

/// Payin amount bounds. A negative bound means "no bound".
#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    /// Minimum payin amount, in whole payin units.
    #[serde(default = "default_unbounded")]
    pub min_payin_amount: Decimal,
    /// Maximum payin amount, in whole payin units.
    #[serde(default = "default_unbounded")]
    pub max_payin_amount: Decimal,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            min_payin_amount: default_unbounded(),
            max_payin_amount: default_unbounded(),
        }
    }
}

fn default_unbounded() -> Decimal {
    Decimal::NEGATIVE_ONE
}

/// Output rendering configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// How each entry view is printed.
    #[serde(default)]
    pub format: OutputFormat,
}

/// Output format for the line driver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per input line.
    Json,
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones overriding earlier ones:
    /// `config/default`, `config/{RUN_MODE}`, then `SWAPQUOTE__*` variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("SWAPQUOTE").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
