//! Swapquote quote form driver.
//!
//! Stands in for the presentation layer: every stdin line is one raw
//! keystroke event for the "You send" field, and every event prints the
//! resulting send/receive view.
//!
//! Usage: printf '1\n10\n100\n' | cargo run --bin swapquote

mod render;

use std::io::{self, BufRead, Write};

use anyhow::Context;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use swapquote_core::entry::{EntryController, Offering, PayinLimits};
use swapquote_shared::{AppConfig, AppError, AppResult};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing (stderr, so stdout stays clean for views)
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "swapquote=info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    // Load configuration
    let config = AppConfig::load()
        .map_err(AppError::from)
        .inspect_err(|e| error!(code = e.error_code(), error = %e, "Configuration rejected"))
        .context("Failed to load configuration")?;

    let (offering, limits) = quote_setup(&config)
        .inspect_err(|e| error!(code = e.error_code(), error = %e, "Offering rejected"))
        .context("Invalid offering")?;
    info!(
        payin = %offering.payin(),
        payout = %offering.payout(),
        rate = %offering.rate(),
        min = ?limits.min(),
        max = ?limits.max(),
        "Offering loaded"
    );

    let mut controller = EntryController::new(offering, limits);
    let mut out = io::stdout().lock();

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read input")?;
        let view = controller.handle_input(&line);
        render::write_view(&mut out, &view, config.output.format)?;
    }

    out.flush()?;
    controller.reset();
    info!("Input closed");

    Ok(())
}

fn quote_setup(config: &AppConfig) -> AppResult<(Offering, PayinLimits)> {
    let offering =
        Offering::try_from(&config.offering).map_err(|e| AppError::Validation(e.to_string()))?;
    let limits = PayinLimits::from(&config.limits);
    Ok((offering, limits))
}
