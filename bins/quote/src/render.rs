//! Renders entry views for the terminal.

use std::io::Write;

use swapquote_core::entry::EntryView;
use swapquote_shared::config::OutputFormat;

/// Writes one view in the configured format.
pub fn write_view<W: Write>(
    out: &mut W,
    view: &EntryView,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => write_text(out, view)?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, view)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn write_text<W: Write>(out: &mut W, view: &EntryView) -> std::io::Result<()> {
    writeln!(out, "You send:    {} {}", view.payin_amount, view.payin_currency)?;
    writeln!(out, "They get:    {} {}", view.payout_amount, view.payout_currency)?;
    writeln!(out, "Est. rate:   {}", view.exchange_rate)?;
    writeln!(out, "Service fee: {}", view.fee)?;
    if let Some(message) = &view.validation_message {
        writeln!(out, "Error:       {message}")?;
    }
    writeln!(out)
}
