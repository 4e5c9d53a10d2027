//! Entry controller: one send/receive form session.

use serde::Serialize;
use tracing::{debug, warn};

use super::limits::{BoundViolation, PayinLimits};
use super::offering::Offering;
use crate::units::Amount;

/// Processing phase of the most recent input event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryPhase {
    /// No input processed since the session started.
    #[default]
    Idle,
    /// Raw input is being normalized and the payout derived.
    Normalizing,
    /// Bounds have been checked and the result published.
    Validated,
}

/// Mutable state of one entry session.
///
/// The payout string is always derived from the payin string; there is
/// no independent payout state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntrySession {
    /// Canonical payin amount.
    pub payin_amount: String,
    /// Canonical payout amount derived from the payin amount.
    pub payout_amount: String,
    /// Bound violation of the payin amount, if any.
    pub violation: Option<BoundViolation>,
}

impl EntrySession {
    /// Returns true if the payin amount passed bound validation.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.violation.is_none()
    }
}

/// Everything a presentation layer needs to render the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryView {
    /// Payin currency code.
    pub payin_currency: String,
    /// Payout currency code.
    pub payout_currency: String,
    /// Canonical payin amount ("You send").
    pub payin_amount: String,
    /// Canonical payout amount ("They get").
    pub payout_amount: String,
    /// Whether the payin amount is within bounds.
    pub is_valid: bool,
    /// Bound violation, if any.
    pub violation: Option<BoundViolation>,
    /// User-facing validation message, if any.
    pub validation_message: Option<String>,
    /// Estimated rate line.
    pub exchange_rate: String,
    /// Service fee line.
    pub fee: String,
}

/// Drives one entry session against a fixed offering and bounds.
#[derive(Debug, Clone)]
pub struct EntryController {
    offering: Offering,
    limits: PayinLimits,
    session: EntrySession,
    phase: EntryPhase,
}

impl EntryController {
    /// Starts a new session. Nothing has been typed yet, so it is valid.
    #[must_use]
    pub fn new(offering: Offering, limits: PayinLimits) -> Self {
        Self {
            offering,
            limits,
            session: EntrySession::default(),
            phase: EntryPhase::Idle,
        }
    }

    /// Processes one raw input event and returns the updated view.
    ///
    /// The typed value is always stored, even when it fails validation.
    pub fn handle_input(&mut self, raw: &str) -> EntryView {
        self.phase = EntryPhase::Normalizing;

        let payin = Amount::from_input(raw, self.offering.payin().scale());
        let payout = self.offering.rate().apply(&payin).unwrap_or_else(|err| {
            warn!(error = %err, payin = %payin, "Payout derivation failed, showing zero");
            Amount::zero(payin.scale())
        });

        self.session.payin_amount = payin.to_string();
        self.session.payout_amount = payout.to_string();
        self.session.violation = self.limits.check(payin.to_decimal());

        self.phase = EntryPhase::Validated;

        debug!(
            raw = raw,
            payin = %self.session.payin_amount,
            payout = %self.session.payout_amount,
            valid = self.session.is_valid(),
            "Processed amount input"
        );

        self.view()
    }

    /// Returns the view for the current session state.
    #[must_use]
    pub fn view(&self) -> EntryView {
        let validation_message = self
            .session
            .violation
            .map(|v| v.message(self.offering.payin()));

        EntryView {
            payin_currency: self.offering.payin().code().to_string(),
            payout_currency: self.offering.payout().code().to_string(),
            payin_amount: self.session.payin_amount.clone(),
            payout_amount: self.session.payout_amount.clone(),
            is_valid: self.session.is_valid(),
            violation: self.session.violation,
            validation_message,
            exchange_rate: self.offering.rate_line(),
            fee: self.offering.fee_line(),
        }
    }

    /// Current session state.
    #[must_use]
    pub const fn session(&self) -> &EntrySession {
        &self.session
    }

    /// Phase of the most recent input event.
    #[must_use]
    pub const fn phase(&self) -> EntryPhase {
        self.phase
    }

    /// Offering this session quotes against.
    #[must_use]
    pub const fn offering(&self) -> &Offering {
        &self.offering
    }

    /// Payin bounds this session validates against.
    #[must_use]
    pub const fn limits(&self) -> &PayinLimits {
        &self.limits
    }

    /// Discards the session, as when the form unmounts.
    pub fn reset(&mut self) {
        self.session = EntrySession::default();
        self.phase = EntryPhase::Idle;
    }
}
