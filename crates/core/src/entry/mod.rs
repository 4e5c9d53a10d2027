//! Amount entry controller.
//!
//! Processes one raw keystroke string at a time: normalize the payin
//! amount, derive the payout amount from the offering's rate, then check
//! the payin bounds. Every step completes before the next event is
//! accepted, so payin and payout are never observed out of sync.

pub mod controller;
pub mod error;
pub mod limits;
pub mod offering;


pub use controller::{EntryController, EntryPhase, EntrySession, EntryView};
pub use error::EntryError;
pub use limits::{BoundViolation, PayinLimits};
pub use offering::Offering;
