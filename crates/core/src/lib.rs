//! Core quoting logic for Swapquote.
//!
//! This crate contains pure conversion and validation logic with ZERO
//! network or storage dependencies.
//!
//! # Modules
//!
//! - `units` - Fixed-scale amount parsing, conversion, and display
//! - `entry` - Amount entry controller driving one send/receive form

pub mod entry;
pub mod units;
