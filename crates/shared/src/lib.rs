//! Shared types, errors, and configuration for Swapquote.
//!
//! This crate provides common types used across all other crates:
//! - Currency identifiers with their base-unit scale
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
