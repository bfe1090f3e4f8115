//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, environment variable names, API paths)
//! - CLI option types and parsing
//! - Configuration validation

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, ConfigValidationError, FailOn, LogFormat, LogLevel, OutputFormat};
