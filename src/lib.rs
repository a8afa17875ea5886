//! vr-extras - small formatting and encoding helpers
//!
//! This library provides a handful of pure functions: a human readable timespan
//! formatter, an ISO-8601 timestamp formatter, and conversions between hex
//! strings and URL-safe base64. A small CLI exposes each of them.
//!
//! # Modules
//!
//! * [`config`] - Configuration file handling
//! * [`error`] - Error types returned by the helpers
//! * [`logger`] - Logging setup for the CLI
//! * [`utils`] - The formatting and encoding helpers

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Error types for encoding and timestamp conversions
pub mod error;

/// Logging setup built on fern
pub mod logger;

/// Timespan, timestamp and encoding helpers
pub mod utils;

pub use error::{ConversionError, Result};
pub use utils::{
    base64url_to_hex, format_timespan, format_timespan_with_precision, hex_to_base64url, isoformat, isoformat_str,
    IsoFormat,
};
