//! Formatting and encoding helpers.
//!
//! Every function in here is pure and stateless, so they can be called from any
//! thread without coordination.
//!
//! # Available Utilities
//!
//! - [`timespan`] - Human readable durations (`"350 ms"`, `"58min 20s"`)
//! - [`datetime`] - ISO-8601 rendering of naive and timezone-aware timestamps
//! - [`encoding`] - Hex to URL-safe base64 and back

pub mod datetime;
pub mod encoding;
pub mod timespan;

pub use datetime::{isoformat, isoformat_str, IsoFormat};
pub use encoding::{base64url_to_hex, hex_to_base64url, hex_to_base64url_with, Padding};
pub use timespan::{format_duration, format_significant, format_timespan, format_timespan_with_precision};
