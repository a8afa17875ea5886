//! Constants used throughout the crate
//!
//! Unit tables, defaults and file names live here so the formatter, the
//! configuration layer and the CLI agree on them.

// Timespan formatting
pub const DEFAULT_TIMESPAN_PRECISION: usize = 3;
pub const MAX_TIMESPAN_PRECISION: usize = 17;

/// Units used for durations of a minute or more, largest first
pub const LONG_UNITS: [(&str, f64); 4] = [("d", 86_400.0), ("h", 3_600.0), ("min", 60.0), ("s", 1.0)];

/// Units used for sub-minute durations, indexed by order of magnitude / 3
pub const SHORT_UNITS: [&str; 4] = ["s", "ms", "us", "ns"];
pub const SHORT_SCALING: [f64; 4] = [1.0, 1e3, 1e6, 1e9];

// ISO-8601 rendering
pub const ISO_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
pub const ISO_FRACTION_FORMAT: &str = "%.6f";
pub const UTC_SUFFIX: &str = "Z";

// Configuration
pub const APP_NAME: &str = "vr-extras";
pub const CONFIG_FILE_LOCAL: &str = "vr-extras.toml";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const CONFIG_GENERATED: &str = "Configuration file generated";
pub const CONFIG_HEADER: &str = "# vr-extras Configuration File";
pub const CONFIG_DATE_FORMAT: &str = "%Y-%m-%d";

// Logging
pub const LOG_FILE_NAME: &str = "vr-extras.log";
pub const LOG_TIMESTAMP_FORMAT: &str = "%H:%M:%S%.3f";
pub const DEFAULT_LOG_LEVEL: &str = "info";
