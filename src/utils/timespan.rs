//! Human readable timespans
//!
//! Durations of a minute or more are broken down into days, hours, minutes and
//! seconds (`"58min 20s"`). Shorter durations are shown with a single unit picked
//! from seconds down to nanoseconds and rounded to a number of significant digits
//! (`"350 ms"`, `"1.5 us"`).

use crate::constants::{DEFAULT_TIMESPAN_PRECISION, LONG_UNITS, MAX_TIMESPAN_PRECISION, SHORT_SCALING, SHORT_UNITS};
use std::time::Duration;

/// Format a duration given in seconds, using 3 significant digits below one minute
///
/// ```
/// use vr_extras::utils::timespan::format_timespan;
///
/// assert_eq!(format_timespan(0.35), "350 ms");
/// assert_eq!(format_timespan(35.0), "35 s");
/// assert_eq!(format_timespan(3500.0), "58min 20s");
/// ```
///
/// Negative input is not supported; the result is unspecified but the call never panics.
pub fn format_timespan(seconds: f64) -> String {
    format_timespan_with_precision(seconds, DEFAULT_TIMESPAN_PRECISION)
}

/// Format a duration given in seconds with an explicit number of significant digits
///
/// `precision` only affects durations shorter than a minute; longer durations are
/// always truncated to whole seconds.
pub fn format_timespan_with_precision(seconds: f64, precision: usize) -> String {
    if seconds >= 60.0 {
        return format_long(seconds);
    }

    let order = if seconds > 0.0 {
        let magnitude = seconds.log10().floor();
        (-(magnitude / 3.0).floor()).clamp(0.0, 3.0) as usize
    } else {
        // zero, negative or NaN
        SHORT_UNITS.len() - 1
    };

    format!(
        "{} {}",
        format_significant(seconds * SHORT_SCALING[order], precision),
        SHORT_UNITS[order]
    )
}

/// Format a [`Duration`] the same way as [`format_timespan`]
pub fn format_duration(duration: Duration) -> String {
    format_timespan(duration.as_secs_f64())
}

fn format_long(seconds: f64) -> String {
    let mut parts = Vec::new();
    let mut leftover = seconds;

    for (suffix, length) in LONG_UNITS {
        let value = (leftover / length).trunc();
        if value > 0.0 {
            leftover %= length;
            parts.push(format!("{}{}", value, suffix));
        }
        if leftover < 1.0 {
            break;
        }
    }

    parts.join(" ")
}

/// Format a number with `precision` significant digits, like printf's `%.*g`
///
/// Scientific notation is used when the exponent is below -4 or not smaller than
/// the precision. Trailing zeros are removed in both notations. `precision` is
/// clamped to `1..=17`, the most digits an `f64` can carry.
///
/// ```
/// use vr_extras::utils::timespan::format_significant;
///
/// assert_eq!(format_significant(350.00000000000006, 3), "350");
/// assert_eq!(format_significant(1.26, 2), "1.3");
/// assert_eq!(format_significant(999.7, 3), "1e+03");
/// ```
pub fn format_significant(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let precision = precision.clamp(1, MAX_TIMESPAN_PRECISION);
    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", strip_trailing_zeros(mantissa), sign, exponent.abs())
    } else {
        let decimals = (precision as i32 - 1 - exponent) as usize;
        strip_trailing_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn strip_trailing_zeros(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
