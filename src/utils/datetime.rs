//! ISO-8601 timestamp rendering
//!
//! Timestamps are rendered in extended ISO-8601 form with a literal `T`
//! separator. Timezone-aware values keep their offset (`+00:00`), naive values
//! are assumed to be UTC and get a trailing `Z`.

use crate::constants::{ISO_DATETIME_FORMAT, ISO_FRACTION_FORMAT, UTC_SUFFIX};
use crate::error::{ConversionError, Result};
use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, TimeZone, Timelike};

/// Naive layouts accepted by [`isoformat_str`], tried in order
const NAIVE_INPUT_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Offset layouts accepted by [`isoformat_str`] when RFC 3339 parsing fails
const AWARE_INPUT_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%.f%:z"];

/// Types that can be rendered as an ISO-8601 timestamp
pub trait IsoFormat {
    fn isoformat(&self) -> String;
}

impl IsoFormat for NaiveDateTime {
    /// No timezone attached, so the value is taken as UTC
    fn isoformat(&self) -> String {
        format!("{}{}", render_local(self), UTC_SUFFIX)
    }
}

impl<Tz: TimeZone> IsoFormat for DateTime<Tz> {
    fn isoformat(&self) -> String {
        format!("{}{}", render_local(&self.naive_local()), render_offset(self.offset().fix()))
    }
}

/// Render a timestamp in ISO-8601 form
///
/// ```
/// use chrono::NaiveDate;
/// use vr_extras::utils::datetime::isoformat;
///
/// let dt = NaiveDate::from_ymd_opt(2019, 10, 15)
///     .unwrap()
///     .and_hms_micro_opt(10, 23, 41, 115927)
///     .unwrap();
/// assert_eq!(isoformat(&dt), "2019-10-15T10:23:41.115927Z");
/// ```
pub fn isoformat<T: IsoFormat + ?Sized>(timestamp: &T) -> String {
    timestamp.isoformat()
}

/// Parse a timestamp string and render it with [`isoformat`]
///
/// Accepts RFC 3339 strings as well as ISO-8601 date-times with a `T` or space
/// separator and an optional offset. Anything else is a
/// [`ConversionError::Type`] error.
pub fn isoformat_str(input: &str) -> Result<String> {
    let trimmed = input.trim();

    if let Some(aware) = parse_aware(trimmed) {
        return Ok(aware.isoformat());
    }

    NAIVE_INPUT_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .map(|naive| naive.isoformat())
        .ok_or_else(|| {
            log::debug!("Rejected timestamp input: {}", input);
            ConversionError::type_mismatch(input, "timestamp")
        })
}

fn parse_aware(input: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt);
    }
    AWARE_INPUT_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(input, format).ok())
}

/// Date and wall-clock time, with microseconds only when they are non-zero
fn render_local(dt: &NaiveDateTime) -> String {
    let mut rendered = dt.format(ISO_DATETIME_FORMAT).to_string();
    if dt.nanosecond() / 1_000 != 0 {
        rendered.push_str(&dt.format(ISO_FRACTION_FORMAT).to_string());
    }
    rendered
}

/// `±HH:MM`, extended to `±HH:MM:SS` for offsets with a seconds component
fn render_offset(offset: FixedOffset) -> String {
    let total = offset.local_minus_utc();
    let sign = if total < 0 { '-' } else { '+' };
    let total = total.unsigned_abs();
    let (hours, minutes, seconds) = (total / 3600, total / 60 % 60, total % 60);

    if seconds == 0 {
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        format!("{}{:02}:{:02}:{:02}", sign, hours, minutes, seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_offset() {
        assert_eq!(render_offset(FixedOffset::east_opt(0).unwrap()), "+00:00");
        assert_eq!(render_offset(FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap()), "+05:30");
        assert_eq!(render_offset(FixedOffset::west_opt(8 * 3600).unwrap()), "-08:00");
        assert_eq!(render_offset(FixedOffset::east_opt(3600 + 15).unwrap()), "+01:00:15");
    }
}
