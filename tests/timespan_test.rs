use std::time::Duration;
use vr_extras::utils::timespan::*;

#[test]
fn test_format_timespan_milliseconds() {
    assert_eq!(format_timespan(0.35), "350 ms");
}

#[test]
fn test_format_timespan_seconds() {
    assert_eq!(format_timespan(35.0), "35 s");
    assert_eq!(format_timespan(1.5), "1.5 s");
    assert_eq!(format_timespan(59.99), "60 s");
}

#[test]
fn test_format_timespan_minutes_and_seconds() {
    assert_eq!(format_timespan(3500.0), "58min 20s");
    assert_eq!(format_timespan(60.0), "1min");
}

#[test]
fn test_format_timespan_skips_zero_units() {
    assert_eq!(format_timespan(90061.0), "1d 1h 1min 1s");
    assert_eq!(format_timespan(86_400.0 + 5.0), "1d 5s");
    assert_eq!(format_timespan(7200.0), "2h");
}

#[test]
fn test_format_timespan_drops_fractional_seconds_above_a_minute() {
    assert_eq!(format_timespan(60.5), "1min");
    assert_eq!(format_timespan(125.9), "2min 5s");
}

#[test]
fn test_format_timespan_sub_millisecond_units() {
    assert_eq!(format_timespan(0.0000015), "1.5 us");
    assert_eq!(format_timespan(0.000000025), "25 ns");
    assert_eq!(format_timespan(0.001234), "1.23 ms");
}

#[test]
fn test_format_timespan_zero_is_nanoseconds() {
    assert_eq!(format_timespan(0.0), "0 ns");
}

#[test]
fn test_format_timespan_below_a_nanosecond_stays_in_nanoseconds() {
    assert_eq!(format_timespan(0.0000000005), "0.5 ns");
}

#[test]
fn test_format_timespan_with_precision() {
    assert_eq!(format_timespan_with_precision(0.123456, 5), "123.46 ms");
    assert_eq!(format_timespan_with_precision(0.123456, 1), "1e+02 ms");
    assert_eq!(format_timespan_with_precision(3500.0, 1), "58min 20s");
}

#[test]
fn test_format_timespan_with_huge_precision() {
    assert_eq!(format_timespan_with_precision(0.35, 1_000_000), "350 ms");
    assert_eq!(format_timespan_with_precision(0.35, 1_000_000_000), "350 ms");
    assert_eq!(format_timespan_with_precision(35.0, usize::MAX), "35 s");
}

#[test]
fn test_format_timespan_negative_does_not_panic() {
    let _ = format_timespan(-1.0);
    let _ = format_timespan(f64::NAN);
}

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(Duration::from_millis(350)), "350 ms");
    assert_eq!(format_duration(Duration::from_secs(3500)), "58min 20s");
    assert_eq!(format_duration(Duration::ZERO), "0 ns");
}
