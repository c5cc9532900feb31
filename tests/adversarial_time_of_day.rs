//! Adversarial Property-Based Tests for Time-of-Day Parsing and Windows
//!
//! # Attack Plan
//!
//! 1. **Format Attacks**: 24-hour clock, missing offset, named zones, seconds,
//!    unicode digits, control characters, injection.
//!
//! 2. **Offset Bounds**: ±2359, ±2400, garbage after the offset.
//!
//! 3. **Boundary Instants**: nanosecond before/at start and stop, leap-second
//!    nanoseconds, far-future and far-past dates.
//!
//! # Invariants
//!
//! - TimeOfDay::parse never panics
//! - Anything that parses is below 24h
//! - between never panics for any instant
//! - between agrees with a manual [start, stop) check on the UTC clock

use chrono::{DateTime, NaiveDate, TimeZone, Timelike, Utc};
use proptest::prelude::*;
use std::time::Duration;

use time_window::{between, TimeOfDay, Window};

const DAY: Duration = Duration::from_secs(24 * 3600);

// ============================================================================
// ADVERSARIAL GENERATORS
// ============================================================================

fn malformed_time() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("".to_string()),
        Just("   ".to_string()),
        Just("14:00".to_string()),
        Just("14:00 +0000".to_string()),
        Just("2:00 AM".to_string()),
        Just("2:00 AM UTC".to_string()),
        Just("2:00 AM Z".to_string()),
        Just("2:00:30 AM +0000".to_string()),
        Just("0:00 AM +0000".to_string()),
        Just("13:00 PM +0000".to_string()),
        Just("2:60 AM +0000".to_string()),
        Just("2:00 XM +0000".to_string()),
        Just("2:00 AM +2400".to_string()),
        Just("2:00 AM +99999".to_string()),
        Just("٢:٠٠ AM +0000".to_string()), // Arabic-Indic digits
        Just("２:００ AM +0000".to_string()), // Fullwidth digits
        Just("2:00\x00 AM +0000".to_string()),
        Just("2:00 AM +0000; DROP TABLE".to_string()),
        Just("2:00 AM +0000\r\nX-Injected: 1".to_string()),
    ]
}

fn any_instant() -> impl Strategy<Value = DateTime<Utc>> {
    // Roughly years 1900..2200
    (-2_208_988_800i64..7_258_118_400i64, 0u32..1_000_000_000u32)
        .prop_map(|(secs, nanos)| Utc.timestamp_opt(secs, nanos).unwrap())
}

fn within_day() -> impl Strategy<Value = Duration> {
    (0..DAY.as_nanos() as u64).prop_map(Duration::from_nanos)
}

// ============================================================================
// TESTS
// ============================================================================

proptest! {
    #[test]
    fn malformed_times_are_rejected(input in malformed_time()) {
        prop_assert!(TimeOfDay::parse(&input).is_err(), "{:?} should not parse", input);
    }

    #[test]
    fn parse_arbitrary_bytes_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let input = String::from_utf8_lossy(&bytes);
        if let Ok(tod) = TimeOfDay::parse(&input) {
            prop_assert!(tod.as_duration() < DAY);
        }
    }

    #[test]
    fn between_never_panics(start in any::<u64>(), stop in any::<u64>(), instant in any_instant()) {
        let _ = between(Duration::from_nanos(start), Duration::from_nanos(stop), &instant);
    }

    #[test]
    fn between_matches_manual_check(start in within_day(), stop in within_day(), instant in any_instant()) {
        let t = Duration::new(
            u64::from(instant.num_seconds_from_midnight()),
            instant.nanosecond(),
        );
        let expected = if start <= stop {
            t >= start && t < stop
        } else {
            t >= start || t < stop
        };
        prop_assert_eq!(between(start, stop, &instant), expected);
    }

    #[test]
    fn window_without_days_matches_between(start_h in 0u32..24, stop_h in 0u32..24, instant in any_instant()) {
        let start = TimeOfDay::from_hms(start_h, 0, 0).unwrap();
        let stop = TimeOfDay::from_hms(stop_h, 0, 0).unwrap();
        let window = Window::new(start, stop);
        prop_assert_eq!(
            window.contains(&instant),
            between(start.as_duration(), stop.as_duration(), &instant)
        );
    }
}

// ============================================================================
// DETERMINISTIC EDGE CASES
// ============================================================================

#[test]
fn leap_second_nanos_do_not_panic() {
    // chrono represents a leap second as nanosecond >= 1e9
    let instant = NaiveDate::from_ymd_opt(2016, 12, 31)
        .unwrap()
        .and_hms_nano_opt(23, 59, 59, 1_500_000_000)
        .unwrap()
        .and_utc();
    let start = Duration::from_secs(23 * 3600);
    assert!(between(start, Duration::ZERO, &instant));
}

#[test]
fn last_nanosecond_of_day() {
    let instant = NaiveDate::from_ymd_opt(2024, 2, 29)
        .unwrap()
        .and_hms_nano_opt(23, 59, 59, 999_999_999)
        .unwrap()
        .and_utc();
    let start = TimeOfDay::parse("11:59 PM +0000").unwrap().as_duration();
    assert!(between(start, Duration::ZERO, &instant));
    assert!(!between(Duration::ZERO, start, &instant));
}

#[test]
fn offset_extremes_parse() {
    assert_eq!(
        TimeOfDay::parse("12:00 AM +2359").unwrap(),
        TimeOfDay::from_hms(0, 1, 0).unwrap()
    );
    assert_eq!(
        TimeOfDay::parse("11:59 PM -2359").unwrap(),
        TimeOfDay::from_hms(23, 58, 0).unwrap()
    );
}
