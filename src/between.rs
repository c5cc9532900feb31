/// Window membership evaluator
/// Decides whether an instant falls inside a recurring daily window [start, stop)

use chrono::{DateTime, TimeZone, Timelike};
use std::time::Duration;
use tracing::trace;

/// Check if `instant` falls within the daily window `[start, stop)`.
///
/// `start` and `stop` are durations since midnight. When `stop` is earlier
/// than `start` the window crosses midnight. The instant's time of day is
/// taken in the offset it carries, so callers normalize everything to one
/// reference (usually UTC) before calling.
pub fn between<Tz: TimeZone>(start: Duration, stop: Duration, instant: &DateTime<Tz>) -> bool {
    let time_of_day = time_since_local_midnight(instant);
    let inside = contains_time_of_day(start, stop, time_of_day);
    trace!(?time_of_day, ?start, ?stop, inside, "Evaluated window membership");
    inside
}

/// Duration since midnight of the calendar day the instant's own offset
/// assigns to it. Never measured against a fixed UTC midnight.
pub fn time_since_local_midnight<Tz: TimeZone>(instant: &DateTime<Tz>) -> Duration {
    let local = instant.time();
    // nanosecond() exceeds 1e9 during a leap second; Duration::new carries it over
    Duration::new(u64::from(local.num_seconds_from_midnight()), local.nanosecond())
}

/// Testable version: membership of a bare time of day
pub fn contains_time_of_day(start: Duration, stop: Duration, time_of_day: Duration) -> bool {
    if start <= stop {
        start <= time_of_day && time_of_day < stop
    } else {
        time_of_day >= start || time_of_day < stop
    }
}



/// Kani formal verification proofs
#[cfg(kani)]
mod kani_proofs {
    use super::*;

    #[kani::proof]
    fn stop_never_inside() {
        let start = Duration::from_nanos(kani::any());
        let stop = Duration::from_nanos(kani::any());
        kani::assert(!contains_time_of_day(start, stop, stop), "stop must be exclusive");
    }

    #[kani::proof]
    fn start_inside_unless_empty() {
        let start = Duration::from_nanos(kani::any());
        let stop = Duration::from_nanos(kani::any());
        kani::assume(start != stop);
        kani::assert(contains_time_of_day(start, stop, start), "start must be inclusive");
    }
}
