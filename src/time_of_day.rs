/// Time-of-day value type
/// A duration since midnight, parsed from strings like "3:04 PM -0700"

use chrono::{DateTime, FixedOffset, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Human format accepted by [`TimeOfDay::parse`], e.g. "2:00 AM -0600"
pub const TIME_OF_DAY_FORMAT: &str = "%I:%M %p %z";

/// Date prefixed to the input so chrono has a full timestamp to resolve the
/// offset against. Only the UTC time of day survives.
const REFERENCE_DATE: &str = "2000-01-01";

const SECS_PER_HOUR: u64 = 3600;
const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseTimeError {
    #[error("time of day is empty")]
    Empty,

    #[error("time of day '{input}' does not match \"h:mm AM/PM -0700\": {source}")]
    Format {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Duration since midnight (UTC reference frame).
///
/// The value is not clamped: `from_duration` accepts anything, and callers
/// are expected to stay within `[0, 24h)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(Duration);

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(Duration::ZERO);

    /// Build from wall-clock components. Returns None for anything that is
    /// not a valid time of day.
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Option<Self> {
        if hour >= 24 || minute >= 60 || second >= 60 {
            return None;
        }
        let secs = u64::from(hour) * SECS_PER_HOUR + u64::from(minute) * 60 + u64::from(second);
        Some(TimeOfDay(Duration::from_secs(secs)))
    }

    pub const fn from_duration(since_midnight: Duration) -> Self {
        TimeOfDay(since_midnight)
    }

    /// Parse "h:mm AM/PM ±zzzz" and reduce it to its time of day in UTC.
    ///
    /// "11:00 PM -0700" is 06:00 UTC, so it parses to 6h.
    pub fn parse(input: &str) -> Result<Self, ParseTimeError> {
        Self::parse_with_offset(input).map(|(tod, _)| tod)
    }

    /// Like [`TimeOfDay::parse`], also returning the offset the time was
    /// written in. Day-of-week filters are read in that offset.
    pub fn parse_with_offset(input: &str) -> Result<(Self, FixedOffset), ParseTimeError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ParseTimeError::Empty);
        }

        let stamped = format!("{} {}", REFERENCE_DATE, trimmed);
        let parsed = DateTime::parse_from_str(&stamped, &format!("%Y-%m-%d {}", TIME_OF_DAY_FORMAT))
            .map_err(|source| ParseTimeError::Format {
                input: input.to_string(),
                source,
            })?;

        let utc = parsed.with_timezone(&Utc).time();
        let secs = u64::from(utc.num_seconds_from_midnight());
        Ok((TimeOfDay(Duration::from_secs(secs)), *parsed.offset()))
    }

    pub const fn as_duration(&self) -> Duration {
        self.0
    }

    /// Hour of the day (0-23). Values past 24h wrap.
    pub fn hour(&self) -> u32 {
        ((self.0.as_secs() % SECS_PER_DAY) / SECS_PER_HOUR) as u32
    }

    pub fn minute(&self) -> u32 {
        ((self.0.as_secs() % SECS_PER_HOUR) / 60) as u32
    }
}

impl fmt::Display for TimeOfDay {
    /// Renders in the parse format, always at +0000, e.g. "3:04 AM +0000"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hour = self.hour();
        let (hour12, meridiem) = match hour {
            0 => (12, "AM"),
            1..=11 => (hour, "AM"),
            12 => (12, "PM"),
            _ => (hour - 12, "PM"),
        };
        write!(f, "{}:{:02} {} +0000", hour12, self.minute(), meridiem)
    }
}

impl FromStr for TimeOfDay {
    type Err = ParseTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeOfDay::parse(s)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = ParseTimeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        TimeOfDay::parse(&value)
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}

impl From<TimeOfDay> for Duration {
    fn from(value: TimeOfDay) -> Self {
        value.0
    }
}
