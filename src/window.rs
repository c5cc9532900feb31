/// Daily window with an optional day-of-week filter

use chrono::{DateTime, Datelike, FixedOffset, TimeZone, Utc, Weekday};
use chrono_tz::Tz;
use std::fmt;

use crate::between::between;
use crate::time_of_day::TimeOfDay;

/// Where the weekday of an instant is read for the day filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayZone {
    /// Fixed offset, usually the one start/stop were written in
    Offset(FixedOffset),
    /// Named location, follows its DST rules
    Location(Tz),
}

impl DayZone {
    pub fn weekday<Tz2: TimeZone>(&self, instant: &DateTime<Tz2>) -> Weekday {
        match self {
            DayZone::Offset(offset) => instant.with_timezone(offset).weekday(),
            DayZone::Location(tz) => instant.with_timezone(tz).weekday(),
        }
    }
}

impl fmt::Display for DayZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayZone::Offset(offset) => write!(f, "{}", offset),
            DayZone::Location(tz) => write!(f, "{}", tz.name()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    start: TimeOfDay,
    stop: TimeOfDay,
    /// Days the window is open; empty means every day
    days: Vec<Weekday>,
    /// None reads the weekday in the instant's own offset
    day_zone: Option<DayZone>,
}

impl Window {
    pub fn new(start: TimeOfDay, stop: TimeOfDay) -> Self {
        Self {
            start,
            stop,
            days: Vec::new(),
            day_zone: None,
        }
    }

    pub fn with_days(mut self, days: impl IntoIterator<Item = Weekday>) -> Self {
        self.days = days.into_iter().collect();
        self
    }

    pub fn with_day_zone(mut self, zone: DayZone) -> Self {
        self.day_zone = Some(zone);
        self
    }

    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    pub fn stop(&self) -> TimeOfDay {
        self.stop
    }

    pub fn days(&self) -> &[Weekday] {
        &self.days
    }

    pub fn day_zone(&self) -> Option<DayZone> {
        self.day_zone
    }

    /// Stop is earlier than start, so the window spans midnight
    pub fn is_wrapping(&self) -> bool {
        self.start > self.stop
    }

    /// start == stop: nothing is ever inside
    pub fn is_empty(&self) -> bool {
        self.start == self.stop
    }

    /// Check if the instant is inside the window.
    ///
    /// The time of day is read in the instant's own offset. The weekday is
    /// read in the day zone when one is set, otherwise in the instant's own
    /// offset. For a wrapping window the after-midnight segment counts
    /// towards the day it falls on.
    pub fn contains<Tz2: TimeZone>(&self, instant: &DateTime<Tz2>) -> bool {
        if !self.days.is_empty() {
            let weekday = match &self.day_zone {
                Some(zone) => zone.weekday(instant),
                None => instant.weekday(),
            };
            if !self.days.contains(&weekday) {
                return false;
            }
        }
        between(self.start.as_duration(), self.stop.as_duration(), instant)
    }

    pub fn contains_now(&self) -> bool {
        self.contains(&Utc::now())
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.stop)?;
        if !self.days.is_empty() {
            let days: Vec<String> = self.days.iter().map(|d| d.to_string()).collect();
            write!(f, " on {}", days.join(","))?;
            if let Some(zone) = &self.day_zone {
                write!(f, " ({})", zone)?;
            }
        }
        Ok(())
    }
}
