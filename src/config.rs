use anyhow::{anyhow, bail, Context, Result};
use chrono::{FixedOffset, Weekday};
use chrono_tz::Tz;
use serde::Deserialize;
#[cfg(test)]
use std::collections::HashMap;
use std::env;

use crate::time_of_day::TimeOfDay;
use crate::window::{DayZone, Window};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // Daily window boundaries, reduced to UTC time of day
    pub start: TimeOfDay,
    pub stop: TimeOfDay,

    // Days the window applies to (empty = every day)
    pub days: Vec<Weekday>,

    // Offset WINDOW_START was written in; weekdays are read here by default
    pub offset: FixedOffset,

    // Named location for reading weekdays (overrides offset)
    pub location: Option<Tz>,
}

/// JSON source document, e.g. {"start": "2:00 AM -0600", "stop": "6:00 AM -0600"}
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Source {
    start: String,
    stop: String,
    #[serde(default)]
    days: Vec<String>,
    #[serde(default)]
    location: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env if present, ignore if missing
        Self::from_getter(|key| env::var(key).ok())
    }

    /// Parse config from a custom getter function (for testing)
    pub fn from_getter<F>(get: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let (start, offset) = parse_time_of_day("WINDOW_START", get("WINDOW_START"))?;
        let (stop, _) = parse_time_of_day("WINDOW_STOP", get("WINDOW_STOP"))?;

        Ok(Config {
            start,
            stop,
            days: match get("WINDOW_DAYS") {
                Some(days) => parse_days(days.split(',')).context("WINDOW_DAYS is invalid")?,
                None => Vec::new(),
            },
            offset,
            location: get("WINDOW_LOCATION")
                .filter(|s| !s.trim().is_empty())
                .map(|name| parse_location(&name))
                .transpose()
                .context("WINDOW_LOCATION is invalid")?,
        })
    }

    /// Parse config from a JSON source document
    pub fn from_json(json: &str) -> Result<Self> {
        let source: Source = serde_json::from_str(json).context("Invalid window source JSON")?;
        let (start, offset) = parse_time_of_day("start", Some(source.start))?;
        let (stop, _) = parse_time_of_day("stop", Some(source.stop))?;

        Ok(Config {
            start,
            stop,
            days: parse_days(source.days.iter().map(String::as_str)).context("days is invalid")?,
            offset,
            location: source
                .location
                .as_deref()
                .map(parse_location)
                .transpose()
                .context("location is invalid")?,
        })
    }

    /// Create config from a HashMap (convenience for testing)
    #[cfg(test)]
    pub fn from_map(map: &HashMap<&str, &str>) -> Result<Self> {
        Self::from_getter(|key| map.get(key).map(|v| v.to_string()))
    }

    /// Where weekdays are read: the location if set, else WINDOW_START's offset
    pub fn day_zone(&self) -> DayZone {
        match self.location {
            Some(tz) => DayZone::Location(tz),
            None => DayZone::Offset(self.offset),
        }
    }

    pub fn window(&self) -> Window {
        Window::new(self.start, self.stop)
            .with_days(self.days.iter().copied())
            .with_day_zone(self.day_zone())
    }

    /// Validate configuration values at startup.
    /// Returns Ok(()) if all validations pass, or Err with details of what failed.
    pub fn validate(&self) -> Result<()> {
        let mut errors: Vec<String> = Vec::new();

        if self.start == self.stop {
            errors.push(format!(
                "WINDOW_START and WINDOW_STOP are both {}; the window would never be open.",
                self.start
            ));
        }

        for (i, day) in self.days.iter().enumerate() {
            if self.days[..i].contains(day) {
                errors.push(format!("WINDOW_DAYS lists {} more than once.", day));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            bail!(
                "Configuration validation failed:\n  - {}",
                errors.join("\n  - ")
            )
        }
    }
}

fn parse_time_of_day(key: &str, value: Option<String>) -> Result<(TimeOfDay, FixedOffset)> {
    let value = value.with_context(|| format!("{} not set", key))?;
    TimeOfDay::parse_with_offset(&value)
        .with_context(|| format!("{} must look like \"3:04 PM -0700\"", key))
}

/// Parse an IANA location name, e.g. "America/Denver"
fn parse_location(name: &str) -> Result<Tz> {
    let name = name.trim();
    name.parse::<Tz>()
        .map_err(|_| anyhow!("'{}' is not a known location", name))
}

/// Parse weekday names ("Monday", "mon", ...), skipping blank entries
fn parse_days<'a>(names: impl Iterator<Item = &'a str>) -> Result<Vec<Weekday>> {
    names
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| {
            name.parse::<Weekday>()
                .map_err(|_| anyhow!("'{}' is not a day of the week", name))
        })
        .collect()
}
