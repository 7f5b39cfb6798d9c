// src/domain/time/snapshot.rs
use chrono::{DateTime, TimeZone};
use std::fmt;

/// `YYYY-MM-DD`
const DATE_FORMAT: &str = "%Y-%m-%d";
/// `HH:MM:SS`, 24-hour clock.
const TIME_FORMAT: &str = "%H:%M:%S";

/// Calendar date and wall-clock time taken from a single instant.
///
/// Both parts are rendered from the same `DateTime`, so a snapshot captured
/// at `23:59:59` can never pair that time with the following day's date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSnapshot {
    date: String,
    time: String,
}

impl TimeSnapshot {
    /// Render `instant` in its own offset.
    pub fn from_instant<Tz>(instant: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        Self {
            date: instant.format(DATE_FORMAT).to_string(),
            time: instant.format(TIME_FORMAT).to_string(),
        }
    }

    pub fn into_parts(self) -> (String, String) {
        (self.date, self.time)
    }
}
