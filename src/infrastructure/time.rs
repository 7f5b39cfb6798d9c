use crate::application::ports::time::{Clock, ClockError};
use chrono::{DateTime, FixedOffset, Local, Utc};
use std::time::{SystemTime, UNIX_EPOCH};

/// Reads the operating system clock and reports it in the host's local
/// time zone.
#[derive(Default, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Result<DateTime<FixedOffset>, ClockError> {
        let elapsed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|_| ClockError::BeforeUnixEpoch)?;
        let secs = elapsed.as_secs();

        let utc = i64::try_from(secs)
            .ok()
            .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, elapsed.subsec_nanos()))
            .ok_or(ClockError::OutOfRange(secs))?;

        Ok(utc.with_timezone(&Local).fixed_offset())
    }
}
