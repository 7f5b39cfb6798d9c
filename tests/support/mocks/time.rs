// tests/support/mocks/time.rs
use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone};
use once_cell::sync::Lazy;
use servertime::application::ports::time::{Clock, ClockError};

/// テスト用の固定タイムスタンプ
static FIXED_NOW: Lazy<DateTime<FixedOffset>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-03-01T23:59:59+00:00")
        .expect("invalid RFC3339 in tests/support/mocks/time.rs")
});

/// 決定論的なタイムスタンプを返す
pub fn fixed_now() -> DateTime<FixedOffset> {
    *FIXED_NOW
}

/// Build a local wall-clock instant (`YYYY-MM-DDTHH:MM:SS`) in the given
/// offset.
pub fn local_instant(wall_clock: &str, offset_secs: i32) -> DateTime<FixedOffset> {
    let naive = NaiveDateTime::parse_from_str(wall_clock, "%Y-%m-%dT%H:%M:%S")
        .expect("wall clock must be YYYY-MM-DDTHH:MM:SS");
    FixedOffset::east_opt(offset_secs)
        .expect("offset within a day")
        .from_local_datetime(&naive)
        .single()
        .expect("fixed offsets are unambiguous")
}

/// Always returns the same instant.
#[derive(Clone)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl FixedClock {
    pub fn at(wall_clock: &str) -> Self {
        Self(local_instant(wall_clock, 0))
    }
}

impl Default for FixedClock {
    fn default() -> Self {
        Self(fixed_now())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Result<DateTime<FixedOffset>, ClockError> {
        Ok(self.0)
    }
}

/// Simulates a host whose clock cannot be read.
#[derive(Clone)]
pub struct FailingClock(pub ClockError);

impl Default for FailingClock {
    fn default() -> Self {
        Self(ClockError::BeforeUnixEpoch)
    }
}

impl Clock for FailingClock {
    fn now(&self) -> Result<DateTime<FixedOffset>, ClockError> {
        Err(self.0.clone())
    }
}
