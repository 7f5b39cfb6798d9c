// src/application/ports/time.rs
use chrono::{DateTime, FixedOffset};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClockError {
    #[error("system clock is set before the unix epoch")]
    BeforeUnixEpoch,
    #[error("system clock reading is out of range: {0}s since epoch")]
    OutOfRange(u64),
}

/// Source of the current instant, in the offset the service reports in.
pub trait Clock: Send + Sync {
    fn now(&self) -> Result<DateTime<FixedOffset>, ClockError>;
}
