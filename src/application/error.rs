// src/application/error.rs
use crate::application::ports::time::ClockError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("clock read failed: {0}")]
    Clock(#[from] ClockError),
}
