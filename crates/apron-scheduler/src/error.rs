//! Scheduler error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type SchedulerResult<T> = Result<T, SchedulerError>;
