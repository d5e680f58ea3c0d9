//! Schedule-subsystem error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row}: {message}")]
    InvalidRow { row: usize, message: String },
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
