//! CSV output writers for flight schedules and detected conflicts.
//!
//! | module      | contents                                              |
//! |-------------|----------------------------------------------------------|
//! | `row`       | `ScheduleRow`, `ConflictRow`                            |
//! | `writer`    | `OutputWriter` trait                                    |
//! | `csv`       | `CsvWriter`                                             |
//! | `observer`  | `ScheduleOutputObserver`, bridging `SchedulerObserver`  |
//! | `error`     | `OutputError`                                           |
//!
//! # Usage
//!
//! ```rust,ignore
//! use apron_output::{CsvWriter, ScheduleOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output")).unwrap();
//! let mut obs = ScheduleOutputObserver::new(writer);
//! scheduler.run(flights, &mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::ScheduleOutputObserver;
pub use row::{ConflictRow, ScheduleRow};
pub use writer::OutputWriter;
