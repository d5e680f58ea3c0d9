//! The `OutputWriter` trait implemented by output backends.

use crate::row::{ConflictRow, ScheduleRow};
use crate::OutputResult;

/// Trait implemented by every output backend (CSV today; the observer in
/// `observer.rs` doesn't care which).
pub trait OutputWriter {
    /// Write a batch of schedule waypoint rows.
    fn write_schedule_rows(&mut self, rows: &[ScheduleRow]) -> OutputResult<()>;

    /// Write a batch of conflict rows.
    fn write_conflict_rows(&mut self, rows: &[ConflictRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles. Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
