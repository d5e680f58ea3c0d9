//! `ScheduleOutputObserver<W>` — bridges `SchedulerObserver` to an
//! `OutputWriter`.

use apron_core::FlightId;
use apron_schedule::{Conflict, FlightSchedule};
use apron_scheduler::SchedulerObserver;

use crate::row::{ConflictRow, ScheduleRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SchedulerObserver`] that writes final flight schedules and detected
/// conflicts to any [`OutputWriter`] backend (CSV today).
///
/// Errors from the writer are stored internally because `SchedulerObserver`
/// methods have no return value. After `Scheduler::run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct ScheduleOutputObserver<W: OutputWriter> {
    writer: W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> ScheduleOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `Scheduler::run()` returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SchedulerObserver for ScheduleOutputObserver<W> {
    fn on_conflict_detected(&mut self, conflict: &Conflict) {
        let row = ConflictRow {
            conflict_id: conflict.id.0,
            kind: conflict.kind.to_string(),
            severity: format!("{:?}", conflict.severity),
            node: conflict.node.index() as u32,
            flight_a: conflict.flight_a.to_string(),
            flight_b: conflict.flight_b.to_string(),
            time_a_unix_secs: conflict.time_a.0,
            time_b_unix_secs: conflict.time_b.0,
        };
        let result = self.writer.write_conflict_rows(std::slice::from_ref(&row));
        self.store_err(result);
    }

    fn on_schedule_finalized(&mut self, flight_id: &FlightId, schedule: &FlightSchedule) {
        let rows: Vec<ScheduleRow> = schedule
            .waypoints
            .iter()
            .enumerate()
            .map(|(i, wp)| ScheduleRow {
                flight_id: flight_id.to_string(),
                sequence_index: i as u32,
                node: wp.node.index() as u32,
                unix_time_secs: wp.time.0,
            })
            .collect();
        let result = self.writer.write_schedule_rows(&rows);
        self.store_err(result);
    }
}
