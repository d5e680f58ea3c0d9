//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `schedule.csv`
//! - `conflicts.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::row::{ConflictRow, ScheduleRow};
use crate::writer::OutputWriter;
use crate::OutputResult;

/// Writes scheduling output to two CSV files.
pub struct CsvWriter {
    schedule: Writer<File>,
    conflicts: Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write their header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut schedule = Writer::from_path(dir.join("schedule.csv"))?;
        schedule.write_record(["flight_id", "sequence_index", "node", "unix_time_secs"])?;

        let mut conflicts = Writer::from_path(dir.join("conflicts.csv"))?;
        conflicts.write_record([
            "conflict_id",
            "kind",
            "severity",
            "node",
            "flight_a",
            "flight_b",
            "time_a_unix_secs",
            "time_b_unix_secs",
        ])?;

        Ok(Self { schedule, conflicts, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_schedule_rows(&mut self, rows: &[ScheduleRow]) -> OutputResult<()> {
        for row in rows {
            self.schedule.write_record(&[
                row.flight_id.clone(),
                row.sequence_index.to_string(),
                row.node.to_string(),
                row.unix_time_secs.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_conflict_rows(&mut self, rows: &[ConflictRow]) -> OutputResult<()> {
        for row in rows {
            self.conflicts.write_record(&[
                row.conflict_id.to_string(),
                row.kind.clone(),
                row.severity.clone(),
                row.node.to_string(),
                row.flight_a.clone(),
                row.flight_b.clone(),
                row.time_a_unix_secs.to_string(),
                row.time_b_unix_secs.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.schedule.flush()?;
        self.conflicts.flush()?;
        Ok(())
    }
}
