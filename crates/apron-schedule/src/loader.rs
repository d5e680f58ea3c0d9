//! CSV flight-request loader.
//!
//! Generic over `R: Read` (rather than tied to `std::fs::File`) so tests can
//! load fixtures from an in-memory `Cursor`, the same convention the
//! teacher's own schedule loader uses.

use std::io::Read;

use serde::Deserialize;

use apron_core::{parse_timestamp, NodeId};

use crate::error::{ScheduleError, ScheduleResult};
use crate::flight::{Flight, OperationKind, Priority};

#[derive(Debug, Deserialize)]
struct FlightRecord {
    id: String,
    operation: String,
    origin: u32,
    destination: u32,
    scheduled_time: String,
    #[serde(default)]
    priority: String,
    #[serde(default = "default_speed")]
    aircraft_speed_mps: f64,
}

fn default_speed() -> f64 {
    10.0
}

fn parse_operation(row: usize, s: &str) -> ScheduleResult<OperationKind> {
    match s {
        "Arrival" => Ok(OperationKind::Arrival),
        "Departure" => Ok(OperationKind::Departure),
        "Repositioning" => Ok(OperationKind::Repositioning),
        other => Err(ScheduleError::InvalidRow {
            row,
            message: format!("unknown operation {other:?}"),
        }),
    }
}

fn parse_priority(row: usize, s: &str) -> ScheduleResult<Priority> {
    match s {
        "" | "Normal" => Ok(Priority::Normal),
        "Low" => Ok(Priority::Low),
        "High" => Ok(Priority::High),
        "Emergency" => Ok(Priority::Emergency),
        other => Err(ScheduleError::InvalidRow {
            row,
            message: format!("unknown priority {other:?}"),
        }),
    }
}

/// Parse flight requests from a CSV stream with header row
/// `id,operation,origin,destination,scheduled_time,priority,aircraft_speed_mps`.
///
/// `priority` and `aircraft_speed_mps` columns may be left empty, defaulting
/// to `Normal` and `10.0` m/s respectively.
pub fn load_flights_csv<R: Read>(reader: R) -> ScheduleResult<Vec<Flight>> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);
    let mut flights = Vec::new();

    for (row, result) in rdr.deserialize::<FlightRecord>().enumerate() {
        let record = result?;
        let operation = parse_operation(row, &record.operation)?;
        let priority = parse_priority(row, &record.priority)?;
        let scheduled_time = parse_timestamp(&record.scheduled_time)
            .map_err(|e| ScheduleError::InvalidRow { row, message: e.to_string() })?;

        flights.push(
            Flight::new(
                record.id,
                operation,
                NodeId(record.origin),
                NodeId(record.destination),
                scheduled_time,
            )
            .with_priority(priority)
            .with_speed(record.aircraft_speed_mps),
        );
    }

    Ok(flights)
}
