//! Flight, schedule, and conflict domain types, plus a CSV flight loader.
//!
//! | module      | contents                                              |
//! |-------------|--------------------------------------------------------|
//! | `flight`    | `Flight`, `OperationKind`, `Priority`                  |
//! | `waypoint`  | `TimedWaypoint`                                        |
//! | `schedule`  | `FlightSchedule`                                       |
//! | `slot`      | `SpatioTemporalSlot`, `DEFAULT_DWELL_SECS`              |
//! | `conflict`  | `Conflict`, `ConflictKind`, `Severity`                  |
//! | `loader`    | `load_flights_csv`                                      |
//! | `error`     | `ScheduleError`                                         |

pub mod conflict;
pub mod error;
pub mod flight;
pub mod loader;
pub mod schedule;
pub mod slot;
pub mod waypoint;


pub use conflict::{Conflict, ConflictKind, Severity};
pub use error::{ScheduleError, ScheduleResult};
pub use flight::{Flight, OperationKind, Priority};
pub use loader::load_flights_csv;
pub use schedule::FlightSchedule;
pub use slot::{SpatioTemporalSlot, DEFAULT_DWELL_SECS};
pub use waypoint::TimedWaypoint;
