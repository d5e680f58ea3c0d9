//! Scheduler observer trait for progress reporting and data collection.

use apron_core::FlightId;
use apron_schedule::{Conflict, FlightSchedule};

/// Callbacks invoked by [`Scheduler::run`][crate::scheduler::Scheduler::run]
/// at key points in the scheduling pass.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SchedulerObserver for ProgressPrinter {
///     fn on_conflict_detected(&mut self, conflict: &Conflict) {
///         println!("conflict {} at node {}", conflict.id, conflict.node);
///     }
/// }
/// ```
pub trait SchedulerObserver {
    /// Called once a flight's initial route has been planned, before any
    /// conflict detection or delay resolution.
    fn on_flight_routed(&mut self, _flight_id: &FlightId, _schedule: &FlightSchedule) {}

    /// Called for every conflict the detector finds in a given pass.
    fn on_conflict_detected(&mut self, _conflict: &Conflict) {}

    /// Called when a flight's schedule is shifted to resolve a conflict.
    fn on_flight_delayed(&mut self, _flight_id: &FlightId, _delay_secs: i64) {}

    /// Called when no route exists between a flight's origin and
    /// destination; the flight still gets an (unroutable) placeholder
    /// schedule so downstream output has a row for every requested flight.
    fn on_schedule_failed(&mut self, _flight_id: &FlightId) {}

    /// Called once after the scheduling pass completes, successful or not.
    fn on_pass_end(&mut self, _resolved_conflicts: usize, _remaining_conflicts: usize) {}

    /// Called once per flight after delay resolution finishes, with its
    /// final (possibly delayed) schedule.
    fn on_schedule_finalized(&mut self, _flight_id: &FlightId, _schedule: &FlightSchedule) {}
}

/// A [`SchedulerObserver`] that does nothing. Use when you need to call
/// `Scheduler::run` but don't want progress callbacks.
pub struct NoopSchedulerObserver;

impl SchedulerObserver for NoopSchedulerObserver {}
