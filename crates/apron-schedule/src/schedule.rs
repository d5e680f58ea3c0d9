//! A flight's planned route, timestamped waypoint by waypoint.

use apron_core::{FlightId, NodeId, Timestamp};

use crate::conflict::Conflict;
use crate::waypoint::TimedWaypoint;

/// The planned route for one flight: a sequence of node/time pairs plus the
/// aggregate statistics the planner reported when it found this route.
///
/// Built by the scheduler from a `apron_planner::PathResult` and the
/// flight's own `scheduled_time` — never constructed by `apron-planner`
/// itself, which has no notion of wall-clock time.
#[derive(Clone, Debug, PartialEq)]
pub struct FlightSchedule {
    pub flight_id: FlightId,
    pub waypoints: Vec<TimedWaypoint>,
    pub total_distance_m: f64,
    pub total_cost: f64,
    /// Conflicts detected in the most recent scheduling pass that this
    /// flight participates in. Cleared and re-populated each pass.
    pub conflicts: Vec<Conflict>,
}

impl FlightSchedule {
    pub fn new(flight_id: FlightId, waypoints: Vec<TimedWaypoint>, total_distance_m: f64, total_cost: f64) -> Self {
        Self { flight_id, waypoints, total_distance_m, total_cost, conflicts: Vec::new() }
    }

    pub fn departure_time(&self) -> Option<Timestamp> {
        self.waypoints.first().map(|w| w.time)
    }

    pub fn arrival_time(&self) -> Option<Timestamp> {
        self.waypoints.last().map(|w| w.time)
    }

    pub fn path(&self) -> Vec<NodeId> {
        self.waypoints.iter().map(|w| w.node).collect()
    }

    /// Shift every waypoint's time by `delta_secs`, preserving the relative
    /// spacing between them. Used by the scheduler's delay-resolution pass
    /// — a flight is never re-routed to resolve a conflict, only delayed.
    pub fn shift(&mut self, delta_secs: i64) {
        for w in &mut self.waypoints {
            w.time = w.time.shift(delta_secs);
        }
    }
}
