//! Node occupancy over a time window — the unit conflict detection reasons about.

use apron_core::{FlightId, NodeId, Timestamp};

/// How long a flight is assumed to occupy a node once it arrives there, in
/// the absence of a more precise hold-time model. Conservative enough to
/// catch near-miss conflicts a zero-duration point model would let slip
/// through.
pub const DEFAULT_DWELL_SECS: i64 = 30;

/// A flight's claim on a node for `[enter_time, exit_time]`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SpatioTemporalSlot {
    pub node: NodeId,
    pub flight_id: FlightId,
    pub enter_time: Timestamp,
    pub exit_time: Timestamp,
}

impl SpatioTemporalSlot {
    pub fn new(node: NodeId, flight_id: FlightId, enter_time: Timestamp, exit_time: Timestamp) -> Self {
        Self { node, flight_id, enter_time, exit_time }
    }

    /// The slot a flight occupies at `waypoint_time` on `node`, using the
    /// default dwell window.
    pub fn at(node: NodeId, flight_id: FlightId, waypoint_time: Timestamp) -> Self {
        Self::new(node, flight_id, waypoint_time, waypoint_time.shift(DEFAULT_DWELL_SECS))
    }

    /// `true` if this slot's occupancy window overlaps `other`'s at all,
    /// inclusive of the endpoints (a flight departing the instant another
    /// arrives still counts as a conflict at that node).
    pub fn overlaps(&self, other: &SpatioTemporalSlot) -> bool {
        self.node == other.node && self.enter_time <= other.exit_time && other.enter_time <= self.exit_time
    }
}
