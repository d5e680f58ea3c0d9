//! Detected scheduling conflicts between two flights.

use apron_core::{ConflictId, FlightId, NodeId, Timestamp};

/// What kind of conflict was detected.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[non_exhaustive]
pub enum ConflictKind {
    /// Two flights occupy the same node within the safety margin.
    NodeOvertake,
    /// Two flights cross the same edge from opposite directions at
    /// overlapping times. Detection for this kind is not wired up —
    /// `ConflictDetector` never emits it (see `apron-scheduler::detector`).
    EdgeCrossing,
    /// No route exists between a flight's origin and destination.
    PathNotFound,
}

impl ConflictKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ConflictKind::NodeOvertake => "NodeOvertake",
            ConflictKind::EdgeCrossing => "EdgeCrossing",
            ConflictKind::PathNotFound => "PathNotFound",
        }
    }
}

impl std::fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How serious a conflict is. Ordered low to high so it can also be used to
/// prioritize delay-resolution attempts.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[non_exhaustive]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

/// A detected conflict between two flights at a shared node.
#[derive(Clone, Debug, PartialEq)]
pub struct Conflict {
    pub id: ConflictId,
    pub kind: ConflictKind,
    pub severity: Severity,
    pub node: NodeId,
    pub flight_a: FlightId,
    pub flight_b: FlightId,
    pub time_a: Timestamp,
    pub time_b: Timestamp,
}
