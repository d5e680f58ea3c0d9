//! Flight requests: the scheduler's unit of work.

use apron_core::{FlightId, NodeId, Timestamp};

/// What kind of ground movement a flight request represents.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[non_exhaustive]
pub enum OperationKind {
    /// Runway to stand.
    Arrival,
    /// Stand to runway.
    Departure,
    /// Stand to stand, e.g. a gate change or maintenance tow.
    Repositioning,
}

impl OperationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            OperationKind::Arrival => "Arrival",
            OperationKind::Departure => "Departure",
            OperationKind::Repositioning => "Repositioning",
        }
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scheduling priority. Ordered low to high; higher priority flights are
/// routed first and win delay-resolution ties (see `apron-scheduler`).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[non_exhaustive]
pub enum Priority {
    Low,
    #[default]
    Normal,
    High,
    Emergency,
}

/// A single ground-movement request.
#[derive(Clone, Debug, PartialEq)]
pub struct Flight {
    pub id: FlightId,
    pub operation: OperationKind,
    pub origin: NodeId,
    pub destination: NodeId,
    /// The time the flight would like to depart its origin.
    pub scheduled_time: Timestamp,
    pub priority: Priority,
    pub aircraft_speed_mps: f64,
}

impl Flight {
    pub fn new(
        id: impl Into<FlightId>,
        operation: OperationKind,
        origin: NodeId,
        destination: NodeId,
        scheduled_time: Timestamp,
    ) -> Self {
        Self {
            id: id.into(),
            operation,
            origin,
            destination,
            scheduled_time,
            priority: Priority::default(),
            aircraft_speed_mps: 10.0,
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_speed(mut self, aircraft_speed_mps: f64) -> Self {
        self.aircraft_speed_mps = aircraft_speed_mps;
        self
    }
}
