//! A single timestamped point along a flight's planned route.

use apron_core::{NodeId, Timestamp};

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct TimedWaypoint {
    pub node: NodeId,
    pub time: Timestamp,
}

impl TimedWaypoint {
    pub fn new(node: NodeId, time: Timestamp) -> Self {
        Self { node, time }
    }
}
