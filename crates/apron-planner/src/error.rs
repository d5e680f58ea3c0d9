//! Planner error type.

use thiserror::Error;

use apron_core::NodeId;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("no route found from {from} to {to}")]
    NoRoute { from: NodeId, to: NodeId },

    #[error("origin node {0} does not exist in the graph")]
    UnknownOrigin(NodeId),

    #[error("destination node {0} does not exist in the graph")]
    UnknownDestination(NodeId),
}

pub type PlannerResult<T> = Result<T, PlannerError>;
