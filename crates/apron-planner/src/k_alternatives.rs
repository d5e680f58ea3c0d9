//! K distinct alternative routes via iterated, edge-penalized A* reruns.
//!
//! There's no dedicated k-shortest-paths algorithm here — alternatives are
//! produced by running plain A* repeatedly, each time inflating the length
//! of edges used by previously found paths so the next run is steered onto
//! a different route. The underlying graph is never mutated; the inflation
//! lives entirely in a [`PenalizedNeighbors`] instance local to this search.

use std::collections::HashSet;

use apron_core::NodeId;

use crate::neighbor::{NeighborProvider, PenalizedNeighbors};
use crate::planner::{PathPlanner, PathResult};

/// Caps how many extra A* reruns are attempted beyond `k`, so a sparse
/// graph that truly has few distinct routes doesn't spin forever trying to
/// manufacture routes that don't exist.
const MAX_ATTEMPT_MULTIPLIER: usize = 4;

/// Find up to `k` distinct (by node sequence) alternative routes from
/// `origin` to `destination`, cheapest first.
pub fn find_k_alternatives(
    planner: &PathPlanner<'_>,
    origin: NodeId,
    destination: NodeId,
    k: usize,
) -> Vec<PathResult> {
    if k == 0 {
        return Vec::new();
    }

    let mut penalized = PenalizedNeighbors::new(planner.graph());
    let mut results: Vec<PathResult> = Vec::new();
    let mut seen: HashSet<Vec<NodeId>> = HashSet::new();

    let max_attempts = k * MAX_ATTEMPT_MULTIPLIER;
    let mut attempts = 0;

    while results.len() < k && attempts < max_attempts {
        attempts += 1;

        let found = match planner.find_path(origin, destination, &penalized as &dyn NeighborProvider) {
            Ok(r) => r,
            Err(_) => break,
        };

        if seen.insert(found.path.clone()) {
            for w in found.path.windows(2) {
                penalized.bump(w[0], w[1]);
            }
            results.push(found);
        } else {
            // Already have this exact route; bump its reuse count again so
            // the next rerun is forced further off it, and keep trying
            // within the attempt budget.
            for w in found.path.windows(2) {
                penalized.bump(w[0], w[1]);
            }
        }
    }

    results
}
