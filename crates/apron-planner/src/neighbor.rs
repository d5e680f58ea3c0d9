//! Neighbor-provider abstraction.
//!
//! `k_alternatives` needs to re-run A* against a graph whose edges carry
//! extra, search-local length inflation — without ever mutating the
//! underlying [`Graph`] (which is shared across concurrent route requests).
//! Rather than have the planner swap which method it calls at runtime, the
//! inflation is threaded through as a different [`NeighborProvider`]
//! implementation the planner is generic over.

use std::collections::HashMap;

use apron_core::NodeId;
use apron_graph::{Edge, Graph};

/// Supplies the outgoing edges of a node, each paired with an additive cost
/// penalty (`0.0` for none) to apply on top of the edge's own cost.
pub trait NeighborProvider {
    fn neighbors(&self, node: NodeId) -> Vec<(Edge, f64)>;
}

/// The graph's edges exactly as stored, no penalties.
pub struct DefaultNeighbors<'g> {
    graph: &'g Graph,
}

impl<'g> DefaultNeighbors<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph }
    }
}

impl NeighborProvider for DefaultNeighbors<'_> {
    fn neighbors(&self, node: NodeId) -> Vec<(Edge, f64)> {
        self.graph.neighbors_of(node).map(|e| (e, 0.0)).collect()
    }
}

/// The graph's edges with their length inflated by how many times each has
/// already appeared in a previously found alternative, steering repeated
/// A* runs away from edges already used.
///
/// Inflation is multiplicative on edge length: an edge reused `n` times has
/// its effective length scaled by `1 + 0.5n`. The returned penalty is always
/// `0.0` — the inflation is baked into the edge itself before it reaches the
/// planner rather than added on top of the weighted cost.
pub struct PenalizedNeighbors<'g> {
    graph: &'g Graph,
    reuse_counts: HashMap<(NodeId, NodeId), u32>,
}

impl<'g> PenalizedNeighbors<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph, reuse_counts: HashMap::new() }
    }

    /// Record one more use of edge `(from, to)` by a previously found path.
    pub fn bump(&mut self, from: NodeId, to: NodeId) {
        *self.reuse_counts.entry((from, to)).or_insert(0) += 1;
    }
}

impl NeighborProvider for PenalizedNeighbors<'_> {
    fn neighbors(&self, node: NodeId) -> Vec<(Edge, f64)> {
        self.graph
            .neighbors_of(node)
            .map(|e| {
                let count = self.reuse_counts.get(&(e.from, e.to)).copied().unwrap_or(0);
                if count == 0 {
                    (e, 0.0)
                } else {
                    let mut inflated = e;
                    inflated.length_m *= 1.0 + 0.5 * count as f32;
                    (inflated, 0.0)
                }
            })
            .collect()
    }
}
