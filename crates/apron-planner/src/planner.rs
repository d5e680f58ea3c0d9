//! A* shortest-path search.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use ordered_float::OrderedFloat;

use apron_core::{edge_cost, CostWeights, NodeId};
use apron_graph::Graph;

use crate::error::{PlannerError, PlannerResult};
use crate::neighbor::NeighborProvider;

/// Safety cap on A* expansions. Guards against runaway search on a
/// malformed or disconnected graph rather than hanging forever.
const MAX_EXPANSIONS: usize = 200_000;

/// Aggregate statistics for a found path.
///
/// `total_time_s` is computed from `total_distance_m` and the aircraft's
/// nominal cruise speed alone — it does **not** account for any per-edge
/// speed caps applied during the search itself (see [`PathPlanner::find_path`]).
/// This mirrors how flight schedules report planned transit time: a nominal
/// estimate, not a physically exact one.
#[derive(Clone, Debug, PartialEq)]
pub struct PathStats {
    pub total_distance_m: f64,
    pub total_time_s: f64,
    pub fuel_consumption: f64,
    pub total_cost: f64,
    pub num_nodes: usize,
}

/// A found route: the node sequence plus its aggregate statistics.
#[derive(Clone, Debug, PartialEq)]
pub struct PathResult {
    pub path: Vec<NodeId>,
    pub stats: PathStats,
}

/// Runs A* over a [`Graph`] under a fixed cost model and aircraft speed.
pub struct PathPlanner<'g> {
    graph: &'g Graph,
    weights: CostWeights,
    aircraft_speed_mps: f64,
}

impl<'g> PathPlanner<'g> {
    pub fn new(graph: &'g Graph, weights: CostWeights, aircraft_speed_mps: f64) -> Self {
        Self { graph, weights, aircraft_speed_mps }
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// Lower-bound cost estimate from `node` to `goal`: straight-line
    /// distance divided by the aircraft's own nominal speed, which is
    /// always >= the capped speed any real edge can offer, so the
    /// resulting time (and thus cost) never overestimates.
    fn heuristic(&self, node: NodeId, goal: NodeId) -> f64 {
        let Some(from) = self.graph.get_node(node) else { return 0.0 };
        let Some(to) = self.graph.get_node(goal) else { return 0.0 };
        let d = from.pos.distance_m(to.pos) as f64;
        let t = d / self.aircraft_speed_mps;
        edge_cost(d, t, &self.weights)
    }

    /// Find the lowest-cost path from `origin` to `destination` using the
    /// edges (and any penalties) supplied by `provider`.
    pub fn find_path(
        &self,
        origin: NodeId,
        destination: NodeId,
        provider: &dyn NeighborProvider,
    ) -> PlannerResult<PathResult> {
        if self.graph.get_node(origin).is_none() {
            return Err(PlannerError::UnknownOrigin(origin));
        }
        if self.graph.get_node(destination).is_none() {
            return Err(PlannerError::UnknownDestination(destination));
        }

        if origin == destination {
            return Ok(PathResult {
                path: vec![origin],
                stats: PathStats {
                    total_distance_m: 0.0,
                    total_time_s: 0.0,
                    fuel_consumption: 0.0,
                    total_cost: 0.0,
                    num_nodes: 1,
                },
            });
        }

        // Heap entries are (f, g, insertion order, node). The insertion
        // counter breaks ties deterministically without involving `NodeId`
        // in comparison ordering, keeping the sort key and the payload
        // cleanly separate.
        let mut open: BinaryHeap<Reverse<(OrderedFloat<f64>, OrderedFloat<f64>, u64, NodeId)>> =
            BinaryHeap::new();
        let mut counter: u64 = 0;
        let mut best_g: HashMap<NodeId, f64> = HashMap::new();
        let mut came_from: HashMap<NodeId, NodeId> = HashMap::new();

        best_g.insert(origin, 0.0);
        open.push(Reverse((OrderedFloat(self.heuristic(origin, destination)), OrderedFloat(0.0), counter, origin)));

        let mut expansions = 0usize;

        while let Some(Reverse((_, g, _, node))) = open.pop() {
            if node == destination {
                return Ok(self.reconstruct(origin, destination, &came_from));
            }

            // Stale entry: a cheaper path to `node` was already found.
            if g.0 > *best_g.get(&node).unwrap_or(&f64::INFINITY) {
                continue;
            }

            expansions += 1;
            if expansions > MAX_EXPANSIONS {
                break;
            }

            for (edge, penalty) in provider.neighbors(node) {
                let speed = (edge.speed_cap_mps as f64).min(self.aircraft_speed_mps);
                let length = edge.length_m as f64;
                let time = length / speed;
                let tentative_g = g.0 + edge_cost(length, time, &self.weights) + penalty;

                if tentative_g < *best_g.get(&edge.to).unwrap_or(&f64::INFINITY) {
                    best_g.insert(edge.to, tentative_g);
                    came_from.insert(edge.to, node);
                    counter += 1;
                    let f = tentative_g + self.heuristic(edge.to, destination);
                    open.push(Reverse((OrderedFloat(f), OrderedFloat(tentative_g), counter, edge.to)));
                }
            }
        }

        Err(PlannerError::NoRoute { from: origin, to: destination })
    }

    fn reconstruct(
        &self,
        origin: NodeId,
        destination: NodeId,
        came_from: &HashMap<NodeId, NodeId>,
    ) -> PathResult {
        let mut path = vec![destination];
        let mut cur = destination;
        while cur != origin {
            cur = came_from[&cur];
            path.push(cur);
        }
        path.reverse();

        let total_distance_m: f64 = path
            .windows(2)
            .map(|w| {
                self.graph
                    .neighbors_of(w[0])
                    .find(|e| e.to == w[1])
                    .map(|e| e.length_m as f64)
                    .unwrap_or(0.0)
            })
            .sum();
        let total_time_s = total_distance_m / self.aircraft_speed_mps;
        let fuel_consumption = 0.1 * total_distance_m + 0.05 * total_time_s;
        let total_cost = edge_cost(total_distance_m, total_time_s, &self.weights);

        PathResult {
            stats: PathStats { total_distance_m, total_time_s, fuel_consumption, total_cost, num_nodes: path.len() },
            path,
        }
    }
}
