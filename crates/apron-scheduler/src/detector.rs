//! Conflict detection over a set of planned flight schedules.

use std::collections::{HashMap, HashSet};

use apron_core::{ConflictId, FlightId, NodeId, Timestamp};
use apron_schedule::{Conflict, ConflictKind, FlightSchedule, Severity};

/// Default safety margin between two flights occupying the same node, in
/// seconds. A margin of 60 s is also commonly configured.
pub const DEFAULT_SAFETY_MARGIN_SECS: i64 = 30;

/// `Δ` below which a node conflict is escalated from medium to high.
const HIGH_SEVERITY_THRESHOLD_SECS: i64 = 15;

/// Detects conflicting node occupancy across a batch of flight schedules.
///
/// Builds a per-node index of every waypoint of every schedule, then reports
/// any pair of flights at the same node whose waypoint timestamps are
/// closer together than the safety margin. Each unordered flight pair is
/// reported at most once per node even if their schedules happen to revisit
/// that node more than once.
pub struct ConflictDetector {
    safety_margin_secs: i64,
}

impl ConflictDetector {
    pub fn new() -> Self {
        Self { safety_margin_secs: DEFAULT_SAFETY_MARGIN_SECS }
    }

    pub fn with_safety_margin_secs(mut self, safety_margin_secs: i64) -> Self {
        self.safety_margin_secs = safety_margin_secs;
        self
    }

    /// Detect all node-occupancy conflicts among `schedules`. Returned
    /// conflicts are sorted by `(node, flight_a, flight_b)` for
    /// deterministic output, and ids are assigned in that sorted order.
    pub fn detect(&self, schedules: &[(FlightId, FlightSchedule)]) -> Vec<Conflict> {
        let mut index: HashMap<NodeId, Vec<(FlightId, Timestamp)>> = HashMap::new();

        for (id, schedule) in schedules {
            for wp in &schedule.waypoints {
                index.entry(wp.node).or_default().push((id.clone(), wp.time));
            }
        }

        let mut seen: HashSet<(NodeId, FlightId, FlightId)> = HashSet::new();
        let mut conflicts = Vec::new();

        for (node, occupants) in &index {
            for i in 0..occupants.len() {
                for j in (i + 1)..occupants.len() {
                    let (fa, ta) = &occupants[i];
                    let (fb, tb) = &occupants[j];
                    if fa == fb {
                        continue;
                    }
                    let delta = ta.abs_diff(*tb);
                    if delta >= self.safety_margin_secs {
                        continue;
                    }

                    let (lo, hi) = if fa <= fb { (fa.clone(), fb.clone()) } else { (fb.clone(), fa.clone()) };
                    if !seen.insert((*node, lo.clone(), hi.clone())) {
                        continue;
                    }

                    conflicts.push(Conflict {
                        id: ConflictId(0),
                        kind: ConflictKind::NodeOvertake,
                        severity: severity_for(delta),
                        node: *node,
                        flight_a: lo,
                        flight_b: hi,
                        time_a: ta.min(*tb),
                        time_b: ta.max(*tb),
                    });
                }
            }
        }

        conflicts.sort_by(|a, b| (a.node, &a.flight_a, &a.flight_b).cmp(&(b.node, &b.flight_a, &b.flight_b)));
        for (i, c) in conflicts.iter_mut().enumerate() {
            c.id = ConflictId(i as u64);
        }
        conflicts
    }

    /// Edge-crossing detection (two flights traversing the same edge from
    /// opposite directions at overlapping times) is part of the conflict
    /// model but is never called from `detect`. `apron-graph`'s CSR layout
    /// doesn't expose a cheap "opposite-direction edge" lookup, so wiring
    /// this up needs a per-edge reverse-edge index that doesn't exist yet.
    #[allow(dead_code)]
    fn detect_crossings(&self, _schedules: &[(FlightId, FlightSchedule)]) -> Vec<Conflict> {
        Vec::new()
    }
}

impl Default for ConflictDetector {
    fn default() -> Self {
        Self::new()
    }
}

fn severity_for(delta_secs: i64) -> Severity {
    if delta_secs < HIGH_SEVERITY_THRESHOLD_SECS {
        Severity::High
    } else {
        Severity::Medium
    }
}
