//! Multi-flight scheduling: sequential routing followed by iterative delay
//! resolution.

use std::collections::HashSet;

use apron_core::{ConflictId, CostWeights, FlightId};
use apron_graph::Graph;
use apron_planner::{DefaultNeighbors, PathPlanner, PathResult};
use apron_schedule::{Conflict, ConflictKind, Flight, FlightSchedule, Severity, TimedWaypoint};

use crate::detector::ConflictDetector;
use crate::observer::SchedulerObserver;
use crate::strategy::SchedulingStrategy;

/// Maximum number of detect-and-delay iterations before the scheduler gives
/// up and returns whatever conflicts remain. Bounds runtime on a batch of
/// flights whose conflicts can't all be resolved by delay alone (routing
/// never changes once phase 1 completes).
const MAX_DELAY_ITERATIONS: usize = 5;

/// Fixed delay applied to a flight each time it's picked to yield a
/// conflict. Not adaptive to conflict severity — every delay step is the
/// same size regardless of how much overlap it needs to clear.
const DELAY_STEP_SECS: i64 = 45;

/// Routes and schedules a batch of flights over a fixed road network.
///
/// Two-phase algorithm:
/// 1. **Sequential routing** — flights are ordered by `strategy`, then each
///    is routed independently with `apron-planner`. Routing never
///    considers other flights' schedules; only the resulting occupancy
///    conflicts are resolved in phase 2.
/// 2. **Iterative delay resolution** — conflicts are detected and, for
///    each, the flight scheduled later is delayed by `DELAY_STEP_SECS`.
///    Repeats up to `MAX_DELAY_ITERATIONS` times.
///
/// A flight with no route at all is never dropped — it gets a placeholder
/// schedule (see `failed_schedule`) so every input flight has a
/// corresponding output row.
pub struct Scheduler<'g> {
    graph: &'g Graph,
    weights: CostWeights,
    strategy: SchedulingStrategy,
}

impl<'g> Scheduler<'g> {
    pub fn new(graph: &'g Graph, weights: CostWeights, strategy: SchedulingStrategy) -> Self {
        Self { graph, weights, strategy }
    }

    pub fn run(
        &self,
        mut flights: Vec<Flight>,
        observer: &mut dyn SchedulerObserver,
    ) -> Vec<(FlightId, FlightSchedule)> {
        self.strategy.sort(&mut flights);

        let mut schedules: Vec<(FlightId, FlightSchedule)> = Vec::with_capacity(flights.len());
        for flight in &flights {
            let planner = PathPlanner::new(self.graph, self.weights, flight.aircraft_speed_mps);
            let provider = DefaultNeighbors::new(self.graph);
            let schedule = match planner.find_path(flight.origin, flight.destination, &provider) {
                Ok(result) => self.schedule_from_path(flight, &result),
                Err(_) => {
                    observer.on_schedule_failed(&flight.id);
                    self.failed_schedule(flight)
                }
            };
            observer.on_flight_routed(&flight.id, &schedule);
            schedules.push((flight.id.clone(), schedule));
        }

        let detector = ConflictDetector::new();
        for _ in 0..MAX_DELAY_ITERATIONS {
            let conflicts = detector.detect(&schedules);

            for (_, schedule) in schedules.iter_mut() {
                schedule.conflicts.clear();
            }
            if conflicts.is_empty() {
                observer.on_pass_end(0, 0);
                break;
            }
            for c in &conflicts {
                observer.on_conflict_detected(c);
                for (id, schedule) in schedules.iter_mut() {
                    if *id == c.flight_a || *id == c.flight_b {
                        schedule.conflicts.push(c.clone());
                    }
                }
            }

            // A flight may appear in several conflicts this round; it's
            // delayed once per iteration regardless of how many conflicts
            // named it.
            let mut to_delay: HashSet<FlightId> = HashSet::new();
            for c in &conflicts {
                to_delay.insert(self.pick_delay_target(&flights, &c.flight_a, &c.flight_b));
            }

            for (id, schedule) in schedules.iter_mut() {
                if to_delay.contains(id) {
                    schedule.shift(DELAY_STEP_SECS);
                    observer.on_flight_delayed(id, DELAY_STEP_SECS);
                }
            }

            observer.on_pass_end(conflicts.len(), 0);
        }

        for (id, schedule) in &schedules {
            observer.on_schedule_finalized(id, schedule);
        }

        schedules
    }

    /// Of the two conflicting flights, the one whose `scheduled_time` is
    /// later yields. Ties (identical `scheduled_time`) go to `b`.
    fn pick_delay_target(&self, flights: &[Flight], a: &FlightId, b: &FlightId) -> FlightId {
        let fa = flights.iter().find(|f| &f.id == a).expect("conflict must reference a scheduled flight");
        let fb = flights.iter().find(|f| &f.id == b).expect("conflict must reference a scheduled flight");

        if fa.scheduled_time > fb.scheduled_time {
            fa.id.clone()
        } else {
            fb.id.clone()
        }
    }

    fn schedule_from_path(&self, flight: &Flight, result: &PathResult) -> FlightSchedule {
        let mut t = flight.scheduled_time;
        let mut waypoints = Vec::with_capacity(result.path.len());
        waypoints.push(TimedWaypoint::new(result.path[0], t));

        for pair in result.path.windows(2) {
            let edge_length_m = self
                .graph
                .neighbors_of(pair[0])
                .find(|e| e.to == pair[1])
                .map(|e| e.length_m as f64)
                .unwrap_or(0.0);
            let speed = flight.aircraft_speed_mps.max(0.01);
            t = t.shift((edge_length_m / speed).round() as i64);
            waypoints.push(TimedWaypoint::new(pair[1], t));
        }

        FlightSchedule::new(flight.id.clone(), waypoints, result.stats.total_distance_m, result.stats.total_cost)
    }

    /// The placeholder schedule emitted when no route exists between a
    /// flight's origin and destination: a two-waypoint sequence at the
    /// *same* timestamp, which is not a real traversal — origin and
    /// destination are not actually graph-connected. Distinguished from a
    /// genuine zero-length route only by convention (both report
    /// `total_distance_m == 0.0`); callers that need to tell them apart
    /// should check `on_schedule_failed` rather than inspecting the
    /// schedule itself.
    fn failed_schedule(&self, flight: &Flight) -> FlightSchedule {
        let mut schedule = FlightSchedule::new(
            flight.id.clone(),
            vec![
                TimedWaypoint::new(flight.origin, flight.scheduled_time),
                TimedWaypoint::new(flight.destination, flight.scheduled_time),
            ],
            0.0,
            0.0,
        );
        schedule.conflicts.push(Conflict {
            id: ConflictId(0),
            kind: ConflictKind::PathNotFound,
            severity: Severity::Critical,
            node: flight.origin,
            flight_a: flight.id.clone(),
            flight_b: flight.id.clone(),
            time_a: flight.scheduled_time,
            time_b: flight.scheduled_time,
        });
        schedule
    }
}
