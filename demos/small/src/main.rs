//! small — smallest example for the apron taxi-routing and scheduling system.
//!
//! Builds a synthetic 8-node airport surface (2 stands, 1 runway entry, 2
//! parallel taxiways joined by a connector), plans a handful of routes with
//! `apron-planner` (including k alternatives between a stand and the
//! runway), then schedules 4 flights with `apron-scheduler` and writes the
//! resulting schedule and any detected conflicts to CSV via `apron-output`.

mod network;

use std::path::Path;

use anyhow::Result;

use apron_core::{CostWeights, FlightId, Timestamp};
use apron_output::{CsvWriter, OutputWriter, ScheduleOutputObserver};
use apron_planner::{find_k_alternatives, DefaultNeighbors, PathPlanner};
use apron_schedule::{Flight, FlightSchedule, OperationKind, Priority};
use apron_scheduler::{Scheduler, SchedulerObserver, SchedulingStrategy};

use network::build_network;

const AIRCRAFT_SPEED_MPS: f64 = 12.0;

/// Wraps `ScheduleOutputObserver` to also print progress, mirroring the
/// "counting observer" pattern used to add ad hoc bookkeeping on top of an
/// output-writing observer without modifying it.
struct PrintingObserver {
    inner: ScheduleOutputObserver<CsvWriter>,
    conflicts_seen: usize,
    delays_applied: usize,
}

impl PrintingObserver {
    fn new(inner: ScheduleOutputObserver<CsvWriter>) -> Self {
        Self { inner, conflicts_seen: 0, delays_applied: 0 }
    }
}

impl SchedulerObserver for PrintingObserver {
    fn on_flight_routed(&mut self, flight_id: &FlightId, schedule: &FlightSchedule) {
        println!(
            "  routed {flight_id}: {} waypoints, {:.1} m, cost {:.1}",
            schedule.waypoints.len(),
            schedule.total_distance_m,
            schedule.total_cost
        );
        self.inner.on_flight_routed(flight_id, schedule);
    }

    fn on_schedule_failed(&mut self, flight_id: &FlightId) {
        println!("  ! {flight_id} has no route — placeholder schedule emitted");
        self.inner.on_schedule_failed(flight_id);
    }

    fn on_conflict_detected(&mut self, conflict: &apron_schedule::Conflict) {
        self.conflicts_seen += 1;
        println!(
            "  conflict {}: {} vs {} at node {} ({:?}, {:?})",
            conflict.id, conflict.flight_a, conflict.flight_b, conflict.node, conflict.kind, conflict.severity
        );
        self.inner.on_conflict_detected(conflict);
    }

    fn on_flight_delayed(&mut self, flight_id: &FlightId, delay_secs: i64) {
        self.delays_applied += 1;
        println!("  delaying {flight_id} by {delay_secs}s");
        self.inner.on_flight_delayed(flight_id, delay_secs);
    }

    fn on_pass_end(&mut self, resolved: usize, remaining: usize) {
        if resolved == 0 {
            println!("  no conflicts this pass");
        } else {
            println!("  pass found {resolved} conflict(s), {remaining} left unresolved");
        }
        self.inner.on_pass_end(resolved, remaining);
    }

    fn on_schedule_finalized(&mut self, flight_id: &FlightId, schedule: &FlightSchedule) {
        self.inner.on_schedule_finalized(flight_id, schedule);
    }
}

fn main() -> Result<()> {
    println!("=== small — apron taxi-routing and scheduling demo ===");
    println!();

    // 1. Build the synthetic airport network.
    let (graph, [stand_a, stand_b, runway]) = build_network();
    println!("Network: {} nodes, {} edges", graph.node_count(), graph.edge_count());
    println!();

    // 2. Show k alternative routes from stand_a to the runway.
    let weights = CostWeights::default();
    let planner = PathPlanner::new(&graph, weights, AIRCRAFT_SPEED_MPS);
    let alternatives = find_k_alternatives(&planner, stand_a, runway, 3);
    println!("Found {} alternative route(s) from {stand_a} to {runway}:", alternatives.len());
    for (i, alt) in alternatives.iter().enumerate() {
        println!(
            "  {}. {} nodes, {:.1} m, {:.1} s",
            i + 1,
            alt.stats.num_nodes,
            alt.stats.total_distance_m,
            alt.stats.total_time_s
        );
    }
    println!();

    // 3. A direct single-path check with the default neighbor provider.
    let direct = planner.find_path(stand_a, runway, &DefaultNeighbors::new(&graph))?;
    println!(
        "Direct A* route stand_a -> runway: {:.1} m, {:.1} s, fuel {:.2}",
        direct.stats.total_distance_m, direct.stats.total_time_s, direct.stats.fuel_consumption
    );
    println!();

    // 4. Schedule a small batch of flights expected to conflict near the
    //    runway end of the field.
    let base_time = Timestamp(1_700_000_000);
    let flights = vec![
        Flight::new("AB100", OperationKind::Departure, stand_a, runway, base_time)
            .with_speed(AIRCRAFT_SPEED_MPS),
        Flight::new("AB200", OperationKind::Arrival, runway, stand_b, base_time)
            .with_speed(AIRCRAFT_SPEED_MPS),
        Flight::new("AB300", OperationKind::Departure, stand_b, runway, base_time.shift(30))
            .with_priority(Priority::High)
            .with_speed(AIRCRAFT_SPEED_MPS),
        Flight::new("AB400", OperationKind::Repositioning, stand_a, stand_b, base_time.shift(60))
            .with_priority(Priority::Low)
            .with_speed(AIRCRAFT_SPEED_MPS),
    ];

    println!("Scheduling {} flights with FirstComeFirstServed strategy...", flights.len());
    let scheduler = Scheduler::new(&graph, weights, SchedulingStrategy::FirstComeFirstServed);

    let output_dir = Path::new("output/small");
    std::fs::create_dir_all(output_dir)?;
    let writer = CsvWriter::new(output_dir)?;
    let mut obs = PrintingObserver::new(ScheduleOutputObserver::new(writer));

    let schedules = scheduler.run(flights, &mut obs);

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }
    obs.inner.into_writer().finish()?;

    println!();
    println!("{:<10} {:<10} {:<10}", "Flight", "Depart", "Arrive");
    println!("{}", "-".repeat(32));
    for (id, schedule) in &schedules {
        println!(
            "{:<10} {:<10} {:<10}",
            id.as_str(),
            schedule.departure_time().map(|t| t.0).unwrap_or_default(),
            schedule.arrival_time().map(|t| t.0).unwrap_or_default(),
        );
    }

    println!();
    println!(
        "Summary: {} conflicts observed, {} delay(s) applied",
        obs.conflicts_seen, obs.delays_applied
    );
    println!("CSV output written to {}", output_dir.display());

    Ok(())
}
