use apron_core::{CostWeights, NodeId};
use apron_graph::{GraphBuildOptions, GraphBuilder, PointFeature, PolylineFeature};
use apron_core::{EdgeKind, NodeCategory, Point2D};

use crate::k_alternatives::find_k_alternatives;
use crate::neighbor::DefaultNeighbors;
use crate::planner::PathPlanner;

/// Builds a small diamond graph: node 0 (A) --- node 1 (top mid) --- node 2 (D)
/// and node 0 (A) --- node 3 (bottom mid) --- node 2 (D), with the bottom
/// route longer than the top one.
fn diamond_graph() -> apron_graph::Graph {
    let top1 = PolylineFeature::new(
        EdgeKind::NetworkRoad,
        vec![Point2D::new(0.0, 0.0), Point2D::new(50.0, 5.0)],
    );
    let top2 = PolylineFeature::new(
        EdgeKind::NetworkRoad,
        vec![Point2D::new(50.0, 5.0), Point2D::new(100.0, 0.0)],
    );
    let bottom1 = PolylineFeature::new(
        EdgeKind::NetworkRoad,
        vec![Point2D::new(0.0, 0.0), Point2D::new(50.0, -40.0)],
    );
    let bottom2 = PolylineFeature::new(
        EdgeKind::NetworkRoad,
        vec![Point2D::new(50.0, -40.0), Point2D::new(100.0, 0.0)],
    );

    let (graph, warnings) = GraphBuilder::new().build(
        &[],
        &[vec![top1, top2, bottom1, bottom2]],
        &GraphBuildOptions::default(),
    );
    assert!(warnings.is_empty());
    graph
}

#[test]
fn astar_finds_the_shorter_route() {
    let graph = diamond_graph();
    let planner = PathPlanner::new(&graph, CostWeights::default(), 10.0);
    let provider = DefaultNeighbors::new(&graph);

    let result = planner.find_path(NodeId(0), NodeId(2), &provider).unwrap();

    assert_eq!(result.path, vec![NodeId(0), NodeId(1), NodeId(2)]);
    assert!((result.stats.total_distance_m - 100.4988).abs() < 0.01);
    assert_eq!(result.stats.num_nodes, 3);
}

#[test]
fn stats_time_uses_nominal_speed_not_capped_speed() {
    // Aircraft speed (5 m/s) is below the edge's default speed cap (15 m/s),
    // so the capped search speed equals the aircraft speed and the
    // nominal-speed statistic matches exactly what the search itself used.
    let graph = diamond_graph();
    let planner = PathPlanner::new(&graph, CostWeights::default(), 5.0);
    let provider = DefaultNeighbors::new(&graph);

    let result = planner.find_path(NodeId(0), NodeId(2), &provider).unwrap();
    let expected_time = result.stats.total_distance_m / 5.0;
    assert!((result.stats.total_time_s - expected_time).abs() < 1e-6);
}

#[test]
fn total_cost_matches_recomputed_stats_even_when_search_used_capped_speed() {
    // Aircraft speed (20 m/s) exceeds the default edge speed cap (15 m/s),
    // so the search itself accumulates cost using the capped speed while
    // the reported stats use the aircraft's nominal speed throughout.
    // total_cost must still be recomputable from total_distance_m and
    // total_time_s via the same cost formula, not the raw search g-score.
    let graph = diamond_graph();
    let weights = CostWeights::default();
    let planner = PathPlanner::new(&graph, weights, 20.0);
    let provider = DefaultNeighbors::new(&graph);

    let result = planner.find_path(NodeId(0), NodeId(2), &provider).unwrap();
    let expected_cost = apron_core::edge_cost(result.stats.total_distance_m, result.stats.total_time_s, &weights);
    assert!((result.stats.total_cost - expected_cost).abs() < 1e-9);
}

#[test]
fn same_origin_and_destination_is_trivial() {
    let graph = diamond_graph();
    let planner = PathPlanner::new(&graph, CostWeights::default(), 10.0);
    let provider = DefaultNeighbors::new(&graph);

    let result = planner.find_path(NodeId(0), NodeId(0), &provider).unwrap();
    assert_eq!(result.path, vec![NodeId(0)]);
    assert_eq!(result.stats.total_distance_m, 0.0);
}

#[test]
fn unknown_node_is_rejected_before_search() {
    let graph = diamond_graph();
    let planner = PathPlanner::new(&graph, CostWeights::default(), 10.0);
    let provider = DefaultNeighbors::new(&graph);

    let err = planner.find_path(NodeId(999), NodeId(2), &provider).unwrap_err();
    assert!(matches!(err, crate::error::PlannerError::UnknownOrigin(_)));
}

#[test]
fn disconnected_nodes_produce_no_route_error() {
    let isolated = PointFeature::new(NodeCategory::ObservationPoint, Point2D::new(5000.0, 5000.0));
    let (graph, _) = GraphBuilder::new().build(
        &[vec![isolated]],
        &[vec![PolylineFeature::new(
            EdgeKind::NetworkRoad,
            vec![Point2D::new(0.0, 0.0), Point2D::new(10.0, 0.0)],
        )]],
        &GraphBuildOptions::default(),
    );
    let planner = PathPlanner::new(&graph, CostWeights::default(), 10.0);
    let provider = DefaultNeighbors::new(&graph);

    let err = planner.find_path(NodeId(0), NodeId(1), &provider).unwrap_err();
    assert!(matches!(err, crate::error::PlannerError::NoRoute { .. }));
}

#[test]
fn k_alternatives_returns_distinct_routes_cheapest_first() {
    let graph = diamond_graph();
    let planner = PathPlanner::new(&graph, CostWeights::default(), 10.0);

    let alternatives = find_k_alternatives(&planner, NodeId(0), NodeId(2), 2);

    assert_eq!(alternatives.len(), 2);
    assert_eq!(alternatives[0].path, vec![NodeId(0), NodeId(1), NodeId(2)]);
    assert_eq!(alternatives[1].path, vec![NodeId(0), NodeId(3), NodeId(2)]);
    assert!(alternatives[0].stats.total_distance_m < alternatives[1].stats.total_distance_m);
}

#[test]
fn k_alternatives_stops_early_when_graph_has_fewer_than_k_routes() {
    let graph = diamond_graph();
    let planner = PathPlanner::new(&graph, CostWeights::default(), 10.0);

    let alternatives = find_k_alternatives(&planner, NodeId(0), NodeId(2), 5);
    assert_eq!(alternatives.len(), 2);
}
