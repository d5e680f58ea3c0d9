//! Synthetic small-airport network: two stands, one runway entry, two
//! parallel taxiways joined by a single cross-connector.
//!
//! Gives A* more than one way to cross the field (north taxiway, south
//! taxiway, or a hop across the connector), which is what makes the
//! k-alternatives and conflict-delay parts of the demo interesting.

use apron_core::{EdgeKind, NodeCategory, Point2D};
use apron_graph::{Graph, GraphBuildOptions, GraphBuilder, PointFeature, PolylineFeature};

/// Returns `(graph, [stand_a, stand_b, runway])`.
pub fn build_network() -> (Graph, [apron_core::NodeId; 3]) {
    let stand_a = PointFeature::new(NodeCategory::StandPoint, Point2D::new(0.0, 0.0));
    let stand_b = PointFeature::new(NodeCategory::StandPoint, Point2D::new(0.0, 100.0));
    let runway = PointFeature::new(NodeCategory::RunwayPoint, Point2D::new(1000.0, 50.0));
    let points = vec![stand_a, stand_b, runway];

    let north_taxiway = PolylineFeature::new(
        EdgeKind::AircraftRoad,
        vec![Point2D::new(50.0, 0.0), Point2D::new(950.0, 0.0)],
    );
    let south_taxiway = PolylineFeature::new(
        EdgeKind::AircraftRoad,
        vec![Point2D::new(50.0, 100.0), Point2D::new(950.0, 100.0)],
    );
    let connector = PolylineFeature::new(
        EdgeKind::AircraftRoad,
        vec![Point2D::new(500.0, 0.0), Point2D::new(500.0, 100.0)],
    );

    let (graph, warnings) = GraphBuilder::new().build(
        &[points],
        &[vec![north_taxiway, south_taxiway, connector]],
        &GraphBuildOptions::default(),
    );
    debug_assert!(warnings.is_empty(), "synthetic network should never produce build warnings");

    // Point features are ingested first and in order, so their NodeIds are
    // exactly 0, 1, 2.
    (graph, [apron_core::NodeId(0), apron_core::NodeId(1), apron_core::NodeId(2)])
}
