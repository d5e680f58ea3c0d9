use apron_core::{EdgeKind, NodeCategory, Point2D};

use crate::network::{GraphBuildOptions, GraphBuilder, PointFeature, PolylineFeature};

mod builder {
    use super::*;

    #[test]
    fn point_features_become_nodes_in_order() {
        let points = vec![
            PointFeature::new(NodeCategory::StandPoint, Point2D { x: 0.0, y: 0.0 }),
            PointFeature::new(NodeCategory::RunwayPoint, Point2D { x: 100.0, y: 0.0 }),
        ];
        let (graph, warnings) =
            GraphBuilder::new().build(&[points], &[], &GraphBuildOptions::default());

        assert!(warnings.is_empty());
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.node_category[0], NodeCategory::StandPoint);
        assert_eq!(graph.node_category[1], NodeCategory::RunwayPoint);
    }

    #[test]
    fn polyline_becomes_antiparallel_edge_pair() {
        let line = PolylineFeature::new(
            EdgeKind::NetworkRoad,
            vec![Point2D { x: 0.0, y: 0.0 }, Point2D { x: 30.0, y: 40.0 }],
        );
        let (graph, warnings) =
            GraphBuilder::new().build(&[], &[vec![line]], &GraphBuildOptions::default());

        assert!(warnings.is_empty());
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 2);
        for e in graph.neighbors_of(apron_core::NodeId(0)) {
            assert!((e.length_m - 50.0).abs() < 1e-3);
        }
        for e in graph.neighbors_of(apron_core::NodeId(1)) {
            assert!((e.length_m - 50.0).abs() < 1e-3);
        }
    }

    #[test]
    fn malformed_polyline_is_skipped_with_warning() {
        let good = PolylineFeature::new(
            EdgeKind::NetworkRoad,
            vec![Point2D { x: 0.0, y: 0.0 }, Point2D { x: 10.0, y: 0.0 }],
        );
        let bad = PolylineFeature::new(EdgeKind::NetworkRoad, vec![Point2D { x: 5.0, y: 5.0 }]);
        let (graph, warnings) =
            GraphBuilder::new().build(&[], &[vec![good, bad]], &GraphBuildOptions::default());

        assert_eq!(graph.node_count(), 2);
        assert_eq!(warnings.len(), 1);
        assert_eq!(
            warnings[0],
            crate::network::BuildWarning::TooFewVertices { layer_index: 0, feature_index: 1 }
        );
    }
}

mod coalescing {
    use super::*;

    #[test]
    fn shared_endpoint_within_same_cell_coalesces_to_one_node() {
        // Two polylines meeting near (100.0, 100.0), off by sub-meter noise.
        let a = PolylineFeature::new(
            EdgeKind::NetworkRoad,
            vec![Point2D { x: 0.0, y: 100.0 }, Point2D { x: 100.05, y: 100.02 }],
        );
        let b = PolylineFeature::new(
            EdgeKind::NetworkRoad,
            vec![Point2D { x: 100.01, y: 100.0 }, Point2D { x: 200.0, y: 100.0 }],
        );
        let (graph, _) =
            GraphBuilder::new().build(&[], &[vec![a, b]], &GraphBuildOptions::default());

        // 2 polylines x 2 endpoints = 4 endpoints naively, but the shared
        // corner coalesces to a single node: 3 distinct nodes total.
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn endpoints_in_different_cells_stay_distinct() {
        let a = PolylineFeature::new(
            EdgeKind::NetworkRoad,
            vec![Point2D { x: 0.0, y: 0.0 }, Point2D { x: 10.0, y: 0.0 }],
        );
        let b = PolylineFeature::new(
            EdgeKind::NetworkRoad,
            vec![Point2D { x: 10.9, y: 0.0 }, Point2D { x: 20.0, y: 0.0 }],
        );
        let (graph, _) =
            GraphBuilder::new().build(&[], &[vec![a, b]], &GraphBuildOptions::default());

        assert_eq!(graph.node_count(), 4);
    }
}

mod proximity {
    use super::*;

    #[test]
    fn semantic_point_stitches_to_nearest_road_endpoints() {
        let points = vec![PointFeature::new(NodeCategory::StandPoint, Point2D { x: 5.0, y: 5.0 })];
        let line = PolylineFeature::new(
            EdgeKind::NetworkRoad,
            vec![Point2D { x: 0.0, y: 0.0 }, Point2D { x: 100.0, y: 0.0 }],
        );
        let options = GraphBuildOptions { proximity_k: 2, ..GraphBuildOptions::default() };
        let (graph, _) = GraphBuilder::new().build(&[points], &[vec![line]], &options);

        // node 0 = stand, nodes 1,2 = road endpoints.
        let stand = apron_core::NodeId(0);
        let stitched: Vec<_> = graph.neighbors_of(stand).collect();
        assert_eq!(stitched.len(), 2);
        assert!(stitched.iter().all(|e| e.kind == EdgeKind::ProximityStitch));
    }

    #[test]
    fn out_of_threshold_point_is_left_unstitched() {
        let points = vec![PointFeature::new(NodeCategory::StandPoint, Point2D { x: 10_000.0, y: 0.0 })];
        let line = PolylineFeature::new(
            EdgeKind::NetworkRoad,
            vec![Point2D { x: 0.0, y: 0.0 }, Point2D { x: 100.0, y: 0.0 }],
        );
        let options = GraphBuildOptions { proximity_threshold_m: 50.0, ..GraphBuildOptions::default() };
        let (graph, _) = GraphBuilder::new().build(&[points], &[vec![line]], &options);

        let stand = apron_core::NodeId(0);
        assert_eq!(graph.out_degree(stand), 0);
    }

    #[test]
    fn observation_point_is_never_stitched() {
        let points = vec![PointFeature::new(NodeCategory::ObservationPoint, Point2D { x: 5.0, y: 0.0 })];
        let line = PolylineFeature::new(
            EdgeKind::NetworkRoad,
            vec![Point2D { x: 0.0, y: 0.0 }, Point2D { x: 100.0, y: 0.0 }],
        );
        let (graph, _) =
            GraphBuilder::new().build(&[points], &[vec![line]], &GraphBuildOptions::default());

        let obs = apron_core::NodeId(0);
        assert_eq!(graph.out_degree(obs), 0);
    }
}

mod queries {
    use super::*;

    #[test]
    fn find_nearest_node_respects_category_filter() {
        let points = vec![
            PointFeature::new(NodeCategory::StandPoint, Point2D { x: 0.0, y: 0.0 }),
            PointFeature::new(NodeCategory::RunwayPoint, Point2D { x: 1.0, y: 0.0 }),
        ];
        let (graph, _) = GraphBuilder::new().build(&[points], &[], &GraphBuildOptions::default());

        let nearest = graph
            .find_nearest_node(Point2D { x: 0.0, y: 0.0 }, Some(NodeCategory::RunwayPoint), None)
            .unwrap();
        assert_eq!(nearest, apron_core::NodeId(1));
    }

    #[test]
    fn find_nearest_node_respects_max_distance() {
        let points = vec![PointFeature::new(NodeCategory::StandPoint, Point2D { x: 1000.0, y: 0.0 })];
        let (graph, _) = GraphBuilder::new().build(&[points], &[], &GraphBuildOptions::default());

        assert!(graph.find_nearest_node(Point2D { x: 0.0, y: 0.0 }, None, Some(10.0)).is_none());
        assert!(graph.find_nearest_node(Point2D { x: 0.0, y: 0.0 }, None, None).is_some());
    }

    #[test]
    fn find_nodes_by_category_prefix_matches_synthesized_endpoints() {
        let line = PolylineFeature::new(
            EdgeKind::NetworkRoad,
            vec![Point2D { x: 0.0, y: 0.0 }, Point2D { x: 10.0, y: 0.0 }],
        );
        let (graph, _) = GraphBuilder::new().build(&[], &[vec![line]], &GraphBuildOptions::default());

        let found = graph.find_nodes_by_category("Synthesized");
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn neighbors_of_unknown_node_is_empty_not_panicking() {
        let graph = GraphBuilder::new().build(&[], &[], &GraphBuildOptions::default()).0;
        assert_eq!(graph.out_degree(apron_core::NodeId(42)), 0);
    }
}
