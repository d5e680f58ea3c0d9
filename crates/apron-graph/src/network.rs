//! Graph storage and topology synthesis.
//!
//! # Data layout
//!
//! Outgoing edges use **Compressed Sparse Row (CSR)** format, exactly as
//! the teacher road-network crate this is grounded on: given a `NodeId n`,
//! its outgoing edges occupy the slice
//!
//! ```text
//! edge_from[ node_out_start[n] .. node_out_start[n+1] ]
//! ```
//!
//! sorted by source node and indexed by `EdgeId`. A node's outgoing edges
//! are therefore a contiguous memory scan — ideal for A*'s inner loop.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps `(x, y)` to the nearest `NodeId`, used both
//! for `Graph::find_nearest_node` and internally while proximity-stitching
//! semantic points onto the road network during `build()`.
//!
//! # Topology synthesis
//!
//! Unlike a graph handed a ready-made edge list, `GraphBuilder::build`
//! synthesizes the graph from two heterogeneous input layers:
//!
//! 1. **Point features** become nodes directly, one per feature, in input
//!    order.
//! 2. **Polyline features** become road edges between *coalesced*
//!    endpoints: each endpoint's (x, y) is truncated to an integer-meter
//!    cell and looked up in a coalescing table so that two polylines
//!    sharing a physical endpoint (within ~1 m) land on the same node.
//! 3. **Proximity stitching** then connects every semantic point (stand,
//!    runway, or network point) to its nearest `K` road endpoints within a
//!    distance threshold, so free-standing points are not left isolated
//!    from the road network.

use std::collections::HashMap;

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use apron_core::{EdgeKind, GeoPoint, NodeCategory, NodeId, Point2D};

use crate::edge::{Edge, DEFAULT_SPEED_CAP_MPS};
use crate::node::Node;

// ── R-tree node entry ─────────────────────────────────────────────────────────

/// Entry stored in the R-tree spatial index: a 2-D `[x, y]` point with the
/// associated `NodeId`.
#[derive(Clone)]
struct NodeEntry {
    point: [f32; 2],
    id: NodeId,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── Input feature types ───────────────────────────────────────────────────────

/// A point feature supplied by the external geo loader.
#[derive(Clone, Debug)]
pub struct PointFeature {
    pub category: NodeCategory,
    pub pos: Point2D,
    pub geo: Option<GeoPoint>,
    pub metadata: HashMap<String, String>,
}

impl PointFeature {
    pub fn new(category: NodeCategory, pos: Point2D) -> Self {
        Self { category, pos, geo: None, metadata: HashMap::new() }
    }
}

/// A polyline feature supplied by the external geo loader.
#[derive(Clone, Debug)]
pub struct PolylineFeature {
    pub road_type: EdgeKind,
    pub vertices: Vec<Point2D>,
    pub metadata: HashMap<String, String>,
}

impl PolylineFeature {
    pub fn new(road_type: EdgeKind, vertices: Vec<Point2D>) -> Self {
        Self { road_type, vertices, metadata: HashMap::new() }
    }
}

/// A non-fatal issue encountered while ingesting a malformed feature.
/// Ingestion never aborts on these — see spec §4.1 failure semantics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BuildWarning {
    /// A polyline had fewer than 2 coordinates and was skipped.
    TooFewVertices { layer_index: usize, feature_index: usize },
}

/// Configuration for `GraphBuilder::build`.
#[derive(Clone, Copy, Debug)]
pub struct GraphBuildOptions {
    /// Maximum distance (m) at which a semantic point may be stitched to a
    /// road endpoint. Default 500 m.
    pub proximity_threshold_m: f32,
    /// Number of nearest road endpoints stitched per semantic point. Default 5.
    pub proximity_k: usize,
    /// Speed cap applied to every synthesized edge. Default 15 m/s.
    pub default_edge_speed_cap_mps: f32,
}

impl Default for GraphBuildOptions {
    fn default() -> Self {
        Self {
            proximity_threshold_m: 500.0,
            proximity_k: 5,
            default_edge_speed_cap_mps: DEFAULT_SPEED_CAP_MPS,
        }
    }
}

// ── Graph ─────────────────────────────────────────────────────────────────────

/// Directed graph in CSR format plus a spatial index for node queries.
///
/// All node/edge arrays are `pub` for direct indexed access on hot paths
/// (the A* inner loop in `apron-planner` reads these millions of times per
/// search). Do not construct directly; use [`GraphBuilder`].
pub struct Graph {
    // ── Node data ─────────────────────────────────────────────────────────
    pub node_category: Vec<NodeCategory>,
    pub node_pos: Vec<Point2D>,
    pub node_geo: Vec<Option<GeoPoint>>,
    pub node_props: Vec<HashMap<String, String>>,

    // ── CSR edge adjacency ────────────────────────────────────────────────
    /// Outgoing edges of node `n` are at EdgeIds
    /// `node_out_start[n] .. node_out_start[n+1]`. Length = node_count + 1.
    pub node_out_start: Vec<u32>,

    // ── Edge data (indexed by EdgeId = position in sorted order) ──────────
    pub edge_from: Vec<NodeId>,
    pub edge_to: Vec<NodeId>,
    pub edge_kind: Vec<EdgeKind>,
    pub edge_length_m: Vec<f32>,
    pub edge_speed_cap_mps: Vec<f32>,

    // ── Spatial index ─────────────────────────────────────────────────────
    spatial_idx: RTree<NodeEntry>,
}

impl Graph {
    /// An empty graph with no nodes or edges.
    pub fn empty() -> Self {
        GraphBuilder::new().build(&[], &[], &GraphBuildOptions::default()).0
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_pos.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_pos.is_empty()
    }

    // ── Node access ───────────────────────────────────────────────────────

    pub fn get_node(&self, node: NodeId) -> Option<Node> {
        let i = node.index();
        if i >= self.node_pos.len() {
            return None;
        }
        Some(Node { category: self.node_category[i], pos: self.node_pos[i], geo: self.node_geo[i] })
    }

    pub fn node_props(&self, node: NodeId) -> Option<&HashMap<String, String>> {
        self.node_props.get(node.index())
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Stable-ordered (insertion order) iterator over the outgoing edges of
    /// `node`. Never returns `None` — an unknown or isolated node simply
    /// yields an empty sequence.
    #[inline]
    pub fn neighbors_of(&self, node: NodeId) -> impl Iterator<Item = Edge> + '_ {
        let i = node.index();
        let (start, end) = if i + 1 < self.node_out_start.len() {
            (self.node_out_start[i] as usize, self.node_out_start[i + 1] as usize)
        } else {
            (0, 0)
        };
        (start..end).map(move |e| Edge {
            from: self.edge_from[e],
            to: self.edge_to[e],
            kind: self.edge_kind[e],
            length_m: self.edge_length_m[e],
            speed_cap_mps: self.edge_speed_cap_mps[e],
        })
    }

    pub fn out_degree(&self, node: NodeId) -> usize {
        self.neighbors_of(node).count()
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// Return the nearest node to `(x, y)` whose category matches
    /// `category_filter` (if given) and within `max_distance` meters (if
    /// given). `None` if the graph is empty or nothing matches.
    pub fn find_nearest_node(
        &self,
        pos: Point2D,
        category_filter: Option<NodeCategory>,
        max_distance: Option<f32>,
    ) -> Option<NodeId> {
        self.spatial_idx
            .nearest_neighbor_iter(&[pos.x, pos.y])
            .filter(|e| category_filter.is_none_or(|c| self.node_category[e.id.index()] == c))
            .find(|e| {
                max_distance.is_none_or(|max| self.node_pos[e.id.index()].distance_m(pos) <= max)
            })
            .map(|e| e.id)
    }

    /// All nodes whose category's name starts with `prefix`, in `NodeId`
    /// order. Prefix matching (rather than exact-match) allows subcategory
    /// tags synthesized by the builder to still be found by a coarser query.
    pub fn find_nodes_by_category(&self, prefix: &str) -> Vec<NodeId> {
        self.node_category
            .iter()
            .enumerate()
            .filter(|(_, c)| c.as_str().starts_with(prefix))
            .map(|(i, _)| NodeId(i as u32))
            .collect()
    }
}

// ── GraphBuilder ──────────────────────────────────────────────────────────────

struct RawEdge {
    from: NodeId,
    to: NodeId,
    kind: EdgeKind,
    length_m: f32,
    speed_cap_mps: f32,
}

/// Synthesizes a [`Graph`] from point and polyline feature layers.
///
/// Construct with [`GraphBuilder::new`], then call [`build`](Self::build)
/// once with all layers and options. The builder itself holds no
/// configuration — `build` takes [`GraphBuildOptions`] directly so the same
/// builder instance is never reused with inconsistent settings.
pub struct GraphBuilder {
    nodes: Vec<Node>,
    node_props: Vec<HashMap<String, String>>,
    raw_edges: Vec<RawEdge>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self { nodes: Vec::new(), node_props: Vec::new(), raw_edges: Vec::new() }
    }

    fn add_node(&mut self, node: Node, props: HashMap<String, String>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        self.node_props.push(props);
        id
    }

    fn add_road(&mut self, a: NodeId, b: NodeId, kind: EdgeKind, length_m: f32, speed_cap_mps: f32) {
        self.raw_edges.push(RawEdge { from: a, to: b, kind, length_m, speed_cap_mps });
        self.raw_edges.push(RawEdge { from: b, to: a, kind, length_m, speed_cap_mps });
    }

    /// Ingest `point_layers` and `line_layers` (each an ordered list of
    /// source layers, each layer an ordered list of features — preserving
    /// "source-file order, then in-file feature order" per spec §4.1) and
    /// produce a [`Graph`] plus any non-fatal [`BuildWarning`]s.
    pub fn build(
        mut self,
        point_layers: &[Vec<PointFeature>],
        line_layers: &[Vec<PolylineFeature>],
        options: &GraphBuildOptions,
    ) -> (Graph, Vec<BuildWarning>) {
        let mut warnings = Vec::new();

        // ── Point ingestion ────────────────────────────────────────────────
        for layer in point_layers {
            for feature in layer {
                let mut node = Node::new(feature.category, feature.pos);
                if let Some(geo) = feature.geo {
                    node = node.with_geo(geo);
                }
                self.add_node(node, feature.metadata.clone());
            }
        }

        // ── Polyline ingestion with endpoint coalescing ───────────────────
        let mut cell_to_node: HashMap<(i64, i64), NodeId> = HashMap::new();

        for (layer_index, layer) in line_layers.iter().enumerate() {
            for (feature_index, feature) in layer.iter().enumerate() {
                if feature.vertices.len() < 2 {
                    warnings.push(BuildWarning::TooFewVertices { layer_index, feature_index });
                    continue;
                }

                let start = feature.vertices[0];
                let end = *feature.vertices.last().unwrap();

                let start_node = self.node_for_cell(start.cell(), start, &mut cell_to_node);
                let end_node = self.node_for_cell(end.cell(), end, &mut cell_to_node);

                let length_m = apron_core::polyline_length_m(&feature.vertices);
                self.add_road(
                    start_node,
                    end_node,
                    feature.road_type,
                    length_m,
                    options.default_edge_speed_cap_mps,
                );
            }
        }

        // ── Proximity stitching ───────────────────────────────────────────
        let road_endpoints: Vec<NodeId> = self
            .nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.category == NodeCategory::SynthesizedLineEndpoint)
            .map(|(i, _)| NodeId(i as u32))
            .collect();

        let semantic_points: Vec<NodeId> = self
            .nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.category.is_stitchable())
            .map(|(i, _)| NodeId(i as u32))
            .collect();

        for p in semantic_points {
            let p_pos = self.nodes[p.index()].pos;
            let mut candidates: Vec<(f32, NodeId)> = road_endpoints
                .iter()
                .map(|&r| (p_pos.distance_m(self.nodes[r.index()].pos), r))
                .filter(|(d, _)| *d <= options.proximity_threshold_m)
                .collect();
            // Ties on distance broken by NodeId ascending for reproducibility.
            candidates.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap().then(a.1.cmp(&b.1)));
            candidates.truncate(options.proximity_k);

            for (dist, r) in candidates {
                self.add_road(p, r, EdgeKind::ProximityStitch, dist, options.default_edge_speed_cap_mps);
            }
        }

        // ── CSR construction ───────────────────────────────────────────────
        let node_count = self.nodes.len();
        let edge_count = self.raw_edges.len();

        let mut raw = self.raw_edges;
        raw.sort_by_key(|e| e.from.0);

        let edge_from: Vec<NodeId> = raw.iter().map(|e| e.from).collect();
        let edge_to: Vec<NodeId> = raw.iter().map(|e| e.to).collect();
        let edge_kind: Vec<EdgeKind> = raw.iter().map(|e| e.kind).collect();
        let edge_length_m: Vec<f32> = raw.iter().map(|e| e.length_m).collect();
        let edge_speed_cap_mps: Vec<f32> = raw.iter().map(|e| e.speed_cap_mps).collect();

        let mut node_out_start = vec![0u32; node_count + 1];
        for e in &raw {
            node_out_start[e.from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[node_count] as usize, edge_count);

        let entries: Vec<NodeEntry> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(i, n)| NodeEntry { point: [n.pos.x, n.pos.y], id: NodeId(i as u32) })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        let node_category = self.nodes.iter().map(|n| n.category).collect();
        let node_pos = self.nodes.iter().map(|n| n.pos).collect();
        let node_geo = self.nodes.iter().map(|n| n.geo).collect();

        let graph = Graph {
            node_category,
            node_pos,
            node_geo,
            node_props: self.node_props,
            node_out_start,
            edge_from,
            edge_to,
            edge_kind,
            edge_length_m,
            edge_speed_cap_mps,
            spatial_idx,
        };

        (graph, warnings)
    }

    /// Look up or allocate the node for a coalescing cell, creating a
    /// `SynthesizedLineEndpoint` at the *original* float coordinate on a
    /// miss (the cell key itself is only used for lookup, never stored as
    /// the node's position).
    fn node_for_cell(
        &mut self,
        cell: (i64, i64),
        original: Point2D,
        table: &mut HashMap<(i64, i64), NodeId>,
    ) -> NodeId {
        if let Some(&id) = table.get(&cell) {
            return id;
        }
        let id = self.add_node(Node::new(NodeCategory::SynthesizedLineEndpoint, original), HashMap::new());
        table.insert(cell, id);
        id
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
