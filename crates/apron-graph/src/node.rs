//! `Node` — the small typed core kept in `Graph`'s SoA arrays.
//!
//! Per the redesign guidance (preserve round-tripping of source attributes
//! without paying for an open polymorphic map on every lookup), a node's
//! hot fields (category, position, optional geo metadata) live directly in
//! `Graph`'s parallel arrays, while arbitrary source-feature attributes are
//! kept in a sidecar table (`Graph::node_props`) keyed by `NodeId`.

use apron_core::{GeoPoint, NodeCategory, Point2D};

/// A single graph node: identity is implicit in its position within
/// `Graph`'s arrays (i.e. its `NodeId`).
#[derive(Clone, Debug)]
pub struct Node {
    pub category: NodeCategory,
    pub pos: Point2D,
    /// Original geographic coordinate, if this node was ingested from a
    /// geo-referenced feature. `None` for purely synthetic nodes.
    pub geo: Option<GeoPoint>,
}

impl Node {
    pub fn new(category: NodeCategory, pos: Point2D) -> Self {
        Self { category, pos, geo: None }
    }

    pub fn with_geo(mut self, geo: GeoPoint) -> Self {
        self.geo = Some(geo);
        self
    }
}
