//! Node category and edge-kind tags.
//!
//! Both enums are `#[non_exhaustive]`, the same convention
//! `dt_core::TransportMode` uses: applications extending road
//! classification (e.g. a new perimeter-road subtype) should not be a
//! breaking change for this crate.

use std::fmt;

/// Semantic category of a graph node.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum NodeCategory {
    /// A parking position at a terminal.
    StandPoint,
    /// An entry/exit point to/from a runway.
    RunwayPoint,
    /// A point used only as a road-network stitching anchor (not a stand or
    /// runway entry), e.g. a taxiway waypoint callout.
    NetworkPoint,
    /// A point retained for monitoring purposes only — never stitched.
    ObservationPoint,
    /// Endpoint of an ingested polyline, synthesized by `GraphBuilder`
    /// rather than supplied as an explicit point feature.
    SynthesizedLineEndpoint,
}

impl NodeCategory {
    /// `true` for the categories the builder proximity-stitches to the road
    /// network (`StandPoint`, `RunwayPoint`, `NetworkPoint`).
    #[inline]
    pub fn is_stitchable(self) -> bool {
        matches!(
            self,
            NodeCategory::StandPoint | NodeCategory::RunwayPoint | NodeCategory::NetworkPoint
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NodeCategory::StandPoint => "StandPoint",
            NodeCategory::RunwayPoint => "RunwayPoint",
            NodeCategory::NetworkPoint => "NetworkPoint",
            NodeCategory::ObservationPoint => "ObservationPoint",
            NodeCategory::SynthesizedLineEndpoint => "SynthesizedLineEndpoint",
        }
    }
}

impl fmt::Display for NodeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Semantic type of a directed graph edge.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum EdgeKind {
    NetworkRoad,
    AircraftRoad,
    ServiceVehicleRoad,
    PerimeterRoad,
    ExternalRoad,
    /// Synthetic edge connecting a semantic point to a nearby road endpoint.
    ProximityStitch,
}

impl EdgeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EdgeKind::NetworkRoad => "NetworkRoad",
            EdgeKind::AircraftRoad => "AircraftRoad",
            EdgeKind::ServiceVehicleRoad => "ServiceVehicleRoad",
            EdgeKind::PerimeterRoad => "PerimeterRoad",
            EdgeKind::ExternalRoad => "ExternalRoad",
            EdgeKind::ProximityStitch => "ProximityStitch",
        }
    }

    /// Parse a road-type tag from the external point/polyline feature
    /// interface. Unrecognized tags fall back to `NetworkRoad` rather than
    /// rejecting the feature outright — ingestion never aborts on a single
    /// malformed attribute (see spec §4.1 failure semantics).
    pub fn from_feature_tag(tag: &str) -> EdgeKind {
        match tag {
            "AircraftRoad" => EdgeKind::AircraftRoad,
            "ServiceVehicleRoad" => EdgeKind::ServiceVehicleRoad,
            "PerimeterRoad" => EdgeKind::PerimeterRoad,
            "ExternalRoad" => EdgeKind::ExternalRoad,
            "ProximityStitch" => EdgeKind::ProximityStitch,
            _ => EdgeKind::NetworkRoad,
        }
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
