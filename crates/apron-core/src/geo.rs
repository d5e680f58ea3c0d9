//! Planar coordinates and the original geographic coordinate metadata.
//!
//! `Point2D` is the coordinate type the rest of the workspace operates on:
//! the external geo loader (out of scope — see spec §1) is responsible for
//! reprojecting WGS84 input into a metric planar CRS before it ever reaches
//! `apron-graph`. `GeoPoint` is kept around only as optional per-node
//! metadata (the original lon/lat), never used for distance math.

/// A projected planar coordinate in meters.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2D {
    pub x: f32,
    pub y: f32,
}

impl Point2D {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Plain Euclidean distance in meters. Both points must already be in
    /// the same projected CRS — this is not a great-circle calculation.
    #[inline]
    pub fn distance_m(self, other: Point2D) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Integer-meter cell used to coalesce polyline endpoints that land on
    /// (nearly) the same physical point but differ by sub-meter float noise.
    ///
    /// Truncation (not rounding) is deliberate: two endpoints on opposite
    /// sides of a whole-meter boundary by a hair's width will land in
    /// adjacent cells and fail to coalesce, same as the reference system.
    #[inline]
    pub fn cell(self) -> (i64, i64) {
        (self.x.floor() as i64, self.y.floor() as i64)
    }
}

impl std::fmt::Display for Point2D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

/// Total planar length of a polyline, summing the distance between each
/// consecutive pair of vertices.
///
/// Returns `0.0` for fewer than 2 vertices.
pub fn polyline_length_m(vertices: &[Point2D]) -> f32 {
    vertices
        .windows(2)
        .map(|w| w[0].distance_m(w[1]))
        .sum()
}

/// The original WGS-84 geographic coordinate a node was ingested from,
/// retained as metadata only (never used for routing math).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lon: f32,
    pub lat: f32,
}

impl GeoPoint {
    #[inline]
    pub fn new(lon: f32, lat: f32) -> Self {
        Self { lon, lat }
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lon, self.lat)
    }
}
