//! `apron-core` — foundational types for the airport taxi-routing system.
//!
//! This crate is a dependency of every other `apron-*` crate. It
//! intentionally has minimal external dependencies (`thiserror` and
//! `chrono`, plus optional `serde`), following the same "small, dependency-
//! light foundation crate" convention the wider workspace uses.
//!
//! # What lives here
//!
//! | Module       | Contents                                             |
//! |--------------|-------------------------------------------------------|
//! | [`ids`]      | `NodeId`, `EdgeId`, `FlightId`, `ConflictId`          |
//! | [`geo`]      | `Point2D`, `GeoPoint`, polyline length                |
//! | [`category`] | `NodeCategory`, `EdgeKind`                            |
//! | [`time`]     | `Timestamp`, `parse_timestamp`                        |
//! | [`cost`]     | `CostWeights`, `edge_cost`, `travel_time_s`           |
//! | [`error`]    | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod category;
pub mod cost;
pub mod error;
pub mod geo;
pub mod ids;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use category::{EdgeKind, NodeCategory};
pub use cost::{edge_cost, travel_time_s, CostWeights};
pub use error::{CoreError, CoreResult};
pub use geo::{polyline_length_m, GeoPoint, Point2D};
pub use ids::{ConflictId, EdgeId, FlightId, NodeId};
pub use time::{parse_timestamp, Timestamp};
