//! Topology synthesis, in-memory graph storage, and spatial indexing.
//!
//! | module      | contents                                              |
//! |-------------|--------------------------------------------------------|
//! | `node`      | `Node` — the per-node typed core                       |
//! | `edge`      | `Edge` — the per-edge typed core                        |
//! | `network`   | `Graph` (CSR + R-tree) and `GraphBuilder`               |
//! | `error`     | `GraphError`                                            |

pub mod edge;
pub mod error;
pub mod network;
pub mod node;

#[cfg(test)]
mod tests;

pub use edge::{Edge, DEFAULT_SPEED_CAP_MPS};
pub use error::{GraphError, GraphResult};
pub use network::{BuildWarning, Graph, GraphBuildOptions, GraphBuilder, PointFeature, PolylineFeature};
pub use node::Node;
