//! `Edge` — the small typed core for a directed graph edge.

use apron_core::{EdgeKind, NodeId};

/// A single directed graph edge.
#[derive(Clone, Copy, Debug)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub kind: EdgeKind,
    pub length_m: f32,
    pub speed_cap_mps: f32,
}

/// Default speed cap applied to any edge the caller doesn't override.
pub const DEFAULT_SPEED_CAP_MPS: f32 = 15.0;
