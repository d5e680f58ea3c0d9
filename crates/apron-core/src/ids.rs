//! Strongly typed, zero-cost identifier wrappers.
//!
//! `NodeId`/`EdgeId` follow the `rust_dt` convention: `Copy + Ord + Hash`
//! primitive wrappers so they can be used as map keys and `Vec` indices
//! without ceremony. `FlightId`/`ConflictId` are not dense indices — flights
//! arrive with caller-assigned string identities and conflicts are created
//! incrementally during scheduling — so they wrap a `String` and a `u64`
//! counter respectively rather than participating in the `typed_id!` macro.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID" — equivalent to the inner type's MAX.
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }
    };
}

typed_id! {
    /// Index of a graph node. Max ~4.3 billion nodes.
    pub struct NodeId(u32);
}

typed_id! {
    /// Index of a directed graph edge.
    pub struct EdgeId(u32);
}

/// Caller-assigned flight identity (e.g. `"DAL123"`).
///
/// Wraps `String` rather than a dense index: flights are not a SoA
/// population allocated at startup the way `dt_core::AgentId` is — they
/// arrive one request at a time with an externally meaningful identity that
/// must round-trip through the scheduler's output map.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlightId(pub String);

impl FlightId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FlightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FlightId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for FlightId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Identity of a detected conflict, assigned monotonically by
/// `ConflictDetector` within one scheduling pass.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConflictId(pub u64);

impl fmt::Display for ConflictId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Conflict({})", self.0)
    }
}
