//! Absolute wall-clock time.
//!
//! # Design
//!
//! Unlike `rust_dt`'s `Tick`-and-`SimClock` pair (a monotonic simulation
//! counter mapped to wall time by a fixed tick duration), this system has no
//! simulation clock at all — every timestamp here already *is* an absolute
//! moment. `Timestamp` keeps the teacher's operator-overload shape (`Add`,
//! `Sub`, `Display`) but drops the tick-duration indirection: flights are
//! scheduled and delayed directly in seconds.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::error::CoreError;

/// An absolute point in time, stored as Unix seconds.
///
/// Signed so that arithmetic (delay propagation, waypoint-time differences)
/// never has to special-case an underflow the way an unsigned tick counter
/// would.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub const ZERO: Timestamp = Timestamp(0);

    /// Absolute difference in seconds between two timestamps.
    #[inline]
    pub fn abs_diff(self, other: Timestamp) -> i64 {
        (self.0 - other.0).abs()
    }

    /// Shift this timestamp by a signed number of seconds.
    #[inline]
    pub fn shift(self, delta_secs: i64) -> Timestamp {
        Timestamp(self.0 + delta_secs)
    }
}

impl std::ops::Add<i64> for Timestamp {
    type Output = Timestamp;
    #[inline]
    fn add(self, rhs: i64) -> Timestamp {
        Timestamp(self.0 + rhs)
    }
}

impl std::ops::Sub for Timestamp {
    type Output = i64;
    #[inline]
    fn sub(self, rhs: Timestamp) -> i64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match DateTime::<Utc>::from_timestamp(self.0, 0) {
            Some(dt) => write!(f, "{}", dt.to_rfc3339()),
            None => write!(f, "t={}", self.0),
        }
    }
}

/// Parse a scheduled-time field accepting either an RFC 3339 string or a
/// bare epoch-seconds integer, per the external interface's "ISO8601 or
/// epoch-seconds" contract.
pub fn parse_timestamp(s: &str) -> Result<Timestamp, CoreError> {
    let s = s.trim();
    if let Ok(secs) = s.parse::<i64>() {
        return Ok(Timestamp(secs));
    }
    DateTime::parse_from_rfc3339(s)
        .map(|dt| Timestamp(dt.timestamp()))
        .map_err(|_| CoreError::Parse(format!("invalid timestamp {s:?}: expected RFC3339 or epoch seconds")))
}
