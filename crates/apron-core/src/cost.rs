//! The multi-objective edge cost model.
//!
//! # Design
//!
//! A single scalar combines three terms with configured weights:
//!
//! ```text
//! cost(distance, time) = w_d * distance + w_t * time + w_f * (0.1*distance + 0.05*time)
//! ```
//!
//! The fuel term is a linear proxy with no empirical calibration — the
//! coefficients (`0.1`, `0.05`) are part of the contract and must be
//! preserved exactly; changing them changes every demo and test fixture's
//! expected numbers.

/// Tunable weights for the three cost terms plus the aircraft nominal taxi
/// speed used to convert edge length into travel time.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostWeights {
    pub w_d: f64,
    pub w_t: f64,
    pub w_f: f64,
    /// Aircraft nominal taxi speed in m/s, used both as the heuristic's
    /// speed bound and (per spec §4.4) as the sole speed used when
    /// computing reported path statistics.
    pub s_a: f64,
}

impl Default for CostWeights {
    fn default() -> Self {
        Self { w_d: 1.0, w_t: 1.0, w_f: 0.5, s_a: 15.0 }
    }
}

/// The scalar edge cost for a segment of the given distance and travel
/// time. Coefficients are fixed by contract — do not refactor them into
/// named constants that might drift.
#[inline]
pub fn edge_cost(distance_m: f64, time_s: f64, weights: &CostWeights) -> f64 {
    weights.w_d * distance_m
        + weights.w_t * time_s
        + weights.w_f * (0.1 * distance_m + 0.05 * time_s)
}

/// Travel time in seconds to cross a segment of length `length_m` at the
/// lesser of the edge's speed cap and the aircraft's nominal speed.
#[inline]
pub fn travel_time_s(length_m: f64, edge_speed_cap_mps: f64, aircraft_speed_mps: f64) -> f64 {
    length_m / edge_speed_cap_mps.min(aircraft_speed_mps)
}
