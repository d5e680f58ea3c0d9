//! How the scheduler orders flights before sequentially routing them.

use std::cmp::Ordering;

use apron_schedule::{Flight, OperationKind};

/// Controls the order flights are routed in during the scheduler's first
/// pass. Order matters because routing is sequential and conflict
/// resolution only ever delays a flight relative to the ones routed before
/// it — whichever flight goes first effectively has priority over the
/// node-occupancy slots it claims.
///
/// Ties within a strategy are left to `sort_by`'s stability: input order is
/// preserved, with no further comparator key breaking a genuine tie.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[non_exhaustive]
pub enum SchedulingStrategy {
    /// Earliest `scheduled_time` first; ties broken by priority (higher
    /// first).
    #[default]
    FirstComeFirstServed,
    /// Highest [`Priority`](apron_schedule::Priority) first; ties broken by
    /// `scheduled_time`.
    Priority,
    /// Departures before arrivals (and repositionings); ties broken by
    /// ascending `scheduled_time`.
    TimeWindow,
}

impl SchedulingStrategy {
    /// Total order over flights for this strategy.
    pub fn compare(self, a: &Flight, b: &Flight) -> Ordering {
        match self {
            SchedulingStrategy::FirstComeFirstServed => {
                a.scheduled_time.cmp(&b.scheduled_time).then_with(|| b.priority.cmp(&a.priority))
            }
            SchedulingStrategy::Priority => {
                b.priority.cmp(&a.priority).then_with(|| a.scheduled_time.cmp(&b.scheduled_time))
            }
            SchedulingStrategy::TimeWindow => departure_rank(a.operation)
                .cmp(&departure_rank(b.operation))
                .then_with(|| a.scheduled_time.cmp(&b.scheduled_time)),
        }
    }

    /// Sort `flights` in place according to this strategy's order.
    pub fn sort(self, flights: &mut [Flight]) {
        flights.sort_by(|a, b| self.compare(a, b));
    }
}

/// `0` for departures, `1` for everything else, so departures always sort
/// before arrivals and repositionings under `TimeWindow`.
fn departure_rank(operation: OperationKind) -> u8 {
    if operation == OperationKind::Departure {
        0
    } else {
        1
    }
}
