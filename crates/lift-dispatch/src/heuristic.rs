//! The closed set of call-assignment policies.

use std::fmt;

/// Which scoring model the dispatcher applies to a hall call.
///
/// A plain tagged union dispatched by `match` — the set is closed by design
/// and switchable mid-run without touching any other simulation state.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    /// First come, first served: calls queue in arrival order; the head is
    /// answered by the first car that is free (or already heading there).
    #[default]
    Fcfs,
    /// Minimize the estimated ticks until a car reaches the call floor.
    WaitTimeOptimized,
    /// Minimize estimated travel cost; collapses to nearest-car during peak
    /// hours to keep response times acceptable.
    EnergyOptimized,
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Heuristic::Fcfs              => write!(f, "first-come-first-served"),
            Heuristic::WaitTimeOptimized => write!(f, "wait-time optimized"),
            Heuristic::EnergyOptimized   => write!(f, "energy optimized"),
        }
    }
}
