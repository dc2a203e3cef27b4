//! `lift-dispatch` — which car answers a hall call.
//!
//! One entry point ([`Dispatcher::dispatch`]) polymorphic over a closed set
//! of [`Heuristic`] variants:
//!
//! | Variant             | Policy                                             |
//! |---------------------|----------------------------------------------------|
//! | `Fcfs`              | serve calls in arrival order, first free car       |
//! | `WaitTimeOptimized` | minimum estimated ticks-to-arrival                 |
//! | `EnergyOptimized`   | minimum estimated travel cost (responsive at peak) |
//!
//! Dispatch is demand-driven: the building invokes it only for floors whose
//! queue survived direct boarding.  A call that no car can take simply stays
//! pending and is re-evaluated next tick — dispatch never fails, it just
//! declines.

pub mod dispatcher;
pub mod heuristic;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use dispatcher::{Dispatcher, FloorCall};
pub use heuristic::Heuristic;
