//! `lift-sim` — tick loop orchestrator for the rust_lift workspace.
//!
//! # The per-tick phase loop
//!
//! ```text
//! Building::update(tick):
//!   ① Peak flag  — recompute peak_hour from the tick-of-day calendar.
//!   ② Cars       — advance every car's state machine in fleet order;
//!                  fold delivered passengers into the statistics.
//!   ③ Waiting    — one wait tick for every queued person.
//!   ④ Call scan  — floors in index order: direct boarding from cars
//!                  parked there, then (if the queue survived) one
//!                  dispatcher invocation; drained floors drop their
//!                  call record.
//!   ⑤ Drain      — per-car counters → BuildingStats (reset on read).
//! ```
//!
//! The caller owns the cadence: one `update` per logical tick, never
//! concurrent.  Pausing the driver needs no teardown — the `Building` is
//! plain data, resumable at the next tick boundary (and snapshottable via
//! [`Building::snapshot`]).
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::{FloorId, Tick};
//! use lift_sim::{Building, NoopObserver};
//!
//! let mut building = Building::new(10, 2, 8)?;
//! building.inject_request(FloorId(0), FloorId(7), Tick::ZERO)?;
//! building.run_ticks(60, &mut NoopObserver);
//! println!("moved {} people", building.stats().transported);
//! ```

pub mod builder;
pub mod building;
pub mod error;
pub mod observer;
pub mod snapshot;
pub mod stats;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::BuildingBuilder;
pub use building::Building;
pub use error::SnapshotError;
pub use observer::{BuildingObserver, NoopObserver};
pub use snapshot::Snapshot;
pub use stats::BuildingStats;
