//! `lift-core` — foundational types for the `rust_lift` elevator simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It intentionally
//! has no `lift-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                            |
//! |---------------|-----------------------------------------------------|
//! | [`ids`]       | `PersonId`, `ElevatorId`, `FloorId`                 |
//! | [`direction`] | `Direction` (up/down travel)                        |
//! | [`time`]      | `Tick`, `PeakSchedule`, `SimConfig`                 |
//! | [`rng`]       | `SimRng` (seeded, deterministic)                    |
//! | [`error`]     | `LiftError`, `LiftResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                    |
//! |---------|-----------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.       |
//!           | Required by `lift-sim` snapshots.                         |

pub mod direction;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use direction::Direction;
pub use error::{LiftError, LiftResult};
pub use ids::{ElevatorId, FloorId, PersonId};
pub use rng::SimRng;
pub use time::{PeakSchedule, PeakWindow, SimConfig, Tick};
