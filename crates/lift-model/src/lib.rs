//! `lift-model` — the simulated entities of the `rust_lift` workspace.
//!
//! | Module       | Contents                                             |
//! |--------------|------------------------------------------------------|
//! | [`person`]   | `Person`, `PersonState` — one transport request      |
//! | [`floor`]    | `Floor` — waiting queue and call flags               |
//! | [`elevator`] | `Elevator`, `Motion` — the per-car state machine     |
//!
//! Entities hold their own invariants (state-transition guards, capacity
//! bounds); the tick ordering that drives them lives in `lift-sim`.

pub mod elevator;
pub mod floor;
pub mod person;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use elevator::{Elevator, ElevatorCounters, Motion};
pub use floor::Floor;
pub use person::{Person, PersonState};
