//! Workspace error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `LiftError` via `From` impls, or keep them separate and wrap `LiftError`
//! as one variant.  Both patterns are acceptable; prefer whichever keeps
//! error sites clean.

use thiserror::Error;

use crate::FloorId;

/// The top-level error type for `lift-core` and a common base for sub-crates.
///
/// Only *structural* problems surface here — bad indices, impossible
/// configurations.  Transient conditions (full car, no free elevator) are
/// absorbed by the tick loop and retried; they are never errors.
#[derive(Debug, Error)]
pub enum LiftError {
    #[error("floor {floor} out of range: building has {floor_count} floors")]
    InvalidFloor { floor: FloorId, floor_count: u16 },

    #[error("origin and destination are both {0}")]
    SameFloor(FloorId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `lift-*` crates.
pub type LiftResult<T> = Result<T, LiftError>;
