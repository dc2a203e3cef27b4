//! Snapshot error surface.

use thiserror::Error;

/// Why a snapshot could not be restored.
///
/// Restoration never touches a live `Building`: on failure the caller's
/// in-memory state is exactly what it was.  Errors from the host's chosen
/// serialization format (JSON, bincode, …) surface from the host's own
/// serializer before this type is ever involved.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot version {got} is not supported (expected {expected})")]
    Version { expected: u32, got: u32 },

    #[error("snapshot is structurally inconsistent: {0}")]
    Corrupt(String),
}
