use thiserror::Error;

/// Errors loading a traffic plan.  All of them surface at load time —
/// a plan that parsed is valid for the whole run.
#[derive(Debug, Error)]
pub enum TrafficError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(String),
}
