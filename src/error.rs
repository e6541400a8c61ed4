//! Error types
//!
//! Simulation transitions are total; errors only come from malformed input
//! (direction names, grid sizes) and from the storage/settings collaborators.

use thiserror::Error;

/// Errors raised outside the per-tick update cycle.
#[derive(Debug, Error)]
pub enum SnakeError {
    #[error("invalid direction {0:?}: expected one of up, down, left, right")]
    InvalidDirection(String),
    #[error("grid {width}x{height} is outside the supported sizes")]
    InvalidBoundaries { width: u32, height: u32 },
    #[error("storage error: {0}")]
    Storage(String),
    #[error("settings error: {0}")]
    Settings(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SnakeError>;
