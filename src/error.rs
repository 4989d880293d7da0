//! Error types shared across the crate.

use std::io;

/// Errors raised by the simulation core and its persistence surface.
#[derive(Debug, thiserror::Error)]
pub enum LifeError {
    #[error("Grid size must be positive (got {0})")]
    InvalidDimension(usize),
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),
    #[error("Pattern name must contain at least one non-whitespace character")]
    InvalidName,
    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Malformed saved state: {0}")]
    Parse(String),
    #[error("Unknown pattern: {0}")]
    NotFound(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors raised by a state store transport.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Errors raised while loading or validating a [`crate::SimulationConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Grid size must be positive")]
    InvalidSize,
    #[error("Random density must lie in [0, 1] (got {0})")]
    InvalidDensity(f64),
    #[error("Speed must be between 0 and 10 (got {0})")]
    InvalidSpeed(u8),
    #[error("Default pattern is not a built-in pattern: {0}")]
    UnknownPattern(String),
    #[error("Failed to read config: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
}
