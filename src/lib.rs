//! Conway's Game of Life on a fixed-size toroidal grid.
//!
//! The core (`domain` plus `SimulationState` and `codec`) is plain data and
//! synchronous functions: no I/O, no logging, no scheduling. `Driver`,
//! `storage` and the macroquad viewer sit on top of it.

// Error types
pub mod error;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Use cases and coordination
pub mod application;

// Configuration and persistence transports
pub mod config;
pub mod storage;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid, Pattern, PatternCategory, PatternLibrary, presets, scale_to_fit};
pub use application::{Driver, SimulationState, Snapshot, Statistics, codec};
pub use config::SimulationConfig;
pub use error::{ConfigError, LifeError, StoreError};
pub use storage::{FileStore, MemoryStore, StateStore};
