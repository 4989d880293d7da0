mod simulation;
mod driver;
pub mod codec;

pub use simulation::{SimulationState, Snapshot, Statistics, DEFAULT_SIZE};
pub use driver::{Driver, MAX_SPEED};
