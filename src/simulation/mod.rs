//! Scenario driver: builds a grid from settings and advances it

pub mod batch;
pub mod runner;
pub mod summary;

pub use batch::{run_batch, seed_range};
pub use runner::Simulation;
pub use summary::RunSummary;
