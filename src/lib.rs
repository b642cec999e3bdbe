//! Conway's Game of Life on a toroidal grid
//!
//! This library provides a wrap-around grid, the synchronous Life update,
//! a library of seed patterns with mirror transforms, and a small scenario
//! driver for running configured or randomized boards.

pub mod config;
pub mod error;
pub mod game_of_life;
pub mod patterns;
pub mod simulation;
pub mod utils;

pub use config::Settings;
pub use error::LifeError;
pub use game_of_life::{cycle, Grid, LifeRules};
pub use simulation::{RunSummary, Simulation};

use anyhow::Result;

/// Main entry point: build the configured scenario and run it to completion
pub fn run_scenario(settings: Settings) -> Result<(Grid, RunSummary)> {
    let mut simulation = Simulation::from_settings(settings)?;
    let summary = simulation.run(|_, _| {});
    Ok((simulation.grid().clone(), summary))
}
