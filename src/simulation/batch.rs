//! Independent seeded runs executed in parallel

use super::{RunSummary, Simulation};
use crate::config::Settings;
use anyhow::{Context, Result};
use rayon::prelude::*;
use tracing::{info, warn};

/// Run one simulation per seed on the rayon pool
///
/// Every run owns its grid, so nothing is shared between workers. Results
/// come back in the order of `seeds`.
pub fn run_batch(settings: &Settings, seeds: &[u64]) -> Result<Vec<RunSummary>> {
    settings.validate().context("Invalid batch settings")?;

    if settings.simulation.random_fill.is_none() {
        warn!("random_fill is not set, every run in the batch starts from the same grid");
    }

    let summaries = seeds
        .par_iter()
        .map(|&seed| -> Result<RunSummary> {
            let mut run_settings = settings.clone();
            run_settings.simulation.seed = Some(seed);

            let mut simulation = Simulation::from_settings(run_settings)
                .with_context(|| format!("Failed to build run for seed {}", seed))?;
            Ok(simulation.run(|_, _| {}))
        })
        .collect::<Result<Vec<_>>>()?;

    info!(runs = summaries.len(), "batch finished");
    Ok(summaries)
}

/// `count` consecutive seeds starting at `base`
pub fn seed_range(base: u64, count: usize) -> Vec<u64> {
    (0..count as u64).map(|offset| base.wrapping_add(offset)).collect()
}
