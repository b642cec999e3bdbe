//! Single scenario run

use super::RunSummary;
use crate::config::Settings;
use crate::game_of_life::{find_period, Grid, LifeRules};
use crate::patterns::apply_all;
use anyhow::{Context, Result};
use std::time::Instant;
use tracing::{debug, trace};

/// A grid together with the settings that produced it
pub struct Simulation {
    settings: Settings,
    initial: Grid,
    grid: Grid,
    generation: usize,
    seed: Option<u64>,
}

impl Simulation {
    /// Build the starting grid: optional random fill, then placements in order
    pub fn from_settings(settings: Settings) -> Result<Self> {
        settings.validate().context("Invalid simulation settings")?;

        let sim = &settings.simulation;
        let mut grid = Grid::new(sim.width, sim.height)?;

        let seed = match sim.random_fill {
            Some(threshold) => {
                let seed = sim.seed.unwrap_or_else(rand::random);
                grid.randomize_seeded(threshold, seed)?;
                debug!(seed, threshold, living = grid.living_count(), "random fill");
                Some(seed)
            }
            None => None,
        };

        apply_all(&mut grid, &settings.placements);
        debug!(
            width = sim.width,
            height = sim.height,
            placements = settings.placements.len(),
            living = grid.living_count(),
            "initial grid ready"
        );

        Ok(Self::with_grid(settings, grid, seed))
    }

    /// Create a simulation around an explicit starting grid (useful for testing)
    pub fn with_grid(settings: Settings, grid: Grid, seed: Option<u64>) -> Self {
        Self {
            settings,
            initial: grid.clone(),
            grid,
            generation: 0,
            seed,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn initial(&self) -> &Grid {
        &self.initial
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Advance one generation
    pub fn step(&mut self) {
        LifeRules::cycle(&mut self.grid);
        self.generation += 1;
        trace!(generation = self.generation, living = self.grid.living_count(), "cycled");
    }

    /// Run the configured number of generations
    ///
    /// `observer` sees the grid after every generation, numbered from 1.
    pub fn run<F>(&mut self, mut observer: F) -> RunSummary
    where
        F: FnMut(usize, &Grid),
    {
        let start_time = Instant::now();

        for _ in 0..self.settings.simulation.generations {
            self.step();
            observer(self.generation, &self.grid);
        }

        let elapsed = start_time.elapsed();
        let summary = self.summary(elapsed);
        debug!(
            generations = summary.generations,
            living = summary.final_living_cells,
            period = ?summary.final_period,
            elapsed_ms = elapsed.as_millis() as u64,
            "run finished"
        );
        summary
    }

    /// Period of the configured starting state, if it recurs within the search limit
    pub fn initial_period(&self) -> Option<usize> {
        find_period(&self.initial, self.settings.simulation.period_search)
    }

    fn summary(&self, elapsed: std::time::Duration) -> RunSummary {
        let sim = &self.settings.simulation;
        RunSummary {
            seed: self.seed,
            width: sim.width,
            height: sim.height,
            generations: self.generation,
            initial_living_cells: self.initial.living_count(),
            final_living_cells: self.grid.living_count(),
            final_period: find_period(&self.grid, sim.period_search),
            elapsed,
        }
    }
}
