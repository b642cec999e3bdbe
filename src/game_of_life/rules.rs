//! Game of Life rules implementation

use super::{update_neighbors, Grid};

/// Game of Life rules engine
pub struct LifeRules;

impl LifeRules {
    /// Next liveness of a cell given its current state and neighbor count
    ///
    /// Branches are checked in order: underpopulation, overpopulation,
    /// reproduction. Anything left keeps its current state.
    pub fn next_state(alive: bool, neighbors: u8) -> bool {
        if neighbors < 2 {
            false
        } else if alive && neighbors > 3 {
            false
        } else if neighbors == 3 {
            true
        } else {
            alive
        }
    }

    /// Advance the grid one generation in place
    ///
    /// All counts are taken before any cell changes, so the update is
    /// synchronous.
    pub fn cycle(grid: &mut Grid) {
        update_neighbors(grid);

        let (alive, counts) = grid.update_view();
        for (cell, &neighbors) in alive.iter_mut().zip(counts) {
            *cell = u8::from(Self::next_state(*cell == 1, neighbors));
        }
    }

    /// Advance the grid `generations` times in place
    pub fn cycle_generations(grid: &mut Grid, generations: usize) {
        for _ in 0..generations {
            Self::cycle(grid);
        }
    }

    /// Return the next generation, leaving `current` untouched
    pub fn evolve(current: &Grid) -> Grid {
        let mut next = current.clone();
        Self::cycle(&mut next);
        next
    }
}
