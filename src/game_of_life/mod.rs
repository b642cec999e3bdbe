//! Game of Life core functionality

pub mod compare;
pub mod grid;
pub mod neighbors;
pub mod rules;

pub use compare::{find_period, first_difference, grids_equal};
pub use grid::Grid;
pub use neighbors::update_neighbors;
pub use rules::LifeRules;

/// Advance the grid one generation in place
pub fn cycle(grid: &mut Grid) {
    LifeRules::cycle(grid);
}
