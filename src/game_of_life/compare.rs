//! Structural comparison of grids and period detection

use super::{Grid, LifeRules};

/// Check if two grids have the same dimensions and the same living cells
///
/// Neighbor counts are scratch state and never take part in the comparison.
pub fn grids_equal(a: &Grid, b: &Grid) -> bool {
    a.width() == b.width() && a.height() == b.height() && a.rows().eq(b.rows())
}

/// First `(row, col)` whose liveness differs, scanning row-major
///
/// Returns `None` when the grids are equal or their dimensions differ.
pub fn first_difference(a: &Grid, b: &Grid) -> Option<(usize, usize)> {
    if a.width() != b.width() || a.height() != b.height() {
        return None;
    }

    a.rows().zip(b.rows()).enumerate().find_map(|(row, (left, right))| {
        left.iter()
            .zip(right)
            .position(|(x, y)| x != y)
            .map(|col| (row, col))
    })
}

/// Smallest number of generations after which `grid` repeats itself
///
/// Runs on a copy; the input is not advanced. A return of `Some(n)` means
/// the state recurs after `n` cycles, so the true period divides `n`.
pub fn find_period(grid: &Grid, max_generations: usize) -> Option<usize> {
    let mut current = grid.clone();

    for generation in 1..=max_generations {
        LifeRules::cycle(&mut current);
        if grids_equal(&current, grid) {
            return Some(generation);
        }
    }

    None
}
