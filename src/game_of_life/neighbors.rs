//! Toroidal neighbor counting

use super::Grid;

/// Recompute every cell's live-neighbor count from the current liveness
///
/// Rows and columns wrap to the opposite edge, so every cell has a full
/// eight-cell neighborhood. On grids narrower or shorter than three cells
/// the same neighbor is counted more than once, which is how the torus
/// folds onto itself.
pub fn update_neighbors(grid: &mut Grid) {
    let width = grid.width();
    let height = grid.height();
    let (alive, counts) = grid.counting_view();

    for row in 0..height {
        let above = (height + row - 1) % height;
        let below = (row + 1) % height;

        for col in 0..width {
            let left = (width + col - 1) % width;
            let right = (col + 1) % width;
            let at = |r: usize, c: usize| alive[r * width + c];

            counts[row * width + col] = at(above, left)
                + at(above, col)
                + at(above, right)
                + at(row, left)
                + at(row, right)
                + at(below, left)
                + at(below, col)
                + at(below, right);
        }
    }
}
