//! Toroidal grid representation for Game of Life

use crate::error::{LifeError, LifeResult};
use itertools::iproduct;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::slice::ChunksExact;

/// A fixed-size Game of Life grid whose edges wrap around
///
/// Liveness is stored as 0/1 bytes so neighbor counting is a plain sum.
/// The neighbor-count matrix is scratch space for the rule engine and is
/// only meaningful right after [`crate::game_of_life::update_neighbors`].
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    alive: Vec<u8>,
    neighbors: Vec<u8>,
}

impl Grid {
    /// Create a new grid with every cell dead
    pub fn new(width: usize, height: usize) -> LifeResult<Self> {
        let cells = width
            .checked_mul(height)
            .filter(|&cells| cells > 0)
            .ok_or(LifeError::InvalidDimension { width, height })?;

        Ok(Self {
            width,
            height,
            alive: vec![0; cells],
            neighbors: vec![0; cells],
        })
    }

    /// Create a grid from a 2D boolean array
    pub fn from_cells(cells: &[Vec<bool>]) -> LifeResult<Self> {
        let height = cells.len();
        let width = cells.first().map_or(0, Vec::len);
        let mut grid = Self::new(width, height)?;

        for (row, values) in cells.iter().enumerate() {
            if values.len() != width {
                return Err(LifeError::InvalidDimension { width: values.len(), height });
            }
            for (col, &value) in values.iter().enumerate() {
                grid.set(row, col, value);
            }
        }

        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Convert 2D coordinates to 1D index
    #[inline]
    pub(crate) fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Map any signed `(x, y)` position onto the torus, returning `(row, col)`
    #[inline]
    pub fn wrap(&self, x: i64, y: i64) -> (usize, usize) {
        let row = y.rem_euclid(self.height as i64) as usize;
        let col = x.rem_euclid(self.width as i64) as usize;
        (row, col)
    }

    /// Liveness of the cell at `(row, col)`, coordinates wrap around the torus
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.alive[self.index(row % self.height, col % self.width)] == 1
    }

    /// Set the liveness of the cell at `(row, col)`, coordinates wrap around the torus
    pub fn set(&mut self, row: usize, col: usize, value: bool) {
        let idx = self.index(row % self.height, col % self.width);
        self.alive[idx] = u8::from(value);
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.alive.fill(0);
    }

    /// Neighbor count last computed for `(row, col)`
    pub fn neighbor_count(&self, row: usize, col: usize) -> u8 {
        self.neighbors[self.index(row % self.height, col % self.width)]
    }

    /// Split borrow used by the neighbor counter: liveness shared, counts mutable
    pub(crate) fn counting_view(&mut self) -> (&[u8], &mut [u8]) {
        (&self.alive, &mut self.neighbors)
    }

    /// Split borrow used by the rule engine: liveness mutable, counts shared
    pub(crate) fn update_view(&mut self) -> (&mut [u8], &[u8]) {
        (&mut self.alive, &self.neighbors)
    }

    /// Rows of the liveness matrix, each entry 0 or 1
    pub fn rows(&self) -> ChunksExact<'_, u8> {
        self.alive.chunks_exact(self.width)
    }

    /// Copy of the liveness matrix as booleans, row-major
    pub fn liveness_matrix(&self) -> Vec<Vec<bool>> {
        self.rows()
            .map(|row| row.iter().map(|&cell| cell == 1).collect())
            .collect()
    }

    /// Get all living cell coordinates as `(row, col)`
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        iproduct!(0..self.height, 0..self.width)
            .filter(|&(row, col)| self.is_alive(row, col))
            .collect()
    }

    /// Count total living cells
    pub fn living_count(&self) -> usize {
        self.alive.iter().map(|&cell| cell as usize).sum()
    }

    /// Check if the grid is empty (no living cells)
    pub fn is_empty(&self) -> bool {
        self.alive.iter().all(|&cell| cell == 0)
    }

    /// Refill every cell: live with probability `threshold` percent
    pub fn randomize<R: Rng + ?Sized>(&mut self, threshold: u8, rng: &mut R) -> LifeResult<()> {
        if threshold > 100 {
            return Err(LifeError::InvalidThreshold(threshold));
        }

        for cell in self.alive.iter_mut() {
            *cell = u8::from(rng.gen_range(0..100u8) < threshold);
        }

        Ok(())
    }

    /// Deterministic [`Grid::randomize`] driven by a seeded generator
    pub fn randomize_seeded(&mut self, threshold: u8, seed: u64) -> LifeResult<()> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.randomize(threshold, &mut rng)
    }

    /// Debug rendering: `*` for live cells, `.` for dead, one line per row
    pub fn render(&self) -> String {
        let mut result = String::with_capacity(self.height * (self.width + 1));

        for row in self.rows() {
            result.extend(row.iter().map(|&cell| if cell == 1 { '*' } else { '.' }));
            result.push('\n');
        }

        result
    }
}

impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        super::compare::grids_equal(self, other)
    }
}

impl Eq for Grid {}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = Grid::new(3, 4).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 4);
        assert_eq!(grid.rows().count(), 4);
        assert!(grid.rows().all(|row| row.len() == 3));
        assert!(grid.is_empty());
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            Grid::new(0, 5).unwrap_err(),
            LifeError::InvalidDimension { width: 0, height: 5 }
        );
        assert!(Grid::new(5, 0).is_err());
        assert!(Grid::from_cells(&[]).is_err());
        assert_eq!(
            Grid::new(usize::MAX, 2).unwrap_err(),
            LifeError::InvalidDimension { width: usize::MAX, height: 2 }
        );
    }

    #[test]
    fn test_grid_from_cells() {
        let cells = vec![
            vec![true, false, true],
            vec![false, true, false],
            vec![true, false, true],
        ];
        let grid = Grid::from_cells(&cells).unwrap();
        assert_eq!(grid.living_count(), 5);
        assert_eq!(grid.liveness_matrix(), cells);

        let ragged = vec![vec![true, false], vec![true]];
        assert!(Grid::from_cells(&ragged).is_err());
    }

    #[test]
    fn test_wrap_coordinates() {
        let grid = Grid::new(5, 4).unwrap();
        assert_eq!(grid.wrap(0, 0), (0, 0));
        assert_eq!(grid.wrap(5, 4), (0, 0));
        assert_eq!(grid.wrap(-1, -1), (3, 4));
        assert_eq!(grid.wrap(-11, 9), (1, 4));
    }

    #[test]
    fn test_copy_is_independent() {
        let mut original = Grid::new(4, 4).unwrap();
        original.set(1, 1, true);

        let mut copy = original.clone();
        assert_eq!(original, copy);

        copy.set(2, 2, true);
        assert!(!original.is_alive(2, 2));
        assert_ne!(original, copy);

        original.set(1, 1, false);
        assert!(copy.is_alive(1, 1));
    }

    #[test]
    fn test_render() {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.set(0, 1, true);
        grid.set(1, 2, true);
        assert_eq!(grid.render(), ".*.\n..*\n");
        assert_eq!(grid.to_string(), grid.render());
    }

    #[test]
    fn test_randomize_bounds() {
        let mut grid = Grid::new(10, 10).unwrap();

        grid.randomize_seeded(0, 7).unwrap();
        assert!(grid.is_empty());

        grid.randomize_seeded(100, 7).unwrap();
        assert_eq!(grid.living_count(), 100);

        assert_eq!(grid.randomize_seeded(101, 7), Err(LifeError::InvalidThreshold(101)));
    }

    #[test]
    fn test_randomize_density_follows_threshold() {
        let mut grid = Grid::new(100, 100).unwrap();
        grid.randomize_seeded(30, 2024).unwrap();

        let density = grid.living_count() as f64 / 10_000.0;
        assert!((density - 0.30).abs() < 0.03, "density {}", density);
    }

    #[test]
    fn test_randomize_is_deterministic_when_seeded() {
        let mut a = Grid::new(16, 16).unwrap();
        let mut b = Grid::new(16, 16).unwrap();
        a.randomize_seeded(40, 1234).unwrap();
        b.randomize_seeded(40, 1234).unwrap();
        assert_eq!(a, b);
        assert!(!a.is_empty());
        assert!(a.living_count() < 256);
    }
}
