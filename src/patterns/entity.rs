//! Glyph-defined entities and the generic stamping routine

use super::Mirror;
use crate::game_of_life::Grid;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Character marking a live cell in a glyph pattern
pub const LIVE_GLYPH: char = '*';

/// An arbitrary pattern written as rows of glyphs
///
/// Rows may have different lengths; each row is stamped on its own.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pattern {
    rows: Vec<String>,
}

impl Pattern {
    pub fn new<S: Into<String>>(rows: impl IntoIterator<Item = S>) -> Self {
        Self {
            rows: rows.into_iter().map(Into::into).collect(),
        }
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row
    pub fn width(&self) -> usize {
        self.rows.iter().map(|row| row.chars().count()).max().unwrap_or(0)
    }

    /// Live cells as `(row, col)` offsets from the pattern's top-left corner
    pub fn live_cells(&self) -> Vec<(usize, usize)> {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(row, glyphs)| {
                glyphs
                    .chars()
                    .enumerate()
                    .filter(|&(_, glyph)| glyph == LIVE_GLYPH)
                    .map(move |(col, _)| (row, col))
            })
            .collect()
    }

    /// Mirror the glyph text itself, row order and/or each row's characters
    pub fn mirrored(&self, mirror: Mirror) -> Pattern {
        let mut rows: Vec<String> = if mirror.flip_x {
            self.rows.iter().map(|row| row.chars().rev().collect()).collect()
        } else {
            self.rows.clone()
        };
        if mirror.flip_y {
            rows.reverse();
        }
        Pattern { rows }
    }

    /// Stamp this pattern onto `grid`, see [`add_entity`]
    pub fn stamp(&self, grid: &mut Grid, x: i64, y: i64, mirror: impl Into<Mirror>) {
        add_entity(grid, x, y, &self.rows, mirror);
    }
}

impl From<&[&str]> for Pattern {
    fn from(rows: &[&str]) -> Self {
        Pattern::new(rows.iter().copied())
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

/// Stamp a glyph pattern with its top-left corner at `(x, y)`
///
/// Every glyph overwrites its destination cell: [`LIVE_GLYPH`] sets it
/// alive, any other character sets it dead. Positions wrap modulo the grid
/// dimensions. A mirrored axis walks the pattern backwards from
/// `origin + extent`, so the mirrored footprint sits one cell further along
/// that axis than the unmirrored one. Patterns larger than the grid fold
/// onto themselves and later glyphs win.
pub fn add_entity<S: AsRef<str>>(
    grid: &mut Grid,
    x: i64,
    y: i64,
    rows: &[S],
    mirror: impl Into<Mirror>,
) {
    let mirror = mirror.into();
    let (origin_row, origin_col) = grid.wrap(x, y);
    let row_count = rows.len();

    for (e, glyphs) in rows.iter().enumerate() {
        let glyphs = glyphs.as_ref();
        let row = origin_row + if mirror.flip_y { row_count - e } else { e };
        let col_count = glyphs.chars().count();

        for (i, glyph) in glyphs.chars().enumerate() {
            let col = origin_col + if mirror.flip_x { col_count - i } else { i };
            grid.set(row, col, glyph == LIVE_GLYPH);
        }
    }
}
