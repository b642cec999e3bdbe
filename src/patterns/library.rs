//! Named still lifes, oscillators and spaceships

use super::{add_entity, Heading, Mirror, Reflection, LIVE_GLYPH};
use crate::game_of_life::Grid;

/// 2x2 still life
pub const BLOCK: &[&str] = &[
    "**",
    "**",
];

/// 4x3 still life
pub const BEEHIVE: &[&str] = &[
    " ** ",
    "*  *",
    " ** ",
];

/// 3x3 still life
pub const BOAT: &[&str] = &[
    "** ",
    "* *",
    " * ",
];

/// Period 2 oscillator, vertical phase
pub const BLINKER: &[&str] = &[
    " * ",
    " * ",
    " * ",
];

/// Period 2 oscillator
pub const TOAD: &[&str] = &[
    " ***",
    "*** ",
];

/// Glider travelling down and to the right
pub const GLIDER: &[&str] = &[
    " * ",
    "  *",
    "***",
];

/// Gosper glider gun with a one-cell blank border
pub const GLIDER_GUN: &[&str] = &[
    "                                      ",
    "                         *            ",
    "                       * *            ",
    "             **      **            ** ",
    "            *   *    **            ** ",
    " **        *     *   **               ",
    " **        *   * **    * *            ",
    "           *     *       *            ",
    "            *   *                     ",
    "             **                       ",
    "                                      ",
];

/// Overwrite a fixed template at `(x, y)`, mirroring offsets in place
///
/// Unlike [`add_entity`], a mirrored axis maps offset `i` to `extent - 1 - i`,
/// so the footprint does not move.
fn stamp_template(grid: &mut Grid, x: i64, y: i64, template: &[&str], mirror: Mirror) {
    let (origin_row, origin_col) = grid.wrap(x, y);
    let extent_y = template.len();

    for (r, glyphs) in template.iter().enumerate() {
        let dy = if mirror.flip_y { extent_y - 1 - r } else { r };
        let extent_x = glyphs.chars().count();

        for (c, glyph) in glyphs.chars().enumerate() {
            let dx = if mirror.flip_x { extent_x - 1 - c } else { c };
            grid.set(origin_row + dy, origin_col + dx, glyph == LIVE_GLYPH);
        }
    }
}

pub fn add_block(grid: &mut Grid, x: i64, y: i64) {
    stamp_template(grid, x, y, BLOCK, Mirror::NONE);
}

pub fn add_beehive(grid: &mut Grid, x: i64, y: i64) {
    stamp_template(grid, x, y, BEEHIVE, Mirror::NONE);
}

pub fn add_boat(grid: &mut Grid, x: i64, y: i64) {
    stamp_template(grid, x, y, BOAT, Mirror::NONE);
}

pub fn add_blinker(grid: &mut Grid, x: i64, y: i64) {
    stamp_template(grid, x, y, BLINKER, Mirror::NONE);
}

pub fn add_toad(grid: &mut Grid, x: i64, y: i64) {
    stamp_template(grid, x, y, TOAD, Mirror::NONE);
}

/// Stamp a 3x3 glider facing `heading`
pub fn add_glider(grid: &mut Grid, x: i64, y: i64, heading: Heading) {
    stamp_template(grid, x, y, GLIDER, heading.into());
}

/// Stamp the Gosper glider gun through the generic glyph stamper
pub fn add_glider_gun(grid: &mut Grid, x: i64, y: i64, reflection: Reflection) {
    add_entity(grid, x, y, GLIDER_GUN, reflection);
}
