//! Declarative entity placements, as read from a scenario file

use super::{library, Heading, Pattern, Reflection};
use crate::game_of_life::Grid;
use serde::{Deserialize, Serialize};

/// Something that can be stamped onto a grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "pattern", rename_all = "snake_case")]
pub enum Entity {
    Block,
    Beehive,
    Boat,
    Blinker,
    Toad,
    Glider {
        #[serde(default)]
        heading: Heading,
    },
    GliderGun {
        #[serde(default)]
        reflection: Reflection,
    },
    /// Arbitrary glyph rows, `*` for live cells
    Custom {
        rows: Pattern,
        #[serde(default)]
        reflection: Reflection,
    },
}

impl Entity {
    pub fn name(&self) -> &'static str {
        match self {
            Entity::Block => "block",
            Entity::Beehive => "beehive",
            Entity::Boat => "boat",
            Entity::Blinker => "blinker",
            Entity::Toad => "toad",
            Entity::Glider { .. } => "glider",
            Entity::GliderGun { .. } => "glider_gun",
            Entity::Custom { .. } => "custom",
        }
    }

    /// Stamp the entity with its top-left corner at `(x, y)`
    pub fn stamp(&self, grid: &mut Grid, x: i64, y: i64) {
        match self {
            Entity::Block => library::add_block(grid, x, y),
            Entity::Beehive => library::add_beehive(grid, x, y),
            Entity::Boat => library::add_boat(grid, x, y),
            Entity::Blinker => library::add_blinker(grid, x, y),
            Entity::Toad => library::add_toad(grid, x, y),
            Entity::Glider { heading } => library::add_glider(grid, x, y, *heading),
            Entity::GliderGun { reflection } => library::add_glider_gun(grid, x, y, *reflection),
            Entity::Custom { rows, reflection } => rows.stamp(grid, x, y, *reflection),
        }
    }
}

/// An entity anchored at an origin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub x: i64,
    pub y: i64,
    #[serde(flatten)]
    pub entity: Entity,
}

impl Placement {
    pub fn new(x: i64, y: i64, entity: Entity) -> Self {
        Self { x, y, entity }
    }

    pub fn apply(&self, grid: &mut Grid) {
        self.entity.stamp(grid, self.x, self.y);
    }
}

/// Stamp every placement in order; later placements overwrite earlier ones
pub fn apply_all(grid: &mut Grid, placements: &[Placement]) {
    for placement in placements {
        placement.apply(grid);
    }
}
