//! Pattern library and entity stamping

pub mod entity;
pub mod library;
pub mod orientation;
pub mod placement;

pub use entity::{add_entity, Pattern, LIVE_GLYPH};
pub use library::{
    add_beehive, add_blinker, add_block, add_boat, add_glider, add_glider_gun, add_toad,
};
pub use orientation::{Heading, Mirror, Reflection};
pub use placement::{apply_all, Entity, Placement};
