mod cell;
mod grid;
mod rules;
mod patterns;

pub use cell::Cell;
pub use grid::Grid;
pub use rules::{Rule, ConwayRule, Generation, advance, advance_with};
pub use patterns::{
    Pattern, PatternCategory, PatternLibrary, presets, scale_to_fit,
    SCALE_THRESHOLD, LARGE_PATTERN_EXTENT, TILE_SPACING, TILE_COPIES, UPSCALE_FACTOR,
};
