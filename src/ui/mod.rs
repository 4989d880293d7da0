mod button;

pub use button::Button;

// UI constants - functions for responsive layout
use macroquad::prelude::{screen_width, screen_height};

use crate::input::Command;

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 36.0;
const BUTTON_GAP: f32 = 8.0;
const BUTTONS_TOP: f32 = 20.0;

/// Grid sizes reachable from the keyboard (1, 2, 3)
pub const GRID_SIZES: &[usize] = &[20, 40, 60];

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the grid area
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the height of the grid area
pub fn grid_area_height() -> f32 {
    screen_height()
}

/// Side of one square cell so the whole torus fits the grid area
pub fn cell_size(grid_size: usize) -> f32 {
    grid_area_width().min(grid_area_height()) / grid_size.max(1) as f32
}

/// Y coordinate just below the button column
pub fn buttons_bottom() -> f32 {
    BUTTONS_TOP + BUTTON_COMMANDS.len() as f32 * (BUTTON_HEIGHT + BUTTON_GAP)
}

/// Panel buttons, top to bottom
const BUTTON_COMMANDS: &[(&str, Command)] = &[
    ("Play/Pause", Command::TogglePlay),
    ("Step", Command::Step),
    ("Clear", Command::Clear),
    ("Random", Command::Randomize),
    ("Next Pattern", Command::NextPattern),
    ("Save", Command::Save),
    ("Load", Command::Load),
    ("Export", Command::ExportPattern),
    ("Import", Command::ImportPattern),
];

/// Create UI buttons with standard layout
pub fn create_buttons() -> Vec<(Button, Command)> {
    let px = panel_x();
    BUTTON_COMMANDS
        .iter()
        .enumerate()
        .map(|(idx, (label, command))| {
            let y = BUTTONS_TOP + idx as f32 * (BUTTON_HEIGHT + BUTTON_GAP);
            (Button::new(px, y, PANEL_WIDTH, BUTTON_HEIGHT, *label), *command)
        })
        .collect()
}
