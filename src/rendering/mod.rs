use macroquad::prelude::*;

use crate::application::Driver;
use crate::domain::Grid;
use crate::input::Command;
use crate::ui::{Button, PANEL_WIDTH, buttons_bottom, cell_size, panel_x};

/// Draw every cell of the torus, scaled to fill the grid area
pub fn draw_grid(grid: &Grid) {
    let cell = cell_size(grid.size());

    let alive_color = Color::from_rgba(0, 255, 150, 255); // Bright green
    let dead_color = Color::from_rgba(15, 15, 15, 255);
    let line_color = Color::from_rgba(40, 40, 40, 255);
    let draw_lines = cell >= 6.0;

    for (row, col, state) in grid.iter_cells() {
        let x = col as f32 * cell;
        let y = row as f32 * cell;
        let color = if state.is_alive() { alive_color } else { dead_color };
        draw_rectangle(x, y, cell, cell, color);
        if draw_lines {
            draw_rectangle_lines(x, y, cell, cell, 1.0, line_color);
        }
    }
}

/// Draw control panel background
fn draw_panel_background() {
    draw_rectangle(panel_x(), 0.0, PANEL_WIDTH, screen_height(), Color::from_rgba(30, 30, 30, 255));
}

/// Draw the control panel with buttons, statistics and key help
pub fn draw_controls(driver: &Driver, buttons: &[(Button, Command)], mouse_pos: (f32, f32)) {
    draw_panel_background();
    buttons.iter().for_each(|(btn, _)| btn.draw(mouse_pos));

    let px = panel_x() + 6.0;
    let top = buttons_bottom() + 10.0;
    let state = driver.state();
    let stats = state.statistics();
    let pattern_name = state
        .library()
        .get(driver.selected_pattern())
        .map_or_else(|| driver.selected_pattern().to_owned(), |p| p.display_name());
    let speed = match driver.interval() {
        Some(interval) => format!("{} ({} ms)", driver.speed(), interval.as_millis()),
        None => format!("{} (paused)", driver.speed()),
    };
    let (status, status_color) = if driver.is_running() {
        ("Running", Color::from_rgba(0, 255, 0, 255))
    } else {
        ("Paused", Color::from_rgba(255, 165, 0, 255))
    };
    let value_color = Color::from_rgba(180, 180, 180, 255);

    let lines = [
        ("Status:".to_owned(), 16.0, WHITE),
        (status.to_owned(), 16.0, status_color),
        (format!("Grid: {0}x{0}", state.size()), 14.0, value_color),
        (format!("Pattern: {pattern_name}"), 14.0, value_color),
        (format!("Speed: {speed}"), 14.0, value_color),
        (format!("Generation: {}", stats.generation), 14.0, WHITE),
        (format!("Population: {}", stats.population), 14.0, WHITE),
        (format!("Births: {}", stats.birth_count), 14.0, value_color),
        (format!("Deaths: {}", stats.death_count), 14.0, value_color),
        (format!("Birth rate: {:.2}", stats.birth_rate), 14.0, value_color),
        (format!("Death rate: {:.2}", stats.death_rate), 14.0, value_color),
        ("Keys:".to_owned(), 14.0, WHITE),
        ("Space play  N step".to_owned(), 12.0, GRAY),
        ("C clear  R random".to_owned(), 12.0, GRAY),
        ("P pattern  1/2/3 size".to_owned(), 12.0, GRAY),
        ("Up/Down speed".to_owned(), 12.0, GRAY),
        ("S save  L load".to_owned(), 12.0, GRAY),
        ("E export  I import".to_owned(), 12.0, GRAY),
        ("Click: toggle cell".to_owned(), 12.0, GRAY),
    ];

    lines.iter().enumerate().for_each(|(idx, (text, size, color))| {
        draw_text(text, px, top + idx as f32 * 18.0, *size, *color);
    });
}
