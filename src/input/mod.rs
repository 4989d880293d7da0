use log::{error, info, warn};
use macroquad::prelude::*;

use crate::application::Driver;
use crate::storage::StateStore;
use crate::ui::{Button, GRID_SIZES, cell_size, grid_area_height, grid_area_width};

/// Everything the viewer can ask of the driver
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    TogglePlay,
    Step,
    Clear,
    Randomize,
    NextPattern,
    SpeedUp,
    SpeedDown,
    Resize(usize),
    Save,
    Load,
    ExportPattern,
    ImportPattern,
}

/// Commands triggered by keys pressed this frame
pub fn keyboard_commands() -> Vec<Command> {
    let mut bindings = vec![
        (KeyCode::Space, Command::TogglePlay),
        (KeyCode::N, Command::Step),
        (KeyCode::C, Command::Clear),
        (KeyCode::R, Command::Randomize),
        (KeyCode::P, Command::NextPattern),
        (KeyCode::Up, Command::SpeedUp),
        (KeyCode::Equal, Command::SpeedUp),
        (KeyCode::Down, Command::SpeedDown),
        (KeyCode::Minus, Command::SpeedDown),
        (KeyCode::S, Command::Save),
        (KeyCode::L, Command::Load),
        (KeyCode::E, Command::ExportPattern),
        (KeyCode::I, Command::ImportPattern),
    ];
    let size_keys = [KeyCode::Key1, KeyCode::Key2, KeyCode::Key3];
    bindings.extend(size_keys.iter().zip(GRID_SIZES).map(|(&key, &size)| (key, Command::Resize(size))));

    bindings
        .into_iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .map(|(_, command)| command)
        .collect()
}

/// Commands triggered by panel buttons clicked this frame
pub fn button_commands(buttons: &[(Button, Command)], mouse_pos: (f32, f32)) -> Vec<Command> {
    buttons
        .iter()
        .filter(|(button, _)| button.is_clicked(mouse_pos))
        .map(|(_, command)| *command)
        .collect()
}

/// Map a screen position to a grid cell, if it lands on the grid
pub fn screen_to_cell(mouse_pos: (f32, f32), grid_size: usize, cell: f32) -> Option<(usize, usize)> {
    if mouse_pos.0 < 0.0 || mouse_pos.1 < 0.0 || cell <= 0.0 {
        return None;
    }
    let col = (mouse_pos.0 / cell) as usize;
    let row = (mouse_pos.1 / cell) as usize;
    (row < grid_size && col < grid_size).then_some((row, col))
}

/// Toggle the clicked cell while paused
pub fn handle_cell_click(driver: &mut Driver, mouse_pos: (f32, f32)) {
    if driver.is_running()
        || !is_mouse_button_pressed(MouseButton::Left)
        || mouse_pos.0 >= grid_area_width()
        || mouse_pos.1 >= grid_area_height()
    {
        return;
    }

    let size = driver.state().size();
    if let Some((row, col)) = screen_to_cell(mouse_pos, size, cell_size(size)) {
        driver.state_mut().toggle_cell(row, col);
    }
}

/// Run one command against the driver. Saved states go to `store`,
/// exported and imported patterns to `pattern_store`.
pub fn execute(
    driver: &mut Driver,
    store: &mut dyn StateStore,
    pattern_store: &mut dyn StateStore,
    command: Command,
) {
    match command {
        Command::TogglePlay => {
            driver.toggle();
        }
        Command::Step => {
            driver.step();
        }
        Command::Clear => driver.clear(),
        Command::Randomize => driver.randomize(),
        Command::NextPattern => {
            driver.apply_next_pattern();
        }
        Command::SpeedUp => driver.set_speed(driver.speed().saturating_add(1)),
        Command::SpeedDown => driver.set_speed(driver.speed().saturating_sub(1)),
        Command::Resize(size) => {
            if let Err(e) = driver.resize(size) {
                error!("Failed to resize grid: {e}");
            }
        }
        Command::Save => {
            if let Err(e) = driver.save(store) {
                error!("Failed to save game state: {e}");
            }
        }
        Command::Load => {
            if let Err(e) = driver.load(store) {
                error!("Failed to load game state: {e}");
            }
        }
        Command::ExportPattern => match driver.export_pattern() {
            Ok(Some(text)) => match pattern_store.save(&text) {
                Ok(()) => info!("Exported pattern"),
                Err(e) => error!("Failed to export pattern: {e}"),
            },
            Ok(None) => warn!("Nothing to export: the grid is empty"),
            Err(e) => error!("Failed to export pattern: {e}"),
        },
        Command::ImportPattern => match pattern_store.load() {
            Ok(Some(text)) => match driver.import_pattern(&text) {
                Ok(()) => info!("Imported pattern"),
                Err(e) => error!("Failed to import pattern: {e}"),
            },
            Ok(None) => warn!("No exported pattern to import"),
            Err(e) => error!("Failed to import pattern: {e}"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulationConfig;
    use crate::storage::MemoryStore;

    #[test]
    fn test_screen_to_cell() {
        assert_eq!(screen_to_cell((25.0, 5.0), 10, 10.0), Some((0, 2)));
        assert_eq!(screen_to_cell((99.9, 99.9), 10, 10.0), Some((9, 9)));
        assert_eq!(screen_to_cell((100.0, 5.0), 10, 10.0), None);
        assert_eq!(screen_to_cell((-1.0, 5.0), 10, 10.0), None);
    }

    #[test]
    fn test_execute_commands() {
        let mut driver = Driver::from_config(&SimulationConfig::default()).unwrap();
        let mut store = MemoryStore::default();
        let mut patterns = MemoryStore::default();

        execute(&mut driver, &mut store, &mut patterns, Command::SpeedUp);
        assert_eq!(driver.speed(), 6);
        execute(&mut driver, &mut store, &mut patterns, Command::Resize(20));
        assert_eq!(driver.state().size(), 20);
        execute(&mut driver, &mut store, &mut patterns, Command::Save);
        execute(&mut driver, &mut store, &mut patterns, Command::Clear);
        assert!(!driver.state().has_living_cells());
        execute(&mut driver, &mut store, &mut patterns, Command::Load);
        assert!(driver.state().has_living_cells());
    }

    #[test]
    fn test_export_then_import_pattern() {
        let config = SimulationConfig {
            size: 20,
            pattern: "toad".to_owned(),
            ..SimulationConfig::default()
        };
        let mut driver = Driver::from_config(&config).unwrap();
        let mut store = MemoryStore::default();
        let mut patterns = MemoryStore::default();

        // Importing before anything was exported leaves the grid alone
        execute(&mut driver, &mut store, &mut patterns, Command::ImportPattern);
        assert_eq!(driver.state().statistics().population, 6);

        execute(&mut driver, &mut store, &mut patterns, Command::ExportPattern);
        assert_eq!(patterns.load().unwrap().as_deref(), Some("[[0,1,1,1],[1,1,1,0]]"));

        execute(&mut driver, &mut store, &mut patterns, Command::Clear);
        execute(&mut driver, &mut store, &mut patterns, Command::ImportPattern);
        assert_eq!(driver.state().statistics().population, 6);

        // An empty grid exports nothing and keeps the previous export
        execute(&mut driver, &mut store, &mut patterns, Command::Clear);
        execute(&mut driver, &mut store, &mut patterns, Command::ExportPattern);
        assert_eq!(patterns.load().unwrap().as_deref(), Some("[[0,1,1,1],[1,1,1,0]]"));
    }
}
