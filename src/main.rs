use log::{error, info};
use macroquad::prelude::*;
use torus_life::{
    Driver, FileStore, SimulationConfig,
    input, rendering, ui,
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: 900,
        window_height: 720,
        window_resizable: true,
        ..Default::default()
    }
}

/// Configuration from the JSON file named by the first argument, if any
fn load_config() -> SimulationConfig {
    let Some(path) = std::env::args().nth(1) else {
        return SimulationConfig::default();
    };
    SimulationConfig::from_file(&path).unwrap_or_else(|e| {
        error!("Ignoring config {path}: {e}");
        SimulationConfig::default()
    })
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let config = load_config();
    let mut store = FileStore::new(config.save_path.clone());
    let mut pattern_store = FileStore::new(config.pattern_path.clone());
    let mut driver = match Driver::from_config(&config) {
        Ok(driver) => driver,
        Err(e) => {
            error!("Invalid configuration: {e}");
            return;
        }
    };
    info!(
        "Started {0}x{0} grid with {1} (saves to {2})",
        config.size,
        config.pattern,
        store.path().display()
    );

    loop {
        let mouse_pos = mouse_position();

        // Recreate buttons with current panel position
        let buttons = ui::create_buttons();

        let commands = input::button_commands(&buttons, mouse_pos)
            .into_iter()
            .chain(input::keyboard_commands());
        for command in commands {
            input::execute(&mut driver, &mut store, &mut pattern_store, command);
        }
        input::handle_cell_click(&mut driver, mouse_pos);

        driver.tick(get_frame_time());

        clear_background(BLACK);
        rendering::draw_grid(driver.state().grid());
        rendering::draw_controls(&driver, &buttons, mouse_pos);

        next_frame().await;
    }
}
