use std::time::Duration;

use log::{debug, info, warn};

use super::{SimulationState, codec};
use crate::config::SimulationConfig;
use crate::domain::SCALE_THRESHOLD;
use crate::error::LifeError;
use crate::storage::StateStore;

/// Highest selectable speed.
pub const MAX_SPEED: u8 = 10;

/// Driver paces a [`SimulationState`] from the outside: it owns the tick
/// cadence, the run/stop decision and the currently selected pattern.
/// Every mutating command stops a running simulation first.
pub struct Driver {
    state: SimulationState,
    speed: u8,
    density: f64,
    selected_pattern: String,
    update_timer: f32,
}

impl Driver {
    /// Build a driver from configuration and place the configured pattern.
    /// Fails with [`LifeError::NotFound`] if that pattern is not in the library.
    pub fn from_config(config: &SimulationConfig) -> Result<Self, LifeError> {
        let mut driver = Self {
            state: SimulationState::new(config.size)?,
            speed: config.speed.min(MAX_SPEED),
            density: config.density,
            selected_pattern: config.pattern.clone(),
            update_timer: 0.0,
        };
        let pattern = driver.selected_pattern.clone();
        driver.apply_pattern(&pattern)?;
        Ok(driver)
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut SimulationState {
        &mut self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn speed(&self) -> u8 {
        self.speed
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    pub fn selected_pattern(&self) -> &str {
        &self.selected_pattern
    }

    /// Time between generations; `None` while paused at speed 0.
    ///
    /// Speed 1 is roughly two seconds, speed 10 roughly a tenth of that;
    /// grids above the scaling threshold get 20% more time per generation.
    pub fn interval(&self) -> Option<Duration> {
        if self.speed == 0 {
            return None;
        }
        let mut millis = (2000.0 / 1.35_f64.powi(i32::from(self.speed))).round();
        if self.state.size() > SCALE_THRESHOLD {
            millis *= 1.2;
        }
        Some(Duration::from_millis(millis.round() as u64))
    }

    /// Change speed (clamped to 0..=10); speed 0 also stops the simulation
    pub fn set_speed(&mut self, speed: u8) {
        self.speed = speed.min(MAX_SPEED);
        if self.speed == 0 && self.is_running() {
            self.stop();
        }
        debug!("Speed set to {} ({:?} per generation)", self.speed, self.interval());
    }

    /// Start running; refused when nothing is alive
    pub fn start(&mut self) -> bool {
        if !self.state.has_living_cells() {
            warn!("Cannot start: no living cells");
            return false;
        }
        self.state.set_running(true);
        self.update_timer = 0.0;
        info!("Simulation started at generation {}", self.state.statistics().generation);
        true
    }

    pub fn stop(&mut self) {
        if self.is_running() {
            info!("Simulation stopped at generation {}", self.state.statistics().generation);
        }
        self.state.set_running(false);
        self.update_timer = 0.0;
    }

    /// Play/pause; returns whether the simulation is now running
    pub fn toggle(&mut self) -> bool {
        if self.is_running() {
            self.stop();
            false
        } else {
            self.start()
        }
    }

    /// Feed elapsed wall time in seconds; advances at most one generation.
    /// Returns whether a generation was computed.
    pub fn tick(&mut self, delta_time: f32) -> bool {
        if !self.is_running() {
            return false;
        }
        let Some(interval) = self.interval() else {
            return false;
        };

        self.update_timer += delta_time;
        if self.update_timer < interval.as_secs_f32() {
            return false;
        }
        self.update_timer = 0.0;

        if !self.state.advance_generation() {
            info!("Simulation stopped - no living cells");
            self.stop();
        }
        true
    }

    /// Advance exactly one generation, running or not
    pub fn step(&mut self) -> bool {
        let alive = self.state.advance_generation();
        if !alive {
            self.stop();
        }
        alive
    }

    pub fn clear(&mut self) {
        self.stop();
        self.state.clear();
    }

    /// Randomize at the configured density
    pub fn randomize(&mut self) {
        self.randomize_with_density(self.density);
    }

    pub fn randomize_with_density(&mut self, density: f64) {
        self.stop();
        self.density = density.clamp(0.0, 1.0);
        self.state.randomize(self.density);
        debug!("Randomized with {}% density", (self.density * 100.0).round());
    }

    /// Select and place a pattern. An unknown name leaves an empty grid and
    /// is reported as [`LifeError::NotFound`].
    pub fn apply_pattern(&mut self, name: &str) -> Result<(), LifeError> {
        self.stop();
        self.selected_pattern = name.to_owned();
        if self.state.apply_pattern(name) {
            Ok(())
        } else {
            warn!("Unknown pattern: {name}");
            Err(LifeError::NotFound(name.to_owned()))
        }
    }

    /// Cycle the selection through the library in listing order
    pub fn apply_next_pattern(&mut self) -> bool {
        let names = self.state.pattern_names();
        let next = names
            .iter()
            .position(|&n| n == self.selected_pattern)
            .map_or(0, |idx| (idx + 1) % names.len());
        let Some(name) = names.get(next).map(|n| n.to_string()) else {
            return false;
        };
        self.apply_pattern(&name).is_ok()
    }

    /// Resize and re-apply the selected pattern; returns the old size
    pub fn resize(&mut self, size: usize) -> Result<usize, LifeError> {
        self.stop();
        let previous = self.state.resize(size)?;
        let pattern = self.selected_pattern.clone();
        self.state.apply_pattern(&pattern);
        info!("Grid size changed from {previous} to {size}");
        Ok(previous)
    }

    /// Serialize the current state into `store`
    pub fn save(&self, store: &mut dyn StateStore) -> Result<(), LifeError> {
        let blob = codec::serialize_full(&self.state)?;
        store.save(&blob)?;
        info!("Game state saved");
        Ok(())
    }

    /// Restore from `store`; `Ok(false)` when nothing was saved
    pub fn load(&mut self, store: &dyn StateStore) -> Result<bool, LifeError> {
        let Some(blob) = store.load()? else {
            warn!("No saved game state found");
            return Ok(false);
        };
        let snapshot = codec::deserialize_full(&blob)?;
        self.stop();
        self.state.restore(snapshot);
        info!("Game state loaded ({}x{})", self.state.size(), self.state.size());
        Ok(true)
    }

    /// Bounding-boxed live cells as text, `None` when the grid is empty
    pub fn export_pattern(&self) -> Result<Option<String>, LifeError> {
        codec::export_pattern(self.state.grid())
    }

    /// Parse a pattern and place it centred without scaling
    pub fn import_pattern(&mut self, text: &str) -> Result<(), LifeError> {
        let pattern = codec::import_pattern(text)?;
        self.stop();
        self.state.place_pattern(&pattern);
        Ok(())
    }
}
