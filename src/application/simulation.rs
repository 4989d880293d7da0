use rand::Rng;

use crate::domain::{Cell, Grid, Pattern, PatternLibrary, advance, scale_to_fit};
use crate::error::LifeError;

/// Grid size used when no size is configured.
pub const DEFAULT_SIZE: usize = 40;

/// Counters derived for display. Rates are per generation, rounded to two
/// decimals, and zero before the first generation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Statistics {
    pub generation: u64,
    pub population: u64,
    pub birth_count: u64,
    pub death_count: u64,
    pub birth_rate: f64,
    pub death_rate: f64,
}

/// The persistable part of a simulation: grid plus counters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub grid: Grid,
    pub generation: u64,
    pub population: u64,
    pub birth_count: u64,
    pub death_count: u64,
}

/// SimulationState owns the grid and its statistics, and coordinates the
/// rule engine and pattern library.
///
/// `population` always equals the number of live cells in `grid`. Birth and
/// death totals only grow, except when the grid is replaced by clear,
/// randomize, pattern placement or resize.
#[derive(Clone, Debug)]
pub struct SimulationState {
    grid: Grid,
    generation: u64,
    population: u64,
    birth_count: u64,
    death_count: u64,
    running: bool,
    library: PatternLibrary,
}

impl SimulationState {
    /// Create an empty `size`×`size` simulation with the built-in patterns
    pub fn new(size: usize) -> Result<Self, LifeError> {
        Ok(Self {
            grid: Grid::new(size)?,
            generation: 0,
            population: 0,
            birth_count: 0,
            death_count: 0,
            running: false,
            library: PatternLibrary::with_presets(),
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The core never schedules ticks; this only records the caller's intent.
    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    pub fn library(&self) -> &PatternLibrary {
        &self.library
    }

    pub fn pattern_names(&self) -> Vec<&str> {
        self.library.names()
    }

    /// Add or replace a user pattern; returns the stored (whitespace-free) name
    pub fn register_pattern(&mut self, name: &str, matrix: &[Vec<u8>]) -> Result<String, LifeError> {
        self.library.register(name, matrix)
    }

    /// Swap in a new grid and zero every counter
    fn replace_grid(&mut self, grid: Grid) {
        self.population = grid.live_count() as u64;
        self.grid = grid;
        self.generation = 0;
        self.birth_count = 0;
        self.death_count = 0;
        self.running = false;
    }

    /// Replace the grid with an empty one of `new_size`; returns the old size
    pub fn resize(&mut self, new_size: usize) -> Result<usize, LifeError> {
        let grid = Grid::new(new_size)?;
        let previous = self.size();
        self.replace_grid(grid);
        Ok(previous)
    }

    /// Set one cell; out-of-range coordinates are ignored
    pub fn set_cell(&mut self, row: usize, col: usize, cell: Cell) {
        let Some(current) = self.grid.get(row, col) else {
            return;
        };
        match (current, cell) {
            (Cell::Dead, Cell::Alive) => self.population += 1,
            (Cell::Alive, Cell::Dead) => self.population -= 1,
            _ => {}
        }
        self.grid.set(row, col, cell);
    }

    /// Flip one cell; out-of-range coordinates are ignored
    pub fn toggle_cell(&mut self, row: usize, col: usize) {
        if let Some(current) = self.grid.get(row, col) {
            self.set_cell(row, col, current.toggle());
        }
    }

    /// Reset to an all-dead grid of the current size
    pub fn clear(&mut self) {
        let grid = self.grid.cleared();
        self.replace_grid(grid);
    }

    /// Randomize from the thread-local generator
    pub fn randomize(&mut self, density: f64) {
        self.randomize_with(density, &mut rand::rng());
    }

    /// Each cell becomes alive with probability `density`
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, density: f64, rng: &mut R) {
        let grid = self.grid.cleared().randomize(density, rng);
        self.replace_grid(grid);
    }

    /// Clear, then place the named pattern scaled for this grid's size.
    /// Returns `false` when no pattern has that name (the grid stays cleared).
    pub fn apply_pattern(&mut self, name: &str) -> bool {
        self.clear();
        let Some(pattern) = self.library.get(name) else {
            return false;
        };
        let scaled = scale_to_fit(pattern, self.grid.size()).into_owned();
        self.place_pattern(&scaled);
        true
    }

    /// Clear, then write `pattern` centred on the grid without scaling.
    /// Cells that fall outside the grid are dropped.
    pub fn place_pattern(&mut self, pattern: &Pattern) {
        self.clear();

        let center = (self.size() / 2) as isize;
        let (rows, cols) = pattern.dimensions();
        let top = center - (rows / 2) as isize;
        let left = center - (cols / 2) as isize;

        for (r, c, cell) in pattern.iter_cells() {
            let (row, col) = (top + r as isize, left + c as isize);
            if row >= 0 && col >= 0 {
                self.set_cell(row as usize, col as usize, cell);
            }
        }
        self.population = self.grid.live_count() as u64;
    }

    /// Advance one generation.
    ///
    /// When the result has no living cells the (dead) grid is still stored
    /// but the generation and birth/death totals are left alone, and `false`
    /// is returned so the caller can stop.
    pub fn advance_generation(&mut self) -> bool {
        let next = advance(&self.grid);
        self.grid = next.grid;

        if !next.any_alive {
            self.population = 0;
            return false;
        }

        self.generation += 1;
        self.birth_count += next.births;
        self.death_count += next.deaths;
        self.population = self.grid.live_count() as u64;
        true
    }

    pub fn statistics(&self) -> Statistics {
        let rate = |count: u64| {
            if self.generation == 0 {
                0.0
            } else {
                (count as f64 / self.generation as f64 * 100.0).round() / 100.0
            }
        };
        Statistics {
            generation: self.generation,
            population: self.population,
            birth_count: self.birth_count,
            death_count: self.death_count,
            birth_rate: rate(self.birth_count),
            death_rate: rate(self.death_count),
        }
    }

    /// Full scan for any live cell
    pub fn has_living_cells(&self) -> bool {
        self.grid.has_live_cells()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid: self.grid.clone(),
            generation: self.generation,
            population: self.population,
            birth_count: self.birth_count,
            death_count: self.death_count,
        }
    }

    /// Adopt a saved grid and counters; patterns and the running flag are kept.
    /// Population is recounted from the grid, never taken from the snapshot.
    pub fn restore(&mut self, snapshot: Snapshot) {
        self.grid = snapshot.grid;
        self.generation = snapshot.generation;
        self.population = self.grid.live_count() as u64;
        self.birth_count = snapshot.birth_count;
        self.death_count = snapshot.death_count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn live_cells(state: &SimulationState) -> Vec<(usize, usize)> {
        state
            .grid()
            .iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(r, c, _)| (r, c))
            .collect()
    }

    fn assert_population_consistent(state: &SimulationState) {
        assert_eq!(state.statistics().population, state.grid().live_count() as u64);
    }

    #[test]
    fn test_blinker_on_forty_flips_in_place() {
        let mut state = SimulationState::new(40).unwrap();
        assert!(state.apply_pattern("blinker"));
        assert_eq!(live_cells(&state), vec![(19, 20), (20, 20), (21, 20)]);

        assert!(state.advance_generation());
        assert_eq!(live_cells(&state), vec![(20, 19), (20, 20), (20, 21)]);

        let stats = state.statistics();
        assert_eq!(stats.generation, 1);
        assert_eq!(stats.population, 3);
        assert_eq!((stats.birth_count, stats.death_count), (2, 2));
        assert_eq!((stats.birth_rate, stats.death_rate), (2.0, 2.0));
    }

    #[test]
    fn test_empty_grid_does_not_advance() {
        let mut state = SimulationState::new(10).unwrap();
        assert!(!state.advance_generation());
        assert_eq!(state.statistics().generation, 0);
    }

    #[test]
    fn test_extinction_keeps_counters() {
        let mut state = SimulationState::new(10).unwrap();
        state.set_cell(5, 5, Cell::Alive);
        assert!(!state.advance_generation());

        let stats = state.statistics();
        assert_eq!((stats.generation, stats.birth_count, stats.death_count), (0, 0, 0));
        assert_eq!(stats.population, 0);
        assert!(!state.has_living_cells());
    }

    #[test]
    fn test_glider_on_sixty_is_doubled_and_centred() {
        let mut state = SimulationState::new(60).unwrap();
        assert!(state.apply_pattern("glider"));

        let cells = live_cells(&state);
        let min_r = cells.iter().map(|c| c.0).min().unwrap();
        let max_r = cells.iter().map(|c| c.0).max().unwrap();
        let min_c = cells.iter().map(|c| c.1).min().unwrap();
        let max_c = cells.iter().map(|c| c.1).max().unwrap();

        assert_eq!((max_r - min_r + 1, max_c - min_c + 1), (6, 6));
        let center_r = (min_r + max_r) as f64 / 2.0;
        let center_c = (min_c + max_c) as f64 / 2.0;
        assert!((center_r - 30.0).abs() <= 1.0);
        assert!((center_c - 30.0).abs() <= 1.0);
        assert_eq!(state.statistics().population, 20);
    }

    #[test]
    fn test_randomize_extremes() {
        let mut state = SimulationState::new(12).unwrap();
        state.randomize(0.0);
        assert_eq!(state.statistics().population, 0);

        state.randomize(1.0);
        assert_eq!(state.statistics().population, 144);
        assert_population_consistent(&state);
    }

    #[test]
    fn test_randomize_resets_counters() {
        let mut state = SimulationState::new(20).unwrap();
        state.apply_pattern("toad");
        state.advance_generation();
        assert_eq!(state.statistics().generation, 1);

        state.randomize_with(0.3, &mut StdRng::seed_from_u64(42));
        let stats = state.statistics();
        assert_eq!((stats.generation, stats.birth_count, stats.death_count), (0, 0, 0));
        assert_population_consistent(&state);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut state = SimulationState::new(15).unwrap();
        state.randomize_with(0.5, &mut StdRng::seed_from_u64(1));
        state.advance_generation();

        state.clear();
        let once = state.snapshot();
        state.clear();
        assert_eq!(state.snapshot(), once);
        assert_eq!(once.population, 0);
        assert_eq!(once.generation, 0);
    }

    #[test]
    fn test_cell_edits_track_population() {
        let mut state = SimulationState::new(5).unwrap();
        state.set_cell(1, 1, Cell::Alive);
        state.set_cell(1, 1, Cell::Alive);
        state.toggle_cell(2, 2);
        assert_eq!(state.statistics().population, 2);

        state.toggle_cell(2, 2);
        state.set_cell(1, 1, Cell::Dead);
        assert_eq!(state.statistics().population, 0);

        // Ignored, not an error
        state.set_cell(5, 0, Cell::Alive);
        state.toggle_cell(0, 99);
        assert_eq!(state.statistics().population, 0);
    }

    #[test]
    fn test_resize_returns_previous_size() {
        let mut state = SimulationState::new(20).unwrap();
        state.apply_pattern("beacon");
        assert_eq!(state.resize(60).unwrap(), 20);
        assert_eq!(state.size(), 60);
        assert_eq!(state.statistics().population, 0);

        assert!(matches!(state.resize(0), Err(LifeError::InvalidDimension(0))));
        assert_eq!(state.size(), 60);
    }

    #[test]
    fn test_unknown_pattern_clears_grid() {
        let mut state = SimulationState::new(20).unwrap();
        state.apply_pattern("pulsar");
        assert!(!state.apply_pattern("nope"));
        assert!(!state.has_living_cells());
    }

    #[test]
    fn test_oversized_pattern_is_clipped() {
        let mut state = SimulationState::new(20).unwrap();
        assert!(state.apply_pattern("gosperGliderGun"));
        // 36 columns centred on a 20-wide grid loses its outer blocks
        assert!(state.statistics().population < 36);
        assert_population_consistent(&state);
    }

    #[test]
    fn test_user_patterns_are_listed_and_applied() {
        let mut state = SimulationState::new(10).unwrap();
        let name = state.register_pattern("my dot", &[vec![1]]).unwrap();
        assert_eq!(state.pattern_names().last(), Some(&"mydot"));

        assert!(state.apply_pattern(&name));
        assert_eq!(live_cells(&state), vec![(5, 5)]);
    }

    #[test]
    fn test_statistics_rates_round_to_two_places() {
        let mut state = SimulationState::new(20).unwrap();
        state.apply_pattern("glider");
        for _ in 0..3 {
            state.advance_generation();
        }
        let stats = state.statistics();
        assert_eq!(stats.generation, 3);
        let expected = (stats.birth_count as f64 / 3.0 * 100.0).round() / 100.0;
        assert_eq!(stats.birth_rate, expected);
    }

    #[test]
    fn test_restore_recounts_population() {
        let mut state = SimulationState::new(5).unwrap();
        state.restore(Snapshot {
            grid: Grid::new(5).unwrap(),
            generation: 3,
            population: 7,
            birth_count: 1,
            death_count: 1,
        });
        assert_eq!(state.statistics().population, 0);
        assert_eq!(state.statistics().generation, 3);

        let mut grid = Grid::new(5).unwrap();
        grid.set(0, 0, Cell::Alive);
        state.restore(Snapshot {
            grid,
            generation: 0,
            population: 0,
            birth_count: 0,
            death_count: 0,
        });
        assert_population_consistent(&state);
        // Killing the only live cell must not underflow the counter
        state.toggle_cell(0, 0);
        assert_eq!(state.statistics().population, 0);
        assert_population_consistent(&state);
    }
}
