use std::borrow::Cow;
use std::collections::HashMap;

use super::Cell;
use crate::error::LifeError;

/// Grids at or below this size receive patterns unchanged.
pub const SCALE_THRESHOLD: usize = 40;
/// A pattern with either dimension above this is already "large".
pub const LARGE_PATTERN_EXTENT: usize = 10;
/// Dead-cell gutter between tiled copies.
pub const TILE_SPACING: usize = 6;
/// Copies per axis when tiling a small pattern.
pub const TILE_COPIES: usize = 2;
/// Nearest-neighbour upscale factor for glider-shaped patterns.
pub const UPSCALE_FACTOR: usize = 2;

const CUSTOM_DESCRIPTION: &str = "Custom pattern created by user.";

/// How a pattern is adapted to large grids, decided once when the pattern
/// enters the library.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatternCategory {
    Glider,
    Oscillator,
    Gun,
    Custom,
}

/// Represents a named, rectangular 0/1 pattern that can be placed on the grid
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    name: String,
    description: String,
    category: PatternCategory,
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Pattern {
    /// Create a pattern from the coordinates of its alive cells inside a
    /// `rows`×`cols` box
    fn from_live_cells(
        name: &str,
        description: &str,
        category: PatternCategory,
        (rows, cols): (usize, usize),
        alive: &[(usize, usize)],
    ) -> Self {
        let mut cells = vec![Cell::Dead; rows * cols];
        for &(r, c) in alive {
            cells[r * cols + c] = Cell::Alive;
        }
        Self {
            name: name.to_owned(),
            description: description.to_owned(),
            category,
            rows,
            cols,
            cells,
        }
    }

    /// Build a custom pattern from a 0/1 matrix. Empty, jagged or non-binary
    /// input is rejected.
    pub fn from_rows(name: &str, matrix: &[Vec<u8>]) -> Result<Self, LifeError> {
        let cols = matrix.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(LifeError::InvalidPattern("pattern has no cells".into()));
        }
        if let Some(idx) = matrix.iter().position(|row| row.len() != cols) {
            return Err(LifeError::InvalidPattern(format!(
                "row {idx} has {} cells, expected {cols}",
                matrix[idx].len()
            )));
        }

        let cells = matrix
            .iter()
            .flatten()
            .map(|&bit| {
                Cell::from_bit(bit)
                    .ok_or_else(|| LifeError::InvalidPattern(format!("cell value {bit} is not 0 or 1")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            name: name.to_owned(),
            description: CUSTOM_DESCRIPTION.to_owned(),
            category: PatternCategory::Custom,
            rows: matrix.len(),
            cols,
            cells,
        })
    }

    /// Same metadata, new cell matrix
    fn reshaped(&self, rows: usize, cols: usize, cells: Vec<Cell>) -> Self {
        Self {
            name: self.name.clone(),
            description: self.description.clone(),
            category: self.category,
            rows,
            cols,
            cells,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> PatternCategory {
        self.category
    }

    /// (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.rows && col < self.cols).then(|| self.cells[row * self.cols + col])
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions, row-major
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx / self.cols, idx % self.cols, cell))
    }

    /// Row-major 0/1 matrix
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.cols)
            .map(|row| row.iter().map(|cell| cell.as_bit()).collect())
            .collect()
    }

    /// Human-readable title: "gosperGliderGun" becomes "Gosper Glider Gun"
    pub fn display_name(&self) -> String {
        let mut title = String::with_capacity(self.name.len() + 4);
        for (idx, ch) in self.name.chars().enumerate() {
            if idx == 0 {
                title.extend(ch.to_uppercase());
            } else {
                if ch.is_uppercase() {
                    title.push(' ');
                }
                title.push(ch);
            }
        }
        title.trim().to_owned()
    }

    fn is_large(&self) -> bool {
        self.rows > LARGE_PATTERN_EXTENT || self.cols > LARGE_PATTERN_EXTENT
    }

    /// Arrange `copies`×`copies` copies separated by `spacing` dead cells
    fn tiled(&self, copies: usize, spacing: usize) -> Self {
        let rows = self.rows * copies + spacing * (copies - 1);
        let cols = self.cols * copies + spacing * (copies - 1);
        let mut cells = vec![Cell::Dead; rows * cols];

        for copy_row in 0..copies {
            for copy_col in 0..copies {
                let top = copy_row * (self.rows + spacing);
                let left = copy_col * (self.cols + spacing);
                for (r, c, cell) in self.iter_cells() {
                    cells[(top + r) * cols + left + c] = cell;
                }
            }
        }

        self.reshaped(rows, cols, cells)
    }

    /// Nearest-neighbour upscale: every cell becomes a `factor`×`factor` block
    fn upscaled(&self, factor: usize) -> Self {
        let rows = self.rows * factor;
        let cols = self.cols * factor;
        let cells = (0..rows)
            .flat_map(|r| (0..cols).map(move |c| (r, c)))
            .map(|(r, c)| self.cells[(r / factor) * self.cols + c / factor])
            .collect();

        self.reshaped(rows, cols, cells)
    }
}

/// Adapt a pattern to a `target_size`×`target_size` grid.
///
/// Placement policy for large grids, so small shapes stay visible:
/// - grids up to [`SCALE_THRESHOLD`] keep every pattern as-is;
/// - patterns with a side above [`LARGE_PATTERN_EXTENT`] already fill the
///   space and are kept as-is;
/// - glider-tagged patterns are upscaled by [`UPSCALE_FACTOR`];
/// - every other small pattern is tiled 2×2 with [`TILE_SPACING`] gutters.
pub fn scale_to_fit(pattern: &Pattern, target_size: usize) -> Cow<'_, Pattern> {
    if target_size <= SCALE_THRESHOLD || pattern.is_large() {
        return Cow::Borrowed(pattern);
    }

    match pattern.category {
        PatternCategory::Glider => Cow::Owned(pattern.upscaled(UPSCALE_FACTOR)),
        PatternCategory::Oscillator | PatternCategory::Gun | PatternCategory::Custom => {
            Cow::Owned(pattern.tiled(TILE_COPIES, TILE_SPACING))
        }
    }
}

/// Named pattern store. Iteration follows insertion order: built-ins first,
/// then user patterns. Re-registering a name replaces it in place.
#[derive(Clone, Debug)]
pub struct PatternLibrary {
    patterns: Vec<Pattern>,
    index: HashMap<String, usize>,
}

impl PatternLibrary {
    /// An empty library
    pub fn new() -> Self {
        Self {
            patterns: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// A library holding every built-in pattern
    pub fn with_presets() -> Self {
        let mut library = Self::new();
        presets::all_patterns().into_iter().for_each(|p| library.insert(p));
        library
    }

    fn insert(&mut self, pattern: Pattern) {
        match self.index.get(pattern.name()) {
            Some(&slot) => self.patterns[slot] = pattern,
            None => {
                self.index.insert(pattern.name.clone(), self.patterns.len());
                self.patterns.push(pattern);
            }
        }
    }

    /// Insert or overwrite a user pattern. Whitespace is stripped from the
    /// name; the stored name is returned.
    pub fn register(&mut self, name: &str, matrix: &[Vec<u8>]) -> Result<String, LifeError> {
        let name: String = name.split_whitespace().collect();
        if name.is_empty() {
            return Err(LifeError::InvalidName);
        }

        let mut pattern = Pattern::from_rows(&name, matrix)?;
        if pattern.cells == presets::glider().cells && pattern.dimensions() == (3, 3) {
            pattern.category = PatternCategory::Glider;
        }

        self.insert(pattern);
        Ok(name)
    }

    pub fn get(&self, name: &str) -> Option<&Pattern> {
        self.index.get(name).map(|&slot| &self.patterns[slot])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Registered names in insertion order
    pub fn names(&self) -> Vec<&str> {
        self.patterns.iter().map(Pattern::name).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pattern> {
        self.patterns.iter()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Default for PatternLibrary {
    fn default() -> Self {
        Self::with_presets()
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::from_live_cells(
            "glider",
            "A glider that moves diagonally across the grid.",
            PatternCategory::Glider,
            (3, 3),
            &[
                (0, 2),
                (1, 0), (1, 2),
                (2, 1), (2, 2),
            ],
        )
    }

    /// Blinker - period 2 oscillator, vertical phase
    pub fn blinker() -> Pattern {
        Pattern::from_live_cells(
            "blinker",
            "A simple oscillator that alternates between horizontal and vertical states.",
            PatternCategory::Oscillator,
            (3, 3),
            &[(0, 1), (1, 1), (2, 1)],
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::from_live_cells(
            "toad",
            "A period-2 oscillator that appears to hop from side to side.",
            PatternCategory::Oscillator,
            (4, 4),
            &[
                (1, 1), (1, 2), (1, 3),
                (2, 0), (2, 1), (2, 2),
            ],
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::from_live_cells(
            "beacon",
            "A period-2 oscillator where two corners \"flash\" on and off.",
            PatternCategory::Oscillator,
            (4, 4),
            &[
                (0, 0), (0, 1),
                (1, 0), (1, 1),
                (2, 2), (2, 3),
                (3, 2), (3, 3),
            ],
        )
    }

    /// Pulsar - period 3 oscillator
    pub fn pulsar() -> Pattern {
        Pattern::from_live_cells(
            "pulsar",
            "A complex period-3 oscillator, one of the largest and most common oscillators.",
            PatternCategory::Oscillator,
            (13, 13),
            &[
                // Top
                (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
                // Upper middle
                (2, 0), (2, 5), (2, 7), (2, 12),
                (3, 0), (3, 5), (3, 7), (3, 12),
                (4, 0), (4, 5), (4, 7), (4, 12),
                // Center
                (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
                (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
                // Lower middle
                (8, 0), (8, 5), (8, 7), (8, 12),
                (9, 0), (9, 5), (9, 7), (9, 12),
                (10, 0), (10, 5), (10, 7), (10, 12),
                // Bottom
                (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
            ],
        )
    }

    /// Gosper Glider Gun - produces gliders indefinitely (period 30)
    pub fn glider_gun() -> Pattern {
        Pattern::from_live_cells(
            "gosperGliderGun",
            "Creates a continuous stream of gliders.",
            PatternCategory::Gun,
            (9, 36),
            &[
                (0, 24),
                (1, 22), (1, 24),
                (2, 12), (2, 13), (2, 20), (2, 21), (2, 34), (2, 35),
                (3, 11), (3, 15), (3, 20), (3, 21), (3, 34), (3, 35),
                (4, 0), (4, 1), (4, 10), (4, 16), (4, 20), (4, 21),
                (5, 0), (5, 1), (5, 10), (5, 14), (5, 16), (5, 17), (5, 22), (5, 24),
                (6, 10), (6, 16), (6, 24),
                (7, 11), (7, 15),
                (8, 12), (8, 13),
            ],
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            glider(),
            blinker(),
            toad(),
            beacon(),
            pulsar(),
            glider_gun(),
        ]
    }
}
