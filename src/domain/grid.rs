use rand::Rng;

use super::Cell;
use crate::error::LifeError;

/// Grid manages the square, toroidal cell matrix.
/// Every generation produces a fresh grid; the previous one is never written
/// while it is being read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new `size`×`size` grid with all cells initially dead
    pub fn new(size: usize) -> Result<Self, LifeError> {
        if size == 0 {
            return Err(LifeError::InvalidDimension(size));
        }
        Ok(Self {
            size,
            cells: vec![Cell::Dead; size * size],
        })
    }

    /// Randomize every cell: alive with probability `density`.
    /// Densities outside [0, 1] degrade to all-dead or all-alive.
    pub fn randomize<R: Rng + ?Sized>(mut self, density: f64, rng: &mut R) -> Self {
        self.cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from(rng.random::<f64>() < density));
        self
    }

    /// Build a grid from a row-major cell vector of exactly `size * size` cells
    pub(crate) fn from_cells(size: usize, cells: Vec<Cell>) -> Result<Self, LifeError> {
        if size == 0 {
            return Err(LifeError::InvalidDimension(size));
        }
        if cells.len() != size * size {
            return Err(LifeError::Parse(format!(
                "expected {} cells for a {size}x{size} grid, found {}",
                size * size,
                cells.len()
            )));
        }
        Ok(Self { size, cells })
    }

    /// All-dead grid of the same size
    pub fn cleared(&self) -> Self {
        Self {
            size: self.size,
            cells: vec![Cell::Dead; self.cells.len()],
        }
    }

    /// Same-shaped grid holding the next generation's cells
    pub(super) fn successor(&self, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), self.cells.len());
        Self { size: self.size, cells }
    }

    /// Side length of the grid
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Convert 2D coordinates to 1D index
    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.size && col < self.size).then(|| self.cells[self.index(row, col)])
    }

    /// Set cell at position; out-of-range writes are dropped
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if row < self.size && col < self.size {
            let idx = self.index(row, col);
            self.cells[idx] = cell;
        }
    }

    /// Count live neighbors using toroidal wrapping (grid wraps like a torus)
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        let n = self.size as isize;

        (-1..=1)
            .flat_map(|dr| (-1..=1).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| dr != 0 || dc != 0)
            .map(|(dr, dc)| {
                let r = (row as isize + dr + n) % n;
                let c = (col as isize + dc + n) % n;
                self.cells[self.index(r as usize, c as usize)]
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Exact number of live cells (full scan)
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// True as soon as any live cell is found
    pub fn has_live_cells(&self) -> bool {
        self.cells.iter().any(|cell| cell.is_alive())
    }

    /// Iterate over all cells with their positions, row-major
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx / self.size, idx % self.size, cell))
    }

    /// Row-major 0/1 matrix view, used for persistence
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.size)
            .map(|row| row.iter().map(|cell| cell.as_bit()).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_zero_size_is_rejected() {
        assert!(matches!(Grid::new(0), Err(LifeError::InvalidDimension(0))));
    }

    #[test]
    fn test_new_grid_is_dead() {
        let grid = Grid::new(5).unwrap();
        assert_eq!(grid.size(), 5);
        assert_eq!(grid.live_count(), 0);
        assert!(!grid.has_live_cells());
        assert_eq!(grid.iter_cells().count(), 25);
    }

    #[test]
    fn test_out_of_range_access() {
        let mut grid = Grid::new(3).unwrap();
        assert_eq!(grid.get(3, 0), None);
        grid.set(0, 3, Cell::Alive);
        grid.set(7, 7, Cell::Alive);
        assert_eq!(grid.live_count(), 0);
    }

    #[test]
    fn test_corner_wraps_to_all_other_corners() {
        let n = 6;
        let mut grid = Grid::new(n).unwrap();
        grid.set(0, 0, Cell::Alive);

        assert_eq!(grid.count_live_neighbors(n - 1, n - 1), 1);
        assert_eq!(grid.count_live_neighbors(n - 1, 0), 1);
        assert_eq!(grid.count_live_neighbors(0, n - 1), 1);
        // A cell is never its own neighbor
        assert_eq!(grid.count_live_neighbors(0, 0), 0);
    }

    #[test]
    fn test_full_moore_neighborhood() {
        let mut grid = Grid::new(5).unwrap();
        for r in 1..=3 {
            for c in 1..=3 {
                grid.set(r, c, Cell::Alive);
            }
        }
        assert_eq!(grid.count_live_neighbors(2, 2), 8);
        assert_eq!(grid.count_live_neighbors(0, 0), 1);
        assert_eq!(grid.count_live_neighbors(1, 0), 2);
    }

    #[test]
    fn test_tiny_grid_counts_wrapped_cells_repeatedly() {
        // On a 1x1 torus every neighbor offset lands on the cell itself
        let mut grid = Grid::new(1).unwrap();
        grid.set(0, 0, Cell::Alive);
        assert_eq!(grid.count_live_neighbors(0, 0), 8);
    }

    #[test]
    fn test_random_density_extremes() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = Grid::new(8).unwrap();

        let empty = grid.clone().randomize(0.0, &mut rng);
        assert_eq!(empty.live_count(), 0);

        let full = grid.clone().randomize(1.0, &mut rng);
        assert_eq!(full.live_count(), 64);

        let saturated = grid.randomize(1.5, &mut rng);
        assert_eq!(saturated.live_count(), 64);
    }

    #[test]
    fn test_to_rows_matches_cells() {
        let mut grid = Grid::new(3).unwrap();
        grid.set(0, 2, Cell::Alive);
        grid.set(2, 1, Cell::Alive);
        assert_eq!(grid.to_rows(), vec![vec![0, 0, 1], vec![0, 0, 0], vec![0, 1, 0]]);
    }

    #[test]
    fn test_from_cells_checks_length() {
        assert!(Grid::from_cells(2, vec![Cell::Dead; 3]).is_err());
        assert!(Grid::from_cells(2, vec![Cell::Dead; 4]).is_ok());
    }
}
