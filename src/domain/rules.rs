use super::{Cell, Grid};

/// Trait for cellular automaton rules
pub trait Rule: Send + Sync {
    /// Apply rule to compute next cell state
    fn evolve(&self, current: Cell, neighbors: u8) -> Cell;
}

/// Conway's Game of Life (B3/S23)
/// The classic cellular automaton rules
#[derive(Clone, Copy, Debug, Default)]
pub struct ConwayRule;

impl Rule for ConwayRule {
    fn evolve(&self, current: Cell, neighbors: u8) -> Cell {
        match (current, neighbors) {
            (Cell::Alive, 2 | 3) => Cell::Alive,
            (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}

/// Result of one full pass over a grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generation {
    pub grid: Grid,
    pub births: u64,
    pub deaths: u64,
    pub any_alive: bool,
}

/// Advance one generation under Conway's rules.
pub fn advance(grid: &Grid) -> Generation {
    advance_with(grid, &ConwayRule)
}

/// Pure evolution: reads only `grid` and returns a freshly built successor,
/// tallying the dead->alive and alive->dead transitions on the way.
pub fn advance_with(grid: &Grid, rule: &dyn Rule) -> Generation {
    let mut births = 0;
    let mut deaths = 0;

    let cells: Vec<Cell> = grid
        .iter_cells()
        .map(|(row, col, current)| {
            let next = rule.evolve(current, grid.count_live_neighbors(row, col));
            match (current, next) {
                (Cell::Dead, Cell::Alive) => births += 1,
                (Cell::Alive, Cell::Dead) => deaths += 1,
                _ => {}
            }
            next
        })
        .collect();

    let any_alive = cells.iter().any(|cell| cell.is_alive());
    let grid = grid.successor(cells);

    Generation { grid, births, deaths, any_alive }
}
