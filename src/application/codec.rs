//! Text encodings for saved simulations and exchanged patterns.
//!
//! Saved state is a JSON object
//! `{"grid": [[0,1,..],..], "size": N, "generation": g, "population": p,
//! "birthCount": b, "deathCount": d}`; a pattern is a bare JSON matrix of
//! 0/1 rows cropped to the live cells' bounding box.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{SimulationState, Snapshot};
use crate::domain::{Cell, Grid, Pattern};
use crate::error::LifeError;

/// Name given to patterns produced by [`import_pattern`].
pub const IMPORTED_PATTERN_NAME: &str = "imported";

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SavedState {
    grid: Vec<Vec<u8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    size: Option<usize>,
    #[serde(default)]
    generation: u64,
    #[serde(default)]
    population: u64,
    #[serde(default)]
    birth_count: u64,
    #[serde(default)]
    death_count: u64,
}

/// Encode the grid and every counter of `state`
pub fn serialize_full(state: &SimulationState) -> Result<String, LifeError> {
    let snapshot = state.snapshot();
    let saved = SavedState {
        grid: snapshot.grid.to_rows(),
        size: Some(snapshot.grid.size()),
        generation: snapshot.generation,
        population: snapshot.population,
        birth_count: snapshot.birth_count,
        death_count: snapshot.death_count,
    };
    Ok(serde_json::to_string(&saved)?)
}

/// Decode text produced by [`serialize_full`].
///
/// Missing counters load as zero. The population is always recounted from
/// the grid, and `size` may be omitted when the grid itself is square.
pub fn deserialize_full(text: &str) -> Result<Snapshot, LifeError> {
    let saved: SavedState = serde_json::from_str(text)?;

    let size = saved.size.unwrap_or(saved.grid.len());
    if size == 0 {
        return Err(LifeError::Parse("grid is empty".into()));
    }
    if saved.grid.len() != size {
        return Err(LifeError::Parse(format!(
            "size is {size} but the grid has {} rows",
            saved.grid.len()
        )));
    }
    if let Some(idx) = saved.grid.iter().position(|row| row.len() != size) {
        return Err(LifeError::Parse(format!(
            "row {idx} has {} cells, expected {size}",
            saved.grid[idx].len()
        )));
    }

    let cells = saved
        .grid
        .iter()
        .flatten()
        .map(|&bit| Cell::from_bit(bit).ok_or_else(|| LifeError::Parse(format!("cell value {bit} is not 0 or 1"))))
        .collect::<Result<Vec<_>, _>>()?;
    let grid = Grid::from_cells(size, cells)?;

    Ok(Snapshot {
        population: grid.live_count() as u64,
        grid,
        generation: saved.generation,
        birth_count: saved.birth_count,
        death_count: saved.death_count,
    })
}

/// Crop `grid` to the bounding box of its live cells and encode it.
/// Returns `None` when there is nothing alive to export.
pub fn export_pattern(grid: &Grid) -> Result<Option<String>, LifeError> {
    let bounds = grid
        .iter_cells()
        .filter(|(_, _, cell)| cell.is_alive())
        .fold(None, |acc: Option<(usize, usize, usize, usize)>, (r, c, _)| {
            Some(match acc {
                None => (r, r, c, c),
                Some((min_r, max_r, min_c, max_c)) => (min_r.min(r), max_r.max(r), min_c.min(c), max_c.max(c)),
            })
        });

    let Some((min_r, max_r, min_c, max_c)) = bounds else {
        return Ok(None);
    };

    let rows: Vec<Vec<u8>> = (min_r..=max_r)
        .map(|r| {
            (min_c..=max_c)
                .map(|c| grid.get(r, c).map_or(0, Cell::as_bit))
                .collect()
        })
        .collect();

    Ok(Some(serde_json::to_string(&rows)?))
}

/// Parse a JSON matrix into a pattern named [`IMPORTED_PATTERN_NAME`].
///
/// Any value other than `1` reads as dead. Input that is not a non-empty
/// list of non-empty, equally long rows is rejected.
pub fn import_pattern(text: &str) -> Result<Pattern, LifeError> {
    let value: Value = serde_json::from_str(text)?;

    let Value::Array(rows) = value else {
        return Err(LifeError::InvalidPattern("expected a list of rows".into()));
    };
    if rows.is_empty() {
        return Err(LifeError::InvalidPattern("pattern has no rows".into()));
    }

    let matrix = rows
        .iter()
        .enumerate()
        .map(|(idx, row)| match row {
            Value::Array(cells) => Ok(cells
                .iter()
                .map(|v| u8::from(v.as_f64() == Some(1.0)))
                .collect::<Vec<u8>>()),
            _ => Err(LifeError::InvalidPattern(format!("row {idx} is not a list"))),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Pattern::from_rows(IMPORTED_PATTERN_NAME, &matrix)
}
