//! Weapon resolution against a target grid.
//!
//! This layer mutates cell marks and concealment only. Whether a combatant
//! may use a weapon at all (charges, unlock timers, kill gates) is decided
//! by the match loop and the scripted opponent, never here.

use crate::common::{Axis, GameError, ShotOutcome};
use crate::config::{GRID_SIZE, STRIKE_SPAN};
use crate::grid::{CellState, Grid, SmokeScreen};

/// Resolve a single shot. An intact segment becomes a hit, open water a
/// miss; a previously resolved cell stays untouched and yields no new
/// information.
pub fn fire(grid: &mut Grid, row: usize, col: usize) -> Result<ShotOutcome, GameError> {
    match grid.state(row, col)? {
        CellState::Ship => {
            grid.mark_hit(row, col)?;
            Ok(ShotOutcome::Hit)
        }
        CellState::Water => {
            grid.mark_miss(row, col)?;
            Ok(ShotOutcome::Miss)
        }
        CellState::Hit | CellState::Miss => Ok(ShotOutcome::AlreadyResolved),
    }
}

/// The square footprint anchored at (row, col), clipped to the board. At an
/// edge the block shrinks to 1×2, 2×1 or a single cell.
fn clipped_block(row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
    let rows = row..(row + STRIKE_SPAN).min(GRID_SIZE);
    rows.flat_map(move |r| (col..(col + STRIKE_SPAN).min(GRID_SIZE)).map(move |c| (r, c)))
}

/// Shell every cell of the clipped block anchored at (row, col). Each cell
/// resolves independently, exactly as [`fire`] would.
pub fn artillery_strike(
    grid: &mut Grid,
    row: usize,
    col: usize,
) -> Result<Vec<((usize, usize), ShotOutcome)>, GameError> {
    let mut cells = Vec::new();
    for (r, c) in clipped_block(row, col) {
        cells.push(((r, c), fire(grid, r, c)?));
    }
    Ok(cells)
}

/// Per-cell outcomes of a line sweep plus whether anything was hit.
#[derive(Debug, Clone)]
pub struct SweepReport {
    pub cells: Vec<((usize, usize), ShotOutcome)>,
    pub any_hit: bool,
}

/// Sweep an entire row or column, resolving every cell as [`fire`] would.
pub fn torpedo_sweep(grid: &mut Grid, axis: Axis, index: usize) -> Result<SweepReport, GameError> {
    if index >= GRID_SIZE {
        return Err(match axis {
            Axis::Row => GameError::OutOfBounds { row: index, col: 0 },
            Axis::Column => GameError::OutOfBounds { row: 0, col: index },
        });
    }
    let mut cells = Vec::with_capacity(GRID_SIZE);
    let mut any_hit = false;
    for i in 0..GRID_SIZE {
        let (r, c) = match axis {
            Axis::Row => (index, i),
            Axis::Column => (i, index),
        };
        let outcome = fire(grid, r, c)?;
        any_hit |= outcome == ShotOutcome::Hit;
        cells.push(((r, c), outcome));
    }
    Ok(SweepReport { cells, any_hit })
}

/// True iff any cell of the clipped block holds an intact ship segment with
/// no concealment left. Scouting only: nothing is marked.
pub fn radar_scan(grid: &Grid, smoke: &SmokeScreen, row: usize, col: usize) -> bool {
    clipped_block(row, col).any(|(r, c)| grid.is_ship(r, c) && smoke.is_clear(r, c))
}

/// Conceal the clipped block anchored at (row, col). The block does not
/// need to contain ships.
pub fn deploy_smoke(smoke: &mut SmokeScreen, row: usize, col: usize) {
    for (r, c) in clipped_block(row, col) {
        smoke.shroud(r, c);
    }
}
