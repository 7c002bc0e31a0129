//! Placement validation and automatic fleet placement.
//!
//! The bounds/overlap check is shared by manual and automatic placement.
//! The adjacency rule is enforced only by automatic placement: manually
//! placed fleets may touch. The two paths stay separate on purpose.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::board::Board;
use crate::common::GameError;
use crate::config::{FLEET, GRID_SIZE, NUM_SHIPS, PLACEMENT_ATTEMPTS};
use crate::grid::{CellState, Grid};
use crate::ship::Orientation;

fn cell_at(row: usize, col: usize, orientation: Orientation, i: usize) -> (usize, usize) {
    match orientation {
        Orientation::Horizontal => (row, col + i),
        Orientation::Vertical => (row + i, col),
    }
}

/// True iff all `len` cells from the origin along the axis lie in bounds
/// and are open water.
pub fn can_place(grid: &Grid, row: usize, col: usize, len: usize, orientation: Orientation) -> bool {
    let fits = match orientation {
        Orientation::Horizontal => row < GRID_SIZE && col + len <= GRID_SIZE,
        Orientation::Vertical => col < GRID_SIZE && row + len <= GRID_SIZE,
    };
    if !fits {
        return false;
    }
    (0..len).all(|i| {
        let (r, c) = cell_at(row, col, orientation, i);
        matches!(grid.state(r, c), Ok(CellState::Water))
    })
}

/// True iff any 8-neighbor of any would-be-occupied cell already holds a
/// ship segment. Consulted only by automatic placement.
pub fn touches_ship(
    grid: &Grid,
    row: usize,
    col: usize,
    len: usize,
    orientation: Orientation,
) -> bool {
    for i in 0..len {
        let (r, c) = cell_at(row, col, orientation, i);
        for dr in -1isize..=1 {
            for dc in -1isize..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let (nr, nc) = (r as isize + dr, c as isize + dc);
                if nr < 0 || nc < 0 {
                    continue;
                }
                if grid.is_ship(nr as usize, nc as usize) {
                    return true;
                }
            }
        }
    }
    false
}

/// Roll a random non-overlapping, non-touching placement for a ship of
/// `len` cells. The origin range is clipped so the ship always fits, the
/// orientation is a coin flip. Gives up with `AutoPlacementExhausted` after
/// the configured attempt bound.
pub fn random_placement(
    rng: &mut SmallRng,
    grid: &Grid,
    len: usize,
) -> Result<(usize, usize, Orientation), GameError> {
    for _ in 0..PLACEMENT_ATTEMPTS {
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let max_row = match orientation {
            Orientation::Vertical => GRID_SIZE - len,
            Orientation::Horizontal => GRID_SIZE - 1,
        };
        let max_col = match orientation {
            Orientation::Horizontal => GRID_SIZE - len,
            Orientation::Vertical => GRID_SIZE - 1,
        };
        let row = rng.random_range(0..=max_row);
        let col = rng.random_range(0..=max_col);
        if can_place(grid, row, col, len, orientation)
            && !touches_ship(grid, row, col, len, orientation)
        {
            return Ok((row, col, orientation));
        }
    }
    Err(GameError::AutoPlacementExhausted)
}

/// Place the whole fleet automatically. When a ship runs out of attempts the
/// board is redrawn from scratch, so an unlucky sequence of rolls never
/// leaves a half-placed fleet or surfaces as a fatal error.
pub fn auto_place_fleet(rng: &mut SmallRng, board: &mut Board) -> Result<(), GameError> {
    loop {
        match try_place_all(rng, board) {
            Ok(()) => return Ok(()),
            Err(GameError::AutoPlacementExhausted) => {
                log::debug!("automatic placement exhausted its attempts; redrawing the board");
                board.reset();
            }
            Err(e) => return Err(e),
        }
    }
}

fn try_place_all(rng: &mut SmallRng, board: &mut Board) -> Result<(), GameError> {
    for index in 0..NUM_SHIPS {
        let (row, col, orientation) = random_placement(rng, board.grid(), FLEET[index].length())?;
        board.place_ship(index, row, col, orientation)?;
    }
    Ok(())
}
