//! Ship classes and placed ships.

use core::fmt;

use crate::common::GameError;
use crate::config::GRID_SIZE;
use crate::grid::{CellState, Grid};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Class of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipClass {
    name: &'static str,
    length: usize,
}

impl ShipClass {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// A ship placed on the board, holding the ordered coordinates it occupies.
/// Construction validates bounds, so the cell count always equals the
/// class length.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    class: ShipClass,
    orientation: Orientation,
    cells: Vec<(usize, usize)>,
}

impl Ship {
    /// Place a ship at (`row`, `col`) extending along `orientation`.
    pub fn new(
        class: ShipClass,
        orientation: Orientation,
        row: usize,
        col: usize,
    ) -> Result<Self, GameError> {
        let len = class.length();
        let fits = match orientation {
            Orientation::Horizontal => row < GRID_SIZE && col + len <= GRID_SIZE,
            Orientation::Vertical => col < GRID_SIZE && row + len <= GRID_SIZE,
        };
        if !fits {
            return Err(GameError::OutOfBounds { row, col });
        }

        let cells = (0..len)
            .map(|i| match orientation {
                Orientation::Horizontal => (row, col + i),
                Orientation::Vertical => (row + i, col),
            })
            .collect();

        Ok(Ship {
            class,
            orientation,
            cells,
        })
    }

    pub fn class(&self) -> ShipClass {
        self.class
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Occupied coordinates in placement order.
    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    /// Origin of the ship (row, col).
    pub fn origin(&self) -> (usize, usize) {
        self.cells[0]
    }

    pub fn occupies(&self, row: usize, col: usize) -> bool {
        self.cells.iter().any(|&cell| cell == (row, col))
    }

    /// A ship is sunk exactly when every occupied cell has been hit.
    pub fn is_sunk(&self, grid: &Grid) -> bool {
        self.cells
            .iter()
            .all(|&(r, c)| matches!(grid.state(r, c), Ok(CellState::Hit)))
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", origin: {:?}, orientation: {:?}, length: {} }}",
            self.class.name(),
            self.origin(),
            self.orientation,
            self.class.length(),
        )
    }
}
