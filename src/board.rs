//! One combatant's board: grid, fleet and smoke screen together.

use crate::common::GameError;
use crate::fleet::Fleet;
use crate::grid::{Grid, SmokeScreen};
use crate::ship::{Orientation, ShipClass};

/// Everything a combatant owns on the water. Created once at match start and
/// persisting in shape until the match ends; only cell marks and concealment
/// durations mutate.
pub struct Board {
    grid: Grid,
    fleet: Fleet,
    smoke: SmokeScreen,
}

impl Board {
    pub fn new() -> Self {
        Board {
            grid: Grid::new(),
            fleet: Fleet::new(),
            smoke: SmokeScreen::new(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn smoke(&self) -> &SmokeScreen {
        &self.smoke
    }

    pub fn smoke_mut(&mut self) -> &mut SmokeScreen {
        &mut self.smoke
    }

    /// Place one ship of the fleet table; see [`Fleet::place`].
    pub fn place_ship(
        &mut self,
        index: usize,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<(), GameError> {
        self.fleet.place(&mut self.grid, index, row, col, orientation)
    }

    /// True once the whole fleet is on the board.
    pub fn is_ready(&self) -> bool {
        self.fleet.is_complete()
    }

    /// Ships newly sunk since the last scan; announce-once semantics.
    pub fn newly_sunk(&mut self) -> Vec<ShipClass> {
        self.fleet.newly_sunk(&self.grid)
    }

    /// Redraw support: return the board to empty water with no placements.
    pub fn reset(&mut self) {
        self.grid.reset();
        self.fleet.reset();
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
