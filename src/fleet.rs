//! The fixed four-ship fleet of one combatant and its sink bookkeeping.

use crate::common::GameError;
use crate::config::{FLEET, NUM_SHIPS};
use crate::grid::Grid;
use crate::ship::{Orientation, Ship, ShipClass};

/// Registry of one combatant's ships, indexed by the fleet table.
///
/// Tracks which ships have been placed and which sinkings have already been
/// announced, so each loss is reported exactly once.
pub struct Fleet {
    ships: [Option<Ship>; NUM_SHIPS],
    announced: [bool; NUM_SHIPS],
}

impl Fleet {
    /// Create a fleet with no ships placed.
    pub fn new() -> Self {
        Fleet {
            ships: core::array::from_fn(|_| None),
            announced: [false; NUM_SHIPS],
        }
    }

    pub fn ship(&self, index: usize) -> Option<&Ship> {
        self.ships.get(index).and_then(|slot| slot.as_ref())
    }

    /// Iterator over the placed ships.
    pub fn ships(&self) -> impl Iterator<Item = &Ship> {
        self.ships.iter().filter_map(|slot| slot.as_ref())
    }

    /// True once every ship in the fleet table is on the board.
    pub fn is_complete(&self) -> bool {
        self.ships.iter().all(|slot| slot.is_some())
    }

    /// Place the ship at `index` of the fleet table and stamp its occupancy
    /// onto `grid`. Bounds and overlap are rejected before any mutation;
    /// adjacency is not checked here (automatic placement enforces that rule
    /// separately, manual placement allows touching fleets).
    pub fn place(
        &mut self,
        grid: &mut Grid,
        index: usize,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<(), GameError> {
        if index >= NUM_SHIPS {
            return Err(GameError::InvalidShipIndex);
        }
        if self.ships[index].is_some() {
            return Err(GameError::ShipAlreadyPlaced);
        }
        let ship = Ship::new(FLEET[index], orientation, row, col)?;
        if ship.cells().iter().any(|&(r, c)| grid.is_ship(r, c)) {
            return Err(GameError::Overlap);
        }
        for &(r, c) in ship.cells() {
            grid.add_ship_cell(r, c)?;
        }
        self.ships[index] = Some(ship);
        Ok(())
    }

    /// Scan for ships whose sunk condition became true and has not been
    /// announced yet. Marks them announced and returns their classes.
    pub fn newly_sunk(&mut self, grid: &Grid) -> Vec<ShipClass> {
        let mut sunk = Vec::new();
        for (i, slot) in self.ships.iter().enumerate() {
            if let Some(ship) = slot {
                if !self.announced[i] && ship.is_sunk(grid) {
                    self.announced[i] = true;
                    sunk.push(ship.class());
                }
            }
        }
        sunk
    }

    /// Number of ships already reported sunk.
    pub fn sunk_count(&self) -> usize {
        self.announced.iter().filter(|&&a| a).count()
    }

    /// Clear all placements. Used when automatic placement redraws the board.
    pub fn reset(&mut self) {
        self.ships = core::array::from_fn(|_| None);
        self.announced = [false; NUM_SHIPS];
    }
}

impl Default for Fleet {
    fn default() -> Self {
        Self::new()
    }
}
