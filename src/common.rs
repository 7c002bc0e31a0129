//! Common types shared across the crate: action vocabulary, shot outcomes
//! and the error taxonomy.

use crate::ship::ShipClass;

/// Result of resolving one cell of any attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// The cell held an intact ship segment; it is now hit.
    Hit,
    /// The cell was open water; it is now marked.
    Miss,
    /// The cell had already been resolved. No state change.
    AlreadyResolved,
}

/// Axis of a line sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

/// How much of a tracking grid is shown to the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealMode {
    /// Show both hits and misses.
    HitsAndMisses,
    /// Show hits only, concealing misses.
    HitsOnly,
}

/// One turn's move. Coordinates are 0-indexed and in bounds by the time an
/// action reaches the resolution layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Fire { row: usize, col: usize },
    RadarScan { row: usize, col: usize },
    SmokeScreen { row: usize, col: usize },
    ArtilleryStrike { row: usize, col: usize },
    /// Spends the one-shot torpedo on a full row or column.
    TorpedoShot { axis: Axis, index: usize },
    /// Free follow-up sweep run by the scripted opponent's pursuit; not part
    /// of the player-facing move vocabulary and never charged to the armory.
    PursuitSweep { axis: Axis, index: usize },
}

/// How an action resolved against the target board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Shot {
        row: usize,
        col: usize,
        outcome: ShotOutcome,
    },
    Salvo {
        cells: Vec<((usize, usize), ShotOutcome)>,
    },
    Sweep {
        axis: Axis,
        index: usize,
        cells: Vec<((usize, usize), ShotOutcome)>,
        any_hit: bool,
    },
    Contact {
        row: usize,
        col: usize,
        detected: bool,
    },
    Screen {
        row: usize,
        col: usize,
    },
}

/// Resolution of one turn plus the ships it newly sank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub resolution: Resolution,
    /// Classes sunk by this action, each reported exactly once per match.
    pub sunk: Vec<ShipClass>,
}

/// Errors returned by board and armory operations. All of these are locally
/// recoverable: a rejected action leaves state unchanged and the caller may
/// retry or choose differently.
#[derive(Debug, PartialEq, Eq)]
pub enum GameError {
    /// Coordinate outside the grid, rejected before any mutation.
    OutOfBounds { row: usize, col: usize },
    /// Placement collides with an already-occupied cell.
    Overlap,
    /// Ship index outside the fleet table.
    InvalidShipIndex,
    /// Attempted to place a ship that is already on the board.
    ShipAlreadyPlaced,
    /// One-shot weapon used before its unlock condition holds.
    NotUnlocked,
    /// Charge-limited weapon requested with zero charges left.
    NoChargesRemaining,
    /// Random placement exceeded its attempt bound; the board is redrawn.
    AutoPlacementExhausted,
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::OutOfBounds { row, col } => {
                write!(f, "Coordinate out of bounds: row={}, col={}", row, col)
            }
            GameError::Overlap => write!(f, "Placement overlaps another ship"),
            GameError::InvalidShipIndex => write!(f, "Ship index is out of range"),
            GameError::ShipAlreadyPlaced => write!(f, "Ship is already placed on the board"),
            GameError::NotUnlocked => write!(f, "Weapon is not unlocked"),
            GameError::NoChargesRemaining => write!(f, "No charges remaining"),
            GameError::AutoPlacementExhausted => {
                write!(f, "Automatic placement ran out of attempts")
            }
        }
    }
}
