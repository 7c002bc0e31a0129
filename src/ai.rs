//! Scripted opponent targeting.
//!
//! A three-state machine over an externally owned memory record: random
//! hunting, adjacent-cell targeting around the last hit, and a forced
//! two-sweep pursuit after a follow-up hit. Expiring one-shot weapons
//! pre-empt all of it: an unlock about to lapse is spent on the spot.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::common::{Action, Axis, Resolution, ShotOutcome, TurnReport};
use crate::config::{GRID_SIZE, TORPEDO_UNLOCK_KILLS};
use crate::grid::Grid;
use crate::progression::Progression;

/// Targeting state. `Pursuit` sweeps the anchor column first, then the
/// anchor row if the column came up dry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Hunting,
    Targeting { last_hit: (usize, usize) },
    Pursuit { anchor: (usize, usize), column_swept: bool },
}

/// Targeting memory with the same lifetime as the match, passed in each
/// turn rather than kept as hidden internal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiMemory {
    mode: Mode,
}

impl AiMemory {
    pub fn new() -> Self {
        AiMemory { mode: Mode::Hunting }
    }

    /// True while a past hit is still being worked.
    pub fn is_tracking(&self) -> bool {
        self.mode != Mode::Hunting
    }
}

impl Default for AiMemory {
    fn default() -> Self {
        Self::new()
    }
}

/// Pick this turn's action against `enemy`.
pub fn choose_action(
    memory: &AiMemory,
    rng: &mut SmallRng,
    enemy: &Grid,
    own: &Progression,
) -> Action {
    // Use-it-or-lose-it: an unlock on its last usable turn is spent
    // immediately, pre-empting the targeting logic entirely.
    if own.artillery_timer() == 1 {
        let row = rng.random_range(0..GRID_SIZE - 1);
        let col = rng.random_range(0..GRID_SIZE - 1);
        return Action::ArtilleryStrike { row, col };
    }
    if own.torpedo_timer() == 1 && own.kills() >= TORPEDO_UNLOCK_KILLS {
        let axis = if rng.random() { Axis::Row } else { Axis::Column };
        let index = rng.random_range(0..GRID_SIZE);
        return Action::TorpedoShot { axis, index };
    }

    match memory.mode {
        Mode::Pursuit {
            anchor,
            column_swept: false,
        } => Action::PursuitSweep {
            axis: Axis::Column,
            index: anchor.1,
        },
        Mode::Pursuit {
            anchor,
            column_swept: true,
        } => Action::PursuitSweep {
            axis: Axis::Row,
            index: anchor.0,
        },
        Mode::Targeting { last_hit } => match intact_neighbor(enemy, last_hit) {
            Some((row, col)) => Action::Fire { row, col },
            // Nothing left next to the hit this turn; fall back to a fresh
            // random cell while keeping the hit remembered.
            None => {
                let (row, col) = random_unresolved(rng, enemy);
                Action::Fire { row, col }
            }
        },
        Mode::Hunting => {
            let (row, col) = random_unresolved(rng, enemy);
            Action::Fire { row, col }
        }
    }
}

/// Feed the turn's resolution back into the memory record.
pub fn observe(memory: &mut AiMemory, action: &Action, report: &TurnReport) {
    match (action, &report.resolution) {
        (Action::Fire { .. }, Resolution::Shot { row, col, outcome }) => match memory.mode {
            Mode::Hunting => {
                if *outcome == ShotOutcome::Hit {
                    memory.mode = Mode::Targeting {
                        last_hit: (*row, *col),
                    };
                }
            }
            Mode::Targeting { .. } => match outcome {
                ShotOutcome::Hit => {
                    memory.mode = Mode::Pursuit {
                        anchor: (*row, *col),
                        column_swept: false,
                    };
                }
                ShotOutcome::Miss => {
                    memory.mode = Mode::Hunting;
                }
                ShotOutcome::AlreadyResolved => {}
            },
            Mode::Pursuit { .. } => {}
        },
        (Action::PursuitSweep { .. }, Resolution::Sweep { any_hit, .. }) => match memory.mode {
            Mode::Pursuit {
                anchor,
                column_swept: false,
            } => {
                // A hit resolves the pursuit and forfeits the second sweep.
                memory.mode = if *any_hit {
                    Mode::Hunting
                } else {
                    Mode::Pursuit {
                        anchor,
                        column_swept: true,
                    }
                };
            }
            Mode::Pursuit {
                column_swept: true, ..
            } => {
                memory.mode = Mode::Hunting;
            }
            _ => {}
        },
        // Spent unlocks and scans do not move the targeting state.
        _ => {}
    }
}

/// First intact ship segment among the four orthogonal neighbors of the
/// last hit, probed in fixed order: up, down, left, right.
fn intact_neighbor(grid: &Grid, (row, col): (usize, usize)) -> Option<(usize, usize)> {
    const PROBES: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
    for (dr, dc) in PROBES {
        let (nr, nc) = (row as isize + dr, col as isize + dc);
        if nr < 0 || nc < 0 || nr as usize >= GRID_SIZE || nc as usize >= GRID_SIZE {
            continue;
        }
        if grid.is_ship(nr as usize, nc as usize) {
            return Some((nr as usize, nc as usize));
        }
    }
    None
}

/// Uniformly random cell that has not been shot at yet.
pub fn random_unresolved(rng: &mut SmallRng, grid: &Grid) -> (usize, usize) {
    let mut open = Vec::with_capacity(GRID_SIZE * GRID_SIZE);
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            if !grid.is_resolved(row, col) {
                open.push((row, col));
            }
        }
    }
    if open.is_empty() {
        // A live match always has intact (hence unresolved) cells; degrade
        // to the last cell rather than panic if called on a finished grid.
        return (GRID_SIZE - 1, GRID_SIZE - 1);
    }
    open[rng.random_range(0..open.len())]
}
