//! Scripted opponent bound to the player seam.

use rand::rngs::SmallRng;

use crate::ai::{self, AiMemory};
use crate::board::Board;
use crate::common::{Action, GameError, TurnReport};
use crate::grid::Grid;
use crate::placement;
use crate::player::Player;
use crate::progression::Progression;

/// Opponent driven by the targeting state machine. Its memory lives here,
/// created at match start and fed the outcome of every own turn.
pub struct AiPlayer {
    memory: AiMemory,
}

impl AiPlayer {
    pub fn new() -> Self {
        AiPlayer {
            memory: AiMemory::new(),
        }
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for AiPlayer {
    fn place_fleet(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), GameError> {
        placement::auto_place_fleet(rng, board)
    }

    fn select_action(
        &mut self,
        rng: &mut SmallRng,
        _own: &Board,
        progression: &Progression,
        enemy: &Grid,
    ) -> Action {
        ai::choose_action(&self.memory, rng, enemy, progression)
    }

    fn observe_own(&mut self, action: &Action, report: &TurnReport) {
        ai::observe(&mut self.memory, action, report);
    }
}
