//! The seam between the match loop and whatever produces moves.

use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::{Action, GameError, TurnReport};
use crate::grid::Grid;
use crate::progression::Progression;

/// Interface implemented by move-producing collaborators: the console
/// player and the scripted opponent. Calls block until a value is produced;
/// re-prompting on malformed input is the collaborator's job, so the match
/// loop only ever sees structurally valid actions.
pub trait Player {
    /// Put the whole fleet on the board before the match begins.
    fn place_fleet(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), GameError>;

    /// Produce this turn's action. `enemy` is the opponent's grid.
    fn select_action(
        &mut self,
        rng: &mut SmallRng,
        own: &Board,
        progression: &Progression,
        enemy: &Grid,
    ) -> Action;

    /// The armory rejected the action; a replacement will be requested.
    fn action_rejected(&mut self, _action: &Action, _err: &GameError) {}

    /// Result of this combatant's own action.
    fn observe_own(&mut self, _action: &Action, _report: &TurnReport) {}

    /// Result of the opponent's action against this combatant's board.
    fn observe_incoming(&mut self, _action: &Action, _report: &TurnReport) {}

    /// The match ended; `won` says whether this combatant took it.
    fn match_over(&mut self, _won: bool) {}
}
