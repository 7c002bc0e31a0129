//! Match orchestration: turn order, timer decay and win detection.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::board::Board;
use crate::common::{Action, GameError, Resolution, TurnReport};
use crate::player::Player;
use crate::progression::Progression;
use crate::weapons;

/// One side of the match: a name, everything it owns on the water, its
/// armory state and whatever produces its moves.
pub struct Combatant {
    name: String,
    board: Board,
    progression: Progression,
    player: Box<dyn Player>,
}

impl Combatant {
    pub fn new(name: impl Into<String>, player: Box<dyn Player>) -> Self {
        Combatant {
            name: name.into(),
            board: Board::new(),
            progression: Progression::new(),
            player,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access, for arranging fleets outside the usual
    /// placement flow.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn progression(&self) -> &Progression {
        &self.progression
    }
}

/// The synchronous turn loop. Exactly one combatant's state mutates per
/// turn, and every attack resolves against the opponent's board.
pub struct MatchEngine {
    combatants: [Combatant; 2],
    turns: u32,
}

impl MatchEngine {
    pub fn new(first: Combatant, second: Combatant) -> Self {
        MatchEngine {
            combatants: [first, second],
            turns: 0,
        }
    }

    pub fn combatants(&self) -> &[Combatant; 2] {
        &self.combatants
    }

    /// Turns resolved so far.
    pub fn turns_played(&self) -> u32 {
        self.turns
    }

    /// Let each combatant that has not already arranged a fleet place one.
    pub fn place_fleets(&mut self, rng: &mut SmallRng) -> Result<(), GameError> {
        for combatant in &mut self.combatants {
            let Combatant { player, board, .. } = combatant;
            if !board.is_ready() {
                player.place_fleet(rng, board)?;
            }
        }
        Ok(())
    }

    /// Drive the match to completion and return the winner's name.
    pub fn run(&mut self, rng: &mut SmallRng) -> Result<String, GameError> {
        self.place_fleets(rng)?;

        let mut active = usize::from(rng.random_bool(0.5));
        log::info!("{} has the first move", self.combatants[active].name());

        loop {
            let (attacker, defender) = split_pair(&mut self.combatants, active);
            attacker.progression.begin_turn();
            attacker.board.smoke_mut().decay();

            let Combatant {
                name,
                board: own_board,
                progression,
                player,
            } = attacker;

            // A rejected action leaves all state unchanged; the collaborator
            // is told why and asked again.
            let action = loop {
                let candidate =
                    player.select_action(rng, own_board, progression, defender.board.grid());
                match commit_economy(progression, &candidate) {
                    Ok(()) => break candidate,
                    Err(err) => player.action_rejected(&candidate, &err),
                }
            };

            let resolution = resolve(&action, own_board, &mut defender.board)?;
            let sunk = defender.board.newly_sunk();
            for _ in &sunk {
                progression.record_kill();
            }

            self.turns += 1;
            log::info!(
                "turn {}: {} -> {:?}; defender has {} cell(s) afloat",
                self.turns,
                name,
                action,
                defender.board.grid().afloat_cells()
            );

            let report = TurnReport { resolution, sunk };
            player.observe_own(&action, &report);
            defender.player.observe_incoming(&action, &report);

            if defender.board.grid().all_ships_sunk() {
                let winner = name.clone();
                player.match_over(true);
                defender.player.match_over(false);
                log::info!("{} wins after {} turn(s)", winner, self.turns);
                return Ok(winner);
            }
            active ^= 1;
        }
    }
}

fn split_pair(combatants: &mut [Combatant; 2], active: usize) -> (&mut Combatant, &mut Combatant) {
    let (left, right) = combatants.split_at_mut(1);
    if active == 0 {
        (&mut left[0], &mut right[0])
    } else {
        (&mut right[0], &mut left[0])
    }
}

/// Armory bookkeeping for the chosen action. Plain fire and the scripted
/// opponent's pursuit sweep cost nothing.
fn commit_economy(progression: &mut Progression, action: &Action) -> Result<(), GameError> {
    match action {
        Action::Fire { .. } | Action::PursuitSweep { .. } => Ok(()),
        Action::RadarScan { .. } => progression.spend_radar(),
        Action::SmokeScreen { .. } => progression.spend_smoke(),
        Action::ArtilleryStrike { .. } => progression.spend_artillery(),
        Action::TorpedoShot { .. } => progression.spend_torpedo(),
    }
}

/// Resolve a committed action. Everything targets the defender's board
/// except the smoke screen, which shrouds the attacker's own waters.
fn resolve(action: &Action, own: &mut Board, enemy: &mut Board) -> Result<Resolution, GameError> {
    match *action {
        Action::Fire { row, col } => {
            let outcome = weapons::fire(enemy.grid_mut(), row, col)?;
            Ok(Resolution::Shot { row, col, outcome })
        }
        Action::ArtilleryStrike { row, col } => Ok(Resolution::Salvo {
            cells: weapons::artillery_strike(enemy.grid_mut(), row, col)?,
        }),
        Action::TorpedoShot { axis, index } | Action::PursuitSweep { axis, index } => {
            let report = weapons::torpedo_sweep(enemy.grid_mut(), axis, index)?;
            Ok(Resolution::Sweep {
                axis,
                index,
                cells: report.cells,
                any_hit: report.any_hit,
            })
        }
        Action::RadarScan { row, col } => {
            let detected = weapons::radar_scan(enemy.grid(), enemy.smoke(), row, col);
            Ok(Resolution::Contact { row, col, detected })
        }
        Action::SmokeScreen { row, col } => {
            weapons::deploy_smoke(own.smoke_mut(), row, col);
            Ok(Resolution::Screen { row, col })
        }
    }
}
