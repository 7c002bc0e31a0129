//! Blocking console collaborator: prompting, parsing and grid rendering.

use std::io::{self, Write};

use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::{Action, Axis, GameError, Resolution, RevealMode, ShotOutcome, TurnReport};
use crate::config::{FLEET, GRID_SIZE, NUM_SHIPS};
use crate::grid::Grid;
use crate::placement;
use crate::player::Player;
use crate::progression::Progression;
use crate::ship::Orientation;

/// Console-driven player. Blocks on stdin until a structurally valid value
/// is produced; the match loop never sees malformed input.
pub struct CliPlayer {
    reveal: RevealMode,
    auto_place: bool,
}

impl CliPlayer {
    pub fn new(reveal: RevealMode, auto_place: bool) -> Self {
        CliPlayer { reveal, auto_place }
    }
}

pub fn coord_to_string(row: usize, col: usize) -> String {
    let letter = (b'A' + col as u8) as char;
    format!("{}{}", letter, row + 1)
}

/// Parse a coordinate such as `B3`: column letter then 1-indexed row.
pub fn parse_coord(input: &str) -> Option<(usize, usize)> {
    if input.len() < 2 {
        return None;
    }
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let col = (col_ch as u8).wrapping_sub(b'A') as usize;
    let row: usize = chars.collect::<String>().trim().parse().ok()?;
    if col >= GRID_SIZE || row == 0 || row > GRID_SIZE {
        return None;
    }
    Some((row - 1, col))
}

fn parse_column(input: &str) -> Option<usize> {
    let ch = input.trim().chars().next()?.to_ascii_uppercase();
    let col = (ch as u8).wrapping_sub(b'A') as usize;
    (col < GRID_SIZE).then_some(col)
}

fn prompt(label: &str) -> String {
    print!("{}", label);
    io::stdout().flush().unwrap();
    let mut line = String::new();
    io::stdin().read_line(&mut line).unwrap();
    line.trim().to_string()
}

fn prompt_coord(label: &str) -> (usize, usize) {
    loop {
        let line = prompt(label);
        if let Some(coord) = parse_coord(&line) {
            return coord;
        }
        println!("Invalid coordinate. Use a column letter A-J and a row 1-10, e.g. B3.");
    }
}

fn prompt_lane() -> (Axis, usize) {
    loop {
        let line = prompt("Axis (R for row, C for column): ").to_ascii_uppercase();
        match line.as_str() {
            "R" => loop {
                let row = prompt("Row (1-10): ");
                match row.parse::<usize>() {
                    Ok(n) if (1..=GRID_SIZE).contains(&n) => return (Axis::Row, n - 1),
                    _ => println!("Invalid row."),
                }
            },
            "C" => loop {
                let col = prompt("Column (A-J): ");
                match parse_column(&col) {
                    Some(c) => return (Axis::Column, c),
                    None => println!("Invalid column."),
                }
            },
            _ => println!("Enter R or C."),
        }
    }
}

fn column_header() {
    print!("   ");
    for c in 0..GRID_SIZE {
        print!(" {}", (b'A' + c as u8) as char);
    }
    println!();
}

/// Render a combatant's own grid: ships revealed, hits and misses marked.
pub fn print_own_board(grid: &Grid) {
    column_header();
    for r in 0..GRID_SIZE {
        print!("{:2} ", r + 1);
        for c in 0..GRID_SIZE {
            let ch = if grid.hits().get(r, c).unwrap_or(false) {
                'X'
            } else if grid.misses().get(r, c).unwrap_or(false) {
                'o'
            } else if grid.ships().get(r, c).unwrap_or(false) {
                'S'
            } else {
                '.'
            };
            print!(" {}", ch);
        }
        println!();
    }
}

/// Render the view of an opponent grid. Ships are never shown; misses are
/// concealed too when the mode says hits-only.
pub fn print_tracking_board(grid: &Grid, mode: RevealMode) {
    column_header();
    for r in 0..GRID_SIZE {
        print!("{:2} ", r + 1);
        for c in 0..GRID_SIZE {
            let ch = if grid.hits().get(r, c).unwrap_or(false) {
                'X'
            } else if mode == RevealMode::HitsAndMisses && grid.misses().get(r, c).unwrap_or(false)
            {
                'o'
            } else {
                '.'
            };
            print!(" {}", ch);
        }
        println!();
    }
}

fn print_armory(progression: &Progression) {
    print!(
        "Radar charges: {}   Smoke charges: {}",
        progression.radar_charges(),
        progression.smoke_charges()
    );
    if progression.artillery_ready() {
        print!("   Artillery ready ({} turn(s) left)", progression.artillery_timer());
    }
    if progression.torpedo_ready() {
        print!("   Torpedo ready ({} turn(s) left)", progression.torpedo_timer());
    }
    println!();
}

fn describe_outcome(outcome: ShotOutcome) -> &'static str {
    match outcome {
        ShotOutcome::Hit => "Hit!",
        ShotOutcome::Miss => "Miss.",
        ShotOutcome::AlreadyResolved => "Already resolved.",
    }
}

fn describe_lane(axis: Axis, index: usize) -> String {
    match axis {
        Axis::Row => format!("row {}", index + 1),
        Axis::Column => format!("column {}", (b'A' + index as u8) as char),
    }
}

impl Player for CliPlayer {
    fn place_fleet(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), GameError> {
        if self.auto_place {
            placement::auto_place_fleet(rng, board)?;
            println!("Fleet deployed automatically.");
            print_own_board(board.grid());
            return Ok(());
        }

        println!("Place your ships, e.g. B3 H. Press enter for a random spot.");
        for index in 0..NUM_SHIPS {
            let class = FLEET[index];
            loop {
                print_own_board(board.grid());
                let line = prompt(&format!(
                    "Place {} (size {}): ",
                    class.name(),
                    class.length()
                ));
                if line.is_empty() {
                    match placement::random_placement(rng, board.grid(), class.length()) {
                        Ok((row, col, orientation)) => {
                            board.place_ship(index, row, col, orientation)?;
                            break;
                        }
                        Err(e) => {
                            println!("Error: {}", e);
                            continue;
                        }
                    }
                }
                let mut parts = line.split_whitespace();
                let coord = parts.next().and_then(parse_coord);
                let orientation = parts.next().map(|p| {
                    if p.eq_ignore_ascii_case("v") {
                        Orientation::Vertical
                    } else {
                        Orientation::Horizontal
                    }
                });
                if let (Some((row, col)), Some(orientation)) = (coord, orientation) {
                    match board.place_ship(index, row, col, orientation) {
                        Ok(()) => break,
                        Err(e) => println!("Error: {}", e),
                    }
                } else {
                    println!("Invalid input. Use a coordinate and H or V, e.g. B3 H.");
                }
            }
        }
        Ok(())
    }

    fn select_action(
        &mut self,
        _rng: &mut SmallRng,
        own: &Board,
        progression: &Progression,
        enemy: &Grid,
    ) -> Action {
        println!("\nEnemy waters:");
        print_tracking_board(enemy, self.reveal);
        println!("\nYour fleet:");
        print_own_board(own.grid());
        print_armory(progression);

        loop {
            let token = prompt("Move (FIRE / RADAR / SMOKE / ARTILLERY / TORPEDO): ")
                .to_ascii_uppercase();
            match token.as_str() {
                "FIRE" => {
                    let (row, col) = prompt_coord("Target: ");
                    return Action::Fire { row, col };
                }
                "RADAR" => {
                    let (row, col) = prompt_coord("Scan origin: ");
                    return Action::RadarScan { row, col };
                }
                "SMOKE" => {
                    let (row, col) = prompt_coord("Screen origin (on your own grid): ");
                    return Action::SmokeScreen { row, col };
                }
                "ARTILLERY" => {
                    let (row, col) = prompt_coord("Strike origin: ");
                    return Action::ArtilleryStrike { row, col };
                }
                "TORPEDO" => {
                    let (axis, index) = prompt_lane();
                    return Action::TorpedoShot { axis, index };
                }
                _ => println!("Unknown move."),
            }
        }
    }

    fn action_rejected(&mut self, _action: &Action, err: &GameError) {
        println!("Rejected: {}", err);
    }

    fn observe_own(&mut self, _action: &Action, report: &TurnReport) {
        match &report.resolution {
            Resolution::Shot { row, col, outcome } => {
                println!(
                    "You fired at {} -> {}",
                    coord_to_string(*row, *col),
                    describe_outcome(*outcome)
                );
            }
            Resolution::Salvo { cells } => {
                println!("Artillery strike:");
                for ((row, col), outcome) in cells {
                    println!(
                        "  {} -> {}",
                        coord_to_string(*row, *col),
                        describe_outcome(*outcome)
                    );
                }
            }
            Resolution::Sweep {
                axis,
                index,
                any_hit,
                ..
            } => {
                println!(
                    "Torpedo sweep along {} -> {}",
                    describe_lane(*axis, *index),
                    if *any_hit { "Hit!" } else { "nothing." }
                );
            }
            Resolution::Contact { row, col, detected } => {
                if *detected {
                    println!("Radar contact near {}!", coord_to_string(*row, *col));
                } else {
                    println!("Radar reports nothing near {}.", coord_to_string(*row, *col));
                }
            }
            Resolution::Screen { row, col } => {
                println!("Smoke screen laid around {}.", coord_to_string(*row, *col));
            }
        }
        for class in &report.sunk {
            println!("You sank the enemy {}!", class.name());
        }
    }

    fn observe_incoming(&mut self, _action: &Action, report: &TurnReport) {
        match &report.resolution {
            Resolution::Shot { row, col, outcome } => {
                println!(
                    "Enemy fired at {} -> {}",
                    coord_to_string(*row, *col),
                    describe_outcome(*outcome)
                );
            }
            Resolution::Salvo { cells } => {
                println!("Enemy artillery strike on {} cell(s).", cells.len());
            }
            Resolution::Sweep { axis, index, .. } => {
                println!(
                    "Enemy torpedo sweeps {}.",
                    describe_lane(*axis, *index)
                );
            }
            Resolution::Contact { .. } => {
                println!("Enemy radar sweeps your waters.");
            }
            Resolution::Screen { .. } => {
                println!("The enemy lays a smoke screen.");
            }
        }
        for class in &report.sunk {
            println!("Your {} was sunk!", class.name());
        }
    }

    fn match_over(&mut self, won: bool) {
        if won {
            println!("\nVictory! You have sunk the enemy fleet.");
        } else {
            println!("\nDefeat. Your fleet has been destroyed.");
        }
    }
}
