pub mod ai;
mod board;
mod common;
mod config;
mod fleet;
mod game;
mod grid;
mod logging;
mod mask;
pub mod placement;
mod player;
mod player_ai;
mod player_cli;
mod progression;
mod ship;
pub mod weapons;

pub use ai::AiMemory;
pub use board::*;
pub use common::*;
pub use config::*;
pub use fleet::*;
pub use game::*;
pub use grid::*;
pub use logging::init_logging;
pub use mask::{CellMask, SetCells};
pub use player::*;
pub use player_ai::*;
pub use player_cli::*;
pub use progression::*;
pub use ship::*;
