//! Single-player Battleship simulation.
//!
//! A deterministic 10×10 game environment with random non-adjacent ship
//! placement and a four-valued observable cell model, plus two automated
//! players that pick attacks from the observation alone: a run-length
//! targeting heuristic and a diagonal-sweep explorer.

mod common;
mod config;
mod env;
mod grid;
mod logging;
mod mask;
mod policy;
mod search;
mod ship;
mod sweep;

pub use common::*;
pub use config::*;
pub use env::*;
pub use grid::*;
pub use logging::init_logging;
pub use mask::BitGrid;
pub use policy::*;
pub use search::SearchBot;
pub use ship::*;
pub use sweep::SweepBot;
