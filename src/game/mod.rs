//! One game of Monopoly from setup to a single winner.
//!
//! - `state`: Board, players, counters, terminal record
//! - `engine`: The turn loop

pub mod engine;
pub mod state;

pub use engine::{simulate_game, Game};
pub use state::{GameResult, GameState, Milestone};
