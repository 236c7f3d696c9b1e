//! Core engine types: players, RNG, configuration, errors, constants.
//!
//! These are the building blocks every other module shares. Game rules live
//! in `rules`; the board lives in `board`.

pub mod constants;
pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use player::{Player, PlayerId, PlayerMap};
pub use rng::{GameRng, RandomSource, ScriptedRng};
pub use config::{GameConfig, Ruleset, SimulationConfig, MAX_PLAYERS};
pub use error::ConfigError;
