//! # monopoly-sim
//!
//! A Monte Carlo engine for Monopoly house rules.
//!
//! Games are fully rule-determined: players never choose anything. Every
//! space is bought when affordable, declined spaces are optionally
//! auctioned, and rents rise on a fixed schedule so that every game ends
//! with a single survivor.
//!
//! ## Design Principles
//!
//! 1. **One game, one owner**: A `Game` owns its board, players, and random
//!    source. Nothing is shared between games, so batches run in parallel.
//!
//! 2. **Ids, not references**: Ownership is `Option<PlayerId>` on each
//!    space; eliminated players stay in place so ids remain stable.
//!
//! 3. **Injected randomness**: Rules draw only through `RandomSource`, so
//!    scenarios can script exact dice.
//!
//! ## Modules
//!
//! - `core`: Player ids, configuration, RNG, errors, constants
//! - `board`: The 40 spaces and ownership queries
//! - `rules`: Dice, rent, purchases and auctions, elimination
//! - `game`: Game state and the turn engine
//! - `simulation`: Parallel batches and bootstrap reports
//!
//! ## Example
//!
//! ```
//! use monopoly_sim::{simulate_batch, GameConfig};
//!
//! let config = GameConfig::new(4).with_free_parking_bonus(true);
//! let results = simulate_batch(&config, 8, 42).unwrap();
//!
//! assert_eq!(results.len(), 8);
//! assert!(results.iter().all(|r| r.winner.index() < 4));
//! ```

pub mod board;
pub mod core;
pub mod game;
pub mod rules;
pub mod simulation;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, GameConfig, GameRng, Player, PlayerId, PlayerMap, RandomSource, Ruleset,
    ScriptedRng, SimulationConfig,
};

pub use crate::board::{Board, BoardSpace, ColorGroup, SpaceKind};

pub use crate::game::{simulate_game, Game, GameResult, GameState, Milestone};

pub use crate::rules::Creditor;

pub use crate::simulation::{
    bootstrap, run_all, run_ruleset, simulate_batch, BootstrapSummary, RulesetReport, WinTally,
};
