//! Game state: board, players, counters, and the terminal record.
//!
//! ## GameState
//!
//! Everything one game owns except its random source:
//! - The board with per-game holdings
//! - Players, indexed by stable `PlayerId`
//! - Whose turn it is, turns and laps elapsed, the current rent tier
//! - The first-purchase milestone and the winner, once known
//!
//! ## GameResult
//!
//! The fixed-shape record handed to aggregation once a winner exists.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{ConfigError, GameConfig, Player, PlayerId, PlayerMap};

/// Turn and lap at which every purchasable space had been bought at least
/// once. Recorded at most once per game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub turn: u32,
    pub lap: u32,
}

/// Complete mutable state of one game.
#[derive(Clone, Debug)]
pub struct GameState {
    config: GameConfig,

    /// The board, owned by this game alone.
    pub board: Board,

    /// Players by id. Eliminated players stay in place, inactive.
    pub players: PlayerMap<Player>,

    /// Whose turn is next.
    pub turn_index: PlayerId,

    /// Turns processed so far, including turns skipped for eliminated
    /// players.
    pub turns_elapsed: u32,

    /// Times any player has passed or landed on GO.
    pub laps_completed: u32,

    /// Current rent tier, `0..=MAX_RENT_TIER`.
    pub rent_tier: usize,

    /// Set when the last never-bought space is bought for the first time.
    pub first_purchase: Option<Milestone>,

    /// Set once a single player remains.
    pub winner: Option<PlayerId>,
}

impl GameState {
    /// Create the initial state for a validated configuration.
    ///
    /// Fails without building anything if the configuration is invalid.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            board: Board::standard(),
            players: PlayerMap::new(config.player_count, |_| Player::new()),
            turn_index: PlayerId::new(0),
            turns_elapsed: 0,
            laps_completed: 0,
            rent_tier: 0,
            first_purchase: None,
            winner: None,
            config,
        })
    }

    /// The rules this game was built with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// A player's state.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    /// Mutable access to a player's state.
    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id]
    }

    /// Players still in the game.
    pub fn active_players(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.players
            .iter()
            .filter(|(_, player)| player.active)
            .map(|(id, _)| id)
    }

    /// Whether a winner has been decided.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.winner.is_some()
    }

    /// The terminal record, once the game is finished.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.winner.map(|winner| GameResult {
            winner,
            turns_elapsed: self.turns_elapsed,
            laps_completed: self.laps_completed,
            turn_of_last_first_purchase: self.first_purchase.map(|m| m.turn),
            lap_of_last_first_purchase: self.first_purchase.map(|m| m.lap),
        })
    }
}

/// Outcome of a completed game.
///
/// `None` in the first-purchase fields means some purchasable space was
/// never bought before the game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: PlayerId,
    pub turns_elapsed: u32,
    pub laps_completed: u32,
    pub turn_of_last_first_purchase: Option<u32>,
    pub lap_of_last_first_purchase: Option<u32>,
}

impl GameResult {
    /// Whether every purchasable space was bought during the game.
    #[must_use]
    pub fn all_purchased(&self) -> bool {
        self.lap_of_last_first_purchase.is_some()
    }
}
