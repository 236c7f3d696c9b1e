//! Configuration errors.
//!
//! Unpayable rent, tax, or jail fines are game events (eliminations), not
//! errors. The only failures the engine reports are invalid configurations,
//! caught before any game state exists.

use thiserror::Error;

/// Errors raised when a game or simulation configuration is invalid.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("a game needs at least 2 players (got {count})")]
    TooFewPlayers { count: usize },
    #[error("at most {max} players are supported (got {count})")]
    TooManyPlayers { count: usize, max: usize },
    #[error("rent escalation interval must be a positive number of turns")]
    ZeroEscalationInterval,
    #[error("unknown ruleset '{0}'")]
    UnknownRuleset(String),
    #[error("invalid simulation config: {0}")]
    Parse(#[from] serde_json::Error),
}
