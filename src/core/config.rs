//! Game and simulation configuration types.
//!
//! - `GameConfig`: Per-game rules fixed at construction (player count,
//!   auction and Free Parking house rules, rent escalation pace)
//! - `Ruleset`: Named house-rule combinations compared by the simulator
//! - `SimulationConfig`: Batch sizes, seed, and which rulesets to run
//!
//! Configs are plain serde data. `GameConfig::validate` is the single gate
//! every game passes through before any state is built.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Largest supported table; player ids are `u8`.
pub const MAX_PLAYERS: usize = 255;

/// Complete rules for one game.
///
/// ```
/// use monopoly_sim::core::GameConfig;
///
/// let config = GameConfig::new(4)
///     .with_auctions(false)
///     .with_free_parking_bonus(true)
///     .with_rent_escalation_interval(10);
///
/// assert!(config.validate().is_ok());
/// assert!(GameConfig::new(1).validate().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of players (2-255).
    pub player_count: usize,

    /// Auction a purchasable space when the lander cannot afford it.
    pub auction_unbought: bool,

    /// Landing on Free Parking pays a bonus.
    pub free_parking_bonus: bool,

    /// Rent tier rises once every `player_count * interval` turns.
    pub rent_escalation_interval: u32,
}

impl GameConfig {
    /// Create a configuration with the standard rules: auctions on,
    /// no Free Parking bonus, rent rising every 10 rounds.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            auction_unbought: true,
            free_parking_bonus: false,
            rent_escalation_interval: 10,
        }
    }

    /// Enable or disable auctions for declined spaces.
    #[must_use]
    pub fn with_auctions(mut self, enabled: bool) -> Self {
        self.auction_unbought = enabled;
        self
    }

    /// Enable or disable the Free Parking bonus.
    #[must_use]
    pub fn with_free_parking_bonus(mut self, enabled: bool) -> Self {
        self.free_parking_bonus = enabled;
        self
    }

    /// Set the rent escalation interval in turns.
    #[must_use]
    pub fn with_rent_escalation_interval(mut self, turns: u32) -> Self {
        self.rent_escalation_interval = turns;
        self
    }

    /// Check the configuration can produce a game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player_count < 2 {
            return Err(ConfigError::TooFewPlayers {
                count: self.player_count,
            });
        }
        if self.player_count > MAX_PLAYERS {
            return Err(ConfigError::TooManyPlayers {
                count: self.player_count,
                max: MAX_PLAYERS,
            });
        }
        if self.rent_escalation_interval == 0 {
            return Err(ConfigError::ZeroEscalationInterval);
        }
        Ok(())
    }
}

/// House-rule combinations compared by the simulator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Ruleset {
    /// Declined spaces are auctioned; Free Parking pays nothing.
    Standard,
    /// Declined spaces are auctioned; Free Parking pays the bonus.
    FreeParkingBonus,
    /// Declined spaces stay with the bank; Free Parking pays nothing.
    NoAuctions,
    /// Declined spaces stay with the bank; Free Parking pays the bonus.
    NoAuctionsFreeParkingBonus,
}

impl Ruleset {
    /// Every ruleset, in report order.
    pub const ALL: [Ruleset; 4] = [
        Ruleset::Standard,
        Ruleset::FreeParkingBonus,
        Ruleset::NoAuctions,
        Ruleset::NoAuctionsFreeParkingBonus,
    ];

    /// Stable kebab-case name, also used to derive batch seeds.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Ruleset::Standard => "standard",
            Ruleset::FreeParkingBonus => "free-parking-bonus",
            Ruleset::NoAuctions => "no-auctions",
            Ruleset::NoAuctionsFreeParkingBonus => "no-auctions-free-parking-bonus",
        }
    }

    /// Whether declined spaces go to auction.
    #[must_use]
    pub const fn auctions(self) -> bool {
        matches!(self, Ruleset::Standard | Ruleset::FreeParkingBonus)
    }

    /// Whether Free Parking pays the bonus.
    #[must_use]
    pub const fn free_parking_bonus(self) -> bool {
        matches!(
            self,
            Ruleset::FreeParkingBonus | Ruleset::NoAuctionsFreeParkingBonus
        )
    }

    /// Build the game configuration for this ruleset.
    #[must_use]
    pub fn game_config(self, player_count: usize, rent_escalation_interval: u32) -> GameConfig {
        GameConfig::new(player_count)
            .with_auctions(self.auctions())
            .with_free_parking_bonus(self.free_parking_bonus())
            .with_rent_escalation_interval(rent_escalation_interval)
    }
}

impl std::fmt::Display for Ruleset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Ruleset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ruleset::ALL
            .into_iter()
            .find(|ruleset| ruleset.label() == s)
            .ok_or_else(|| ConfigError::UnknownRuleset(s.to_string()))
    }
}

/// Batch simulation settings.
///
/// Every field has a default, so a JSON file only needs the fields it
/// changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Players per game.
    pub player_count: usize,

    /// Rent escalation interval shared by every ruleset.
    pub rent_escalation_interval: u32,

    /// Games simulated per ruleset.
    pub games_per_ruleset: usize,

    /// Bootstrap resamples per ruleset.
    pub resamples: usize,

    /// Base seed; each ruleset derives its own stream from it.
    pub seed: u64,

    /// Rulesets to run, in order.
    pub rulesets: Vec<Ruleset>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            player_count: 15,
            rent_escalation_interval: 10,
            games_per_ruleset: 500,
            resamples: 10_000,
            seed: 42,
            rulesets: Ruleset::ALL.to_vec(),
        }
    }
}

impl SimulationConfig {
    /// Parse a JSON config, filling unspecified fields with defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// The game configuration used for `ruleset`.
    #[must_use]
    pub fn game_config(&self, ruleset: Ruleset) -> GameConfig {
        ruleset.game_config(self.player_count, self.rent_escalation_interval)
    }

    /// Check every configured ruleset produces a valid game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.game_config(Ruleset::Standard).validate()
    }
}
