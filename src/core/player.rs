//! Player identification, per-player data storage, and player state.
//!
//! ## PlayerId
//!
//! Type-safe player identifier supporting 2-255 players. Ids are stable for
//! the whole game: eliminated players keep their slot so turn order and
//! ownership references never shift.
//!
//! ## PlayerMap
//!
//! Dense storage with one slot per seat, indexed by `PlayerId`. Used for
//! player state during a game and for win counts across a batch.
//!
//! ## Player
//!
//! Mutable per-participant state: funds, board position, whether the player
//! is still in the game, and the remaining jail sentence.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::constants::STARTING_FUNDS;

/// Player identifier supporting up to 255 players.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The player whose turn follows this one, wrapping around the table.
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        Self(((self.index() + 1) % player_count) as u8)
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use monopoly_sim::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// One value per seat, indexed by [`PlayerId`].
///
/// Seats are never removed, so a map built at game start stays valid for
/// the whole game.
///
/// ```
/// use monopoly_sim::core::{PlayerId, PlayerMap};
///
/// let mut wins: PlayerMap<u32> = PlayerMap::with_value(4, 0);
/// wins[PlayerId::new(1)] += 1;
///
/// assert_eq!(wins[PlayerId::new(0)], 0);
/// assert_eq!(wins[PlayerId::new(1)], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    seats: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Fill each of `player_count` seats from `seat`.
    ///
    /// Counts above 255 are truncated to the ids a `u8` can name; callers
    /// validate the count first.
    pub fn new(player_count: usize, seat: impl FnMut(PlayerId) -> T) -> Self {
        debug_assert!(player_count <= 255, "{player_count} seats do not fit a PlayerId");
        Self {
            seats: PlayerId::all(player_count).map(seat).collect(),
        }
    }

    /// Every seat starts with a clone of `value`.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.seats.len()
    }

    /// Value for one seat.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.seats[player.index()]
    }

    /// Mutable value for one seat.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.seats[player.index()]
    }

    /// Seats in turn order, with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all(self.seats.len()).zip(&self.seats)
    }

    /// Mutable seats in turn order, with their ids.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        PlayerId::all(self.seats.len()).zip(&mut self.seats)
    }

    /// Seat values in turn order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.seats.iter()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &T {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut T {
        self.get_mut(player)
    }
}

/// State of one participant for the lifetime of a single game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Cash on hand. Signed: a jail fine may push it below zero before
    /// the player is eliminated.
    pub funds: i64,

    /// Board position, `0..40`.
    pub position: usize,

    /// False once the player has been eliminated. Never flips back.
    pub active: bool,

    /// Turns left to serve in jail; 0 when free.
    pub jail_turns_remaining: u32,
}

impl Player {
    /// A fresh player on GO with the starting bankroll.
    #[must_use]
    pub fn new() -> Self {
        Self {
            funds: STARTING_FUNDS,
            position: 0,
            active: true,
            jail_turns_remaining: 0,
        }
    }

    /// Whether the player is currently serving a jail sentence.
    #[must_use]
    pub fn in_jail(&self) -> bool {
        self.jail_turns_remaining > 0
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}
