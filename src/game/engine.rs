//! The turn engine: advances one game from setup to a single winner.
//!
//! ## Turn structure
//!
//! Before each turn the rent tier may escalate. Then, if the current player
//! is still in the game:
//!
//! 1. Serve jail: pay out if possible, otherwise count down; the fine is
//!    charged when the sentence reaches zero.
//! 2. Roll. Doubles free a jailed player immediately.
//! 3. Move and land. Doubles earn another roll, up to three rolls; doubles
//!    on the third roll send the player straight to jail.
//!
//! Every turn, played or skipped, advances the turn counter.

use crate::board::SpaceKind;
use crate::core::constants::{
    BOARD_SIZE, FREE_PARKING_BONUS, GO_SALARY, JAIL_FINE, JAIL_POSITION, JAIL_SENTENCE,
    MAX_RENT_TIER, MAX_ROLLS_PER_TURN,
};
use crate::core::{ConfigError, GameConfig, GameRng, PlayerId, RandomSource};
use crate::rules::{self, Creditor};

use super::state::{GameResult, GameState};

/// One game in progress, with its own random source.
///
/// ```
/// use monopoly_sim::core::GameConfig;
/// use monopoly_sim::game::Game;
///
/// let result = Game::new(GameConfig::new(3), 7).unwrap().run();
/// assert!(result.turns_elapsed > 0);
/// assert!(result.winner.index() < 3);
/// ```
#[derive(Clone, Debug)]
pub struct Game<R: RandomSource = GameRng> {
    state: GameState,
    rng: R,
}

impl Game<GameRng> {
    /// Create a game driven by `GameRng::new(seed)`.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, GameRng::new(seed))
    }
}

impl<R: RandomSource> Game<R> {
    /// Create a game driven by the given random source.
    pub fn with_rng(config: GameConfig, rng: R) -> Result<Self, ConfigError> {
        Ok(Self {
            state: GameState::new(config)?,
            rng,
        })
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable state, for setting up scenarios.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// The random source.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Whether a winner has been decided.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// The terminal record, once finished.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.state.result()
    }

    /// Play turns until one player remains.
    pub fn run(mut self) -> GameResult {
        loop {
            if let Some(result) = self.state.result() {
                return result;
            }
            self.play_turn();
        }
    }

    /// Process one turn. Does nothing once the game is finished.
    pub fn play_turn(&mut self) {
        if self.is_finished() {
            return;
        }

        self.escalate_rent_tier();

        let current = self.state.turn_index;
        if self.state.players[current].active {
            self.take_turn(current);
        }

        self.state.turns_elapsed += 1;
        self.state.turn_index = current.next(self.state.player_count());
    }

    /// Raise the rent tier once every `player_count * interval` turns.
    fn escalate_rent_tier(&mut self) {
        let interval = u64::from(self.state.config().rent_escalation_interval);
        let period = self.state.player_count() as u64 * interval;
        let turns = u64::from(self.state.turns_elapsed);

        if turns >= interval && turns % period == 0 && self.state.rent_tier < MAX_RENT_TIER {
            self.state.rent_tier += 1;
            log::debug!("rent tier now {} at turn {turns}", self.state.rent_tier);
        }
    }

    fn take_turn(&mut self, player: PlayerId) {
        self.serve_jail(player);
        if !self.in_play(player) {
            return;
        }

        let mut roll = rules::roll_two(&mut self.rng);
        log::trace!("{player} rolled {roll:?}");
        if roll.is_double {
            self.state.players[player].jail_turns_remaining = 0;
        }
        if self.state.players[player].in_jail() {
            return;
        }

        for streak in 1..=MAX_ROLLS_PER_TURN {
            if streak == MAX_ROLLS_PER_TURN && roll.is_double {
                log::debug!("{player} rolled {MAX_ROLLS_PER_TURN} doubles in a row");
                self.send_to_jail(player);
                break;
            }

            self.move_and_land(player, roll.total);
            if !roll.is_double || !self.in_play(player) {
                break;
            }

            roll = rules::roll_two(&mut self.rng);
            log::trace!("{player} rolled {roll:?}");
        }
    }

    /// Whether the player can keep acting this turn.
    fn in_play(&self, player: PlayerId) -> bool {
        self.state.players[player].active && !self.is_finished()
    }

    fn serve_jail(&mut self, player: PlayerId) {
        let prisoner = &mut self.state.players[player];
        if !prisoner.in_jail() {
            return;
        }

        if prisoner.funds > JAIL_FINE {
            prisoner.funds -= JAIL_FINE;
            prisoner.jail_turns_remaining = 0;
        } else {
            prisoner.jail_turns_remaining -= 1;
        }

        if prisoner.jail_turns_remaining == 0 {
            prisoner.funds -= JAIL_FINE;
            log::debug!("{player} released from jail");
            if prisoner.funds < 0 {
                rules::eliminate(&mut self.state, player, Creditor::Bank, &mut self.rng);
            }
        }
    }

    fn send_to_jail(&mut self, player: PlayerId) {
        let prisoner = &mut self.state.players[player];
        prisoner.position = JAIL_POSITION;
        prisoner.jail_turns_remaining = JAIL_SENTENCE;
        log::debug!("{player} sent to jail");
    }

    fn move_and_land(&mut self, player: PlayerId, total: usize) {
        let mover = &mut self.state.players[player];
        let from = mover.position;
        let to = (from + total) % BOARD_SIZE;
        mover.position = to;

        if to < from {
            mover.funds += GO_SALARY;
            self.state.laps_completed += 1;
        }
        log::trace!("{player} moved {from} -> {to}");

        self.land(player, to);
    }

    fn land(&mut self, player: PlayerId, position: usize) {
        let space = self.state.board.space(position);
        let (kind, cost, owner) = (space.kind, space.cost, space.owner());

        match kind {
            SpaceKind::FreeParking => {
                if self.state.config().free_parking_bonus {
                    self.state.players[player].funds += FREE_PARKING_BONUS;
                }
            }
            SpaceKind::Tax => {
                let payer = &mut self.state.players[player];
                if payer.funds > cost {
                    payer.funds -= cost;
                } else {
                    rules::eliminate(&mut self.state, player, Creditor::Bank, &mut self.rng);
                }
            }
            SpaceKind::GoToJail => self.send_to_jail(player),
            SpaceKind::Property(_) | SpaceKind::Railroad | SpaceKind::Utility => match owner {
                None => {
                    if !rules::attempt_purchase(&mut self.state, player, position)
                        && self.state.config().auction_unbought
                    {
                        rules::auction(&mut self.state, position, &mut self.rng);
                    }
                }
                Some(owner) if owner != player => self.pay_rent(player, owner, position),
                Some(_) => {}
            },
            SpaceKind::Go | SpaceKind::Jail | SpaceKind::Chance | SpaceKind::CommunityChest => {}
        }
    }

    fn pay_rent(&mut self, player: PlayerId, owner: PlayerId, position: usize) {
        let due = rules::rent_due(&self.state, position, &mut self.rng);
        let funds = self.state.players[player].funds;

        if funds > due {
            self.state.players[player].funds -= due;
            self.state.players[owner].funds += due;
            log::debug!("{player} paid {due} rent to {owner}");
        } else {
            self.state.players[owner].funds += funds;
            rules::eliminate(&mut self.state, player, Creditor::Player(owner), &mut self.rng);
        }
    }
}

/// Play one fresh game to completion.
pub fn simulate_game<R: RandomSource>(
    config: GameConfig,
    rng: R,
) -> Result<GameResult, ConfigError> {
    Ok(Game::with_rng(config, rng)?.run())
}
