//! Removing bankrupt players and passing on what they owned.

use smallvec::SmallVec;

use crate::core::{PlayerId, RandomSource};
use crate::game::GameState;

use super::acquisition;

/// Who a bankrupt player owed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Creditor {
    /// Taxes and jail fines. Holdings go back to auction.
    Bank,
    /// Unpaid rent. Holdings pass to the owner directly.
    Player(PlayerId),
}

impl std::fmt::Display for Creditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Creditor::Bank => f.write_str("the bank"),
            Creditor::Player(id) => write!(f, "{id}"),
        }
    }
}

/// Take `player` out of the game.
///
/// The player is marked inactive with zero funds. If only one player is
/// left they become the winner and holdings stay where they are. Otherwise
/// each space the player owned is released and auctioned when the bank is
/// the creditor, or handed to the creditor for free.
pub fn eliminate<R: RandomSource + ?Sized>(
    state: &mut GameState,
    player: PlayerId,
    creditor: Creditor,
    rng: &mut R,
) {
    let bankrupt = &mut state.players[player];
    bankrupt.active = false;
    bankrupt.funds = 0;
    log::debug!("{player} eliminated, owing {creditor}");

    let eliminated = state.players.values().filter(|p| !p.active).count();
    if eliminated + 1 >= state.player_count() {
        let survivor = state.active_players().next();
        state.winner = survivor;
        if let Some(winner) = survivor {
            log::debug!("{winner} wins after {} turns", state.turns_elapsed);
        }
        return;
    }

    let holdings: SmallVec<[usize; 8]> = state.board.holdings_of(player).collect();
    for position in holdings {
        match creditor {
            Creditor::Bank => {
                state.board.space_mut(position).holding.owner = None;
                acquisition::auction(state, position, rng);
            }
            Creditor::Player(owner) => {
                state.board.space_mut(position).holding.owner = Some(owner);
            }
        }
    }
}
