//! Buying spaces on landing and auctioning spaces nobody bought.

use smallvec::SmallVec;

use crate::core::{PlayerId, RandomSource};
use crate::game::{GameState, Milestone};

/// Buy `position` for `player` if they can afford it.
///
/// Affording means holding strictly more than the price: a purchase may
/// never leave a player at exactly zero. On success the price is deducted,
/// ownership and `ever_purchased` are set, and the first-purchase milestone
/// is recorded if this purchase completes it.
///
/// Returns whether the purchase happened. Nothing changes when it did not.
pub fn attempt_purchase(state: &mut GameState, player: PlayerId, position: usize) -> bool {
    let cost = state.board.space(position).cost;
    if state.players[player].funds <= cost {
        return false;
    }

    state.players[player].funds -= cost;
    let space = state.board.space_mut(position);
    space.holding.owner = Some(player);
    space.holding.ever_purchased = true;
    log::debug!("{player} bought {} for {cost}", space.name);

    if state.first_purchase.is_none() && state.board.all_purchasable_ever_bought() {
        let milestone = Milestone {
            turn: state.turns_elapsed,
            lap: state.laps_completed,
        };
        log::debug!(
            "every space bought at least once by turn {} (lap {})",
            milestone.turn,
            milestone.lap
        );
        state.first_purchase = Some(milestone);
    }

    true
}

/// Sell `position` at list price to a random active player who can afford
/// it.
///
/// There is no bidding: every player holding strictly more than the price
/// is equally likely to win. If nobody qualifies the space stays with the
/// bank. Returns the buyer, if any.
pub fn auction<R: RandomSource + ?Sized>(
    state: &mut GameState,
    position: usize,
    rng: &mut R,
) -> Option<PlayerId> {
    let cost = state.board.space(position).cost;
    let bidders: SmallVec<[PlayerId; 8]> = state
        .players
        .iter()
        .filter(|(_, player)| player.active && player.funds > cost)
        .map(|(id, _)| id)
        .collect();

    if bidders.is_empty() {
        log::debug!("no bidders for {}", state.board.space(position).name);
        return None;
    }

    let buyer = bidders[rng.select_index(bidders.len())];
    log::debug!(
        "{} auctioned among {} bidders",
        state.board.space(position).name,
        bidders.len()
    );
    attempt_purchase(state, buyer, position).then_some(buyer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, ScriptedRng};

    fn state(players: usize) -> GameState {
        GameState::new(GameConfig::new(players)).unwrap()
    }

    #[test]
    fn test_purchase_deducts_and_claims() {
        let mut state = state(2);
        let buyer = PlayerId::new(0);

        assert!(attempt_purchase(&mut state, buyer, 39));

        assert_eq!(state.players[buyer].funds, 1100);
        assert_eq!(state.board.space(39).owner(), Some(buyer));
        assert!(state.board.space(39).holding.ever_purchased);
    }

    #[test]
    fn test_exact_funds_cannot_buy() {
        let mut state = state(2);
        let buyer = PlayerId::new(0);
        state.players[buyer].funds = 60;

        assert!(!attempt_purchase(&mut state, buyer, 1));

        assert_eq!(state.players[buyer].funds, 60);
        assert_eq!(state.board.space(1).owner(), None);
        assert!(!state.board.space(1).holding.ever_purchased);
    }

    #[test]
    fn test_milestone_recorded_on_last_first_purchase() {
        let mut state = state(2);
        let buyer = PlayerId::new(0);
        state.players[buyer].funds = 1_000_000;
        state.turns_elapsed = 77;
        state.laps_completed = 8;

        let purchasable: Vec<_> = (0..state.board.len())
            .filter(|&p| state.board.space(p).kind.is_purchasable())
            .collect();
        let (last, rest) = purchasable.split_last().unwrap();

        for &position in rest {
            assert!(attempt_purchase(&mut state, buyer, position));
        }
        assert_eq!(state.first_purchase, None);

        assert!(attempt_purchase(&mut state, buyer, *last));
        assert_eq!(state.first_purchase, Some(Milestone { turn: 77, lap: 8 }));
    }

    #[test]
    fn test_milestone_never_overwritten() {
        let mut state = state(2);
        let milestone = Milestone { turn: 3, lap: 1 };
        state.first_purchase = Some(milestone);
        state.turns_elapsed = 500;

        assert!(attempt_purchase(&mut state, PlayerId::new(1), 5));
        assert_eq!(state.first_purchase, Some(milestone));
    }

    #[test]
    fn test_auction_picks_among_qualified_bidders() {
        let mut state = state(4);
        state.players[PlayerId::new(0)].funds = 100;
        state.players[PlayerId::new(2)].active = false;

        // Bidders are players 1 and 3; pick the second.
        let mut rng = ScriptedRng::new(0).with_pick(1);
        let buyer = auction(&mut state, 39, &mut rng);

        assert_eq!(buyer, Some(PlayerId::new(3)));
        assert_eq!(state.board.space(39).owner(), Some(PlayerId::new(3)));
        assert_eq!(state.players[PlayerId::new(3)].funds, 1100);
    }

    #[test]
    fn test_auction_without_bidders_leaves_space_unowned() {
        let mut state = state(3);
        for (_, player) in state.players.iter_mut() {
            player.funds = 400;
        }

        let mut rng = ScriptedRng::new(0);
        assert_eq!(auction(&mut state, 39, &mut rng), None);
        assert_eq!(state.board.space(39).owner(), None);
        assert!(!state.board.space(39).holding.ever_purchased);
    }
}
