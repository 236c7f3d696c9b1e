//! Rent owed for landing on an owned space.

use crate::board::SpaceKind;
use crate::core::constants::{
    BOTH_UTILITIES_MULTIPLIER, MONOPOLY_MULTIPLIER, RAILROAD_BASE_RENT, SINGLE_UTILITY_MULTIPLIER,
};
use crate::core::RandomSource;
use crate::game::GameState;

use super::dice;

/// Amount owed to the owner of `position`.
///
/// - Ordinary property: the rent for the current tier, doubled when the
///   owner holds the whole color group.
/// - Railroad: 25, 50, 100, 200 for one to four railroads owned.
/// - Utility: a fresh two-dice total times 4, or times 10 when the owner
///   holds both utilities.
///
/// Returns 0 for unowned spaces and for kinds that never charge rent.
/// Only utilities consume randomness.
pub fn rent_due<R: RandomSource + ?Sized>(state: &GameState, position: usize, rng: &mut R) -> i64 {
    let space = state.board.space(position);
    let Some(owner) = space.owner() else {
        return 0;
    };

    match space.kind {
        SpaceKind::Property(_) => {
            let base = space.rent_at(state.rent_tier);
            if state.board.has_monopoly(position) {
                MONOPOLY_MULTIPLIER * base
            } else {
                base
            }
        }
        SpaceKind::Railroad => match state.board.railroads_owned_by(owner) {
            0 => 0,
            owned => RAILROAD_BASE_RENT << (owned - 1),
        },
        SpaceKind::Utility => {
            let multiplier = match state.board.utilities_owned_by(owner) {
                1 => SINGLE_UTILITY_MULTIPLIER,
                2 => BOTH_UTILITIES_MULTIPLIER,
                _ => 0,
            };
            dice::roll_two(rng).total as i64 * multiplier
        }
        SpaceKind::Go
        | SpaceKind::Tax
        | SpaceKind::CommunityChest
        | SpaceKind::Chance
        | SpaceKind::Jail
        | SpaceKind::FreeParking
        | SpaceKind::GoToJail => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::ColorGroup;
    use crate::core::{GameConfig, PlayerId, ScriptedRng};

    fn state() -> GameState {
        GameState::new(GameConfig::new(3)).unwrap()
    }

    fn own(state: &mut GameState, position: usize, owner: u8) {
        state.board.space_mut(position).holding.owner = Some(PlayerId::new(owner));
    }

    #[test]
    fn test_unowned_space_charges_nothing() {
        let state = state();
        let mut rng = ScriptedRng::new(0);
        assert_eq!(rent_due(&state, 1, &mut rng), 0);
    }

    #[test]
    fn test_property_base_rent_by_tier() {
        let mut state = state();
        let mut rng = ScriptedRng::new(0);
        own(&mut state, 39, 0);

        let expected = [50, 200, 600, 1400, 1700, 2000];
        for (tier, &rent) in expected.iter().enumerate() {
            state.rent_tier = tier;
            assert_eq!(rent_due(&state, 39, &mut rng), rent);
        }
    }

    #[test]
    fn test_monopoly_doubles_rent() {
        let mut state = state();
        let mut rng = ScriptedRng::new(0);
        own(&mut state, 37, 1);
        own(&mut state, 39, 1);

        assert_eq!(rent_due(&state, 37, &mut rng), 70);
        assert_eq!(rent_due(&state, 39, &mut rng), 100);
    }

    #[test]
    fn test_split_group_is_not_a_monopoly() {
        let mut state = state();
        let mut rng = ScriptedRng::new(0);
        let members = state.board.group_members(ColorGroup::Orange).to_vec();
        for position in members {
            own(&mut state, position, 0);
        }
        own(&mut state, 19, 2);

        assert_eq!(rent_due(&state, 16, &mut rng), 14);
        assert_eq!(rent_due(&state, 19, &mut rng), 16);
    }

    #[test]
    fn test_railroad_rent_doubles_per_railroad() {
        let mut state = state();
        let mut rng = ScriptedRng::new(0);

        let mut rents = Vec::new();
        for position in [5, 15, 25, 35] {
            own(&mut state, position, 2);
            rents.push(rent_due(&state, 5, &mut rng));
        }

        assert_eq!(rents, vec![25, 50, 100, 200]);
    }

    #[test]
    fn test_railroad_rent_ignores_tier() {
        let mut state = state();
        let mut rng = ScriptedRng::new(0);
        own(&mut state, 15, 0);
        state.rent_tier = 5;
        assert_eq!(rent_due(&state, 15, &mut rng), 25);
    }

    #[test]
    fn test_single_utility_rent() {
        let mut state = state();
        own(&mut state, 12, 0);
        let mut rng = ScriptedRng::new(0).with_roll(3, 5);
        assert_eq!(rent_due(&state, 12, &mut rng), 32);
    }

    #[test]
    fn test_both_utilities_rent() {
        let mut state = state();
        own(&mut state, 12, 0);
        own(&mut state, 28, 0);
        let mut rng = ScriptedRng::new(0).with_roll(6, 6);
        assert_eq!(rent_due(&state, 28, &mut rng), 120);
    }

    #[test]
    fn test_utilities_split_between_owners() {
        let mut state = state();
        own(&mut state, 12, 0);
        own(&mut state, 28, 1);
        let mut rng = ScriptedRng::new(0).with_roll(1, 2);
        assert_eq!(rent_due(&state, 28, &mut rng), 12);
    }
}
