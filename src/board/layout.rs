//! The standard 40-space board and ownership queries over it.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::space::{BoardSpace, ColorGroup, SpaceKind};
use crate::core::constants::BOARD_SIZE;
use crate::core::PlayerId;

/// Board positions sharing one color group. Groups hold 2 or 3 spaces.
pub type GroupMembers = SmallVec<[usize; 3]>;

const NO_RENT: &[i64] = &[0];
const RAILROAD_RENT: &[i64] = &[25];

/// Build the canonical board in order, starting at GO.
fn standard_spaces() -> Vec<BoardSpace> {
    use ColorGroup::*;
    use SpaceKind::*;

    vec![
        BoardSpace::new("GO", Go, 0, NO_RENT),
        BoardSpace::new("Mediterranean Avenue", Property(Brown), 60, &[2, 10, 30, 90, 160, 250]),
        BoardSpace::new("Community Chest", CommunityChest, 0, NO_RENT),
        BoardSpace::new("Baltic Avenue", Property(Brown), 60, &[4, 20, 60, 180, 320, 450]),
        BoardSpace::new("Income Tax", Tax, 200, NO_RENT),
        BoardSpace::new("Reading Railroad", Railroad, 200, RAILROAD_RENT),
        BoardSpace::new("Oriental Avenue", Property(LightBlue), 100, &[6, 30, 90, 270, 400, 550]),
        BoardSpace::new("Chance", Chance, 0, NO_RENT),
        BoardSpace::new("Vermont Avenue", Property(LightBlue), 100, &[6, 30, 90, 270, 400, 550]),
        BoardSpace::new("Connecticut Avenue", Property(LightBlue), 120, &[8, 40, 100, 300, 450, 600]),
        BoardSpace::new("Jail", Jail, 0, NO_RENT),
        BoardSpace::new("St. Charles Place", Property(Pink), 140, &[10, 50, 150, 450, 625, 750]),
        BoardSpace::new("Electric Company", Utility, 150, NO_RENT),
        BoardSpace::new("States Avenue", Property(Pink), 140, &[10, 50, 150, 450, 625, 750]),
        BoardSpace::new("Virginia Avenue", Property(Pink), 160, &[12, 60, 180, 500, 700, 900]),
        BoardSpace::new("Pennsylvania Railroad", Railroad, 200, RAILROAD_RENT),
        BoardSpace::new("St. James Place", Property(Orange), 180, &[14, 70, 200, 550, 750, 950]),
        BoardSpace::new("Community Chest", CommunityChest, 0, NO_RENT),
        BoardSpace::new("Tennessee Avenue", Property(Orange), 180, &[14, 70, 200, 550, 750, 950]),
        BoardSpace::new("New York Avenue", Property(Orange), 200, &[16, 80, 220, 600, 800, 1000]),
        BoardSpace::new("Free Parking", FreeParking, 0, NO_RENT),
        BoardSpace::new("Kentucky Avenue", Property(Red), 220, &[18, 90, 250, 700, 875, 1050]),
        BoardSpace::new("Chance", Chance, 0, NO_RENT),
        BoardSpace::new("Indiana Avenue", Property(Red), 220, &[18, 90, 250, 700, 875, 1050]),
        BoardSpace::new("Illinois Avenue", Property(Red), 240, &[20, 100, 300, 750, 925, 1100]),
        BoardSpace::new("B&O Railroad", Railroad, 200, RAILROAD_RENT),
        BoardSpace::new("Atlantic Avenue", Property(Yellow), 260, &[22, 110, 330, 800, 975, 1150]),
        BoardSpace::new("Ventnor Avenue", Property(Yellow), 260, &[22, 110, 330, 800, 975, 1150]),
        BoardSpace::new("Water Works", Utility, 150, NO_RENT),
        BoardSpace::new("Marvin Gardens", Property(Yellow), 280, &[24, 120, 360, 850, 1025, 1200]),
        BoardSpace::new("Go To Jail", GoToJail, 0, NO_RENT),
        BoardSpace::new("Pacific Avenue", Property(Green), 300, &[26, 130, 390, 900, 1100, 1275]),
        BoardSpace::new("North Carolina Avenue", Property(Green), 300, &[26, 130, 390, 900, 1100, 1275]),
        BoardSpace::new("Community Chest", CommunityChest, 0, NO_RENT),
        BoardSpace::new("Pennsylvania Avenue", Property(Green), 320, &[28, 150, 450, 1000, 1200, 1400]),
        BoardSpace::new("Short Line", Railroad, 200, RAILROAD_RENT),
        BoardSpace::new("Chance", Chance, 0, NO_RENT),
        BoardSpace::new("Park Place", Property(DarkBlue), 350, &[35, 175, 500, 1100, 1300, 1500]),
        BoardSpace::new("Luxury Tax", Tax, 100, NO_RENT),
        BoardSpace::new("Boardwalk", Property(DarkBlue), 400, &[50, 200, 600, 1400, 1700, 2000]),
    ]
}

/// The board for one game: the 40 spaces plus a color-group index.
///
/// Every game builds its own board, so holdings never leak between
/// games running side by side.
#[derive(Clone, Debug)]
pub struct Board {
    spaces: Vec<BoardSpace>,
    groups: FxHashMap<ColorGroup, GroupMembers>,
}

impl Board {
    /// Build a fresh standard board with every space unowned.
    #[must_use]
    pub fn standard() -> Self {
        let spaces = standard_spaces();
        debug_assert_eq!(spaces.len(), BOARD_SIZE);

        let mut groups: FxHashMap<ColorGroup, GroupMembers> = FxHashMap::default();
        for (position, space) in spaces.iter().enumerate() {
            if let Some(group) = space.kind.group() {
                groups.entry(group).or_default().push(position);
            }
        }

        Self { spaces, groups }
    }

    /// Number of spaces (always 40).
    #[must_use]
    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    /// Whether the board has no spaces.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }

    /// The space at `position`.
    #[must_use]
    pub fn space(&self, position: usize) -> &BoardSpace {
        &self.spaces[position]
    }

    /// Mutable access to the space at `position`.
    pub fn space_mut(&mut self, position: usize) -> &mut BoardSpace {
        &mut self.spaces[position]
    }

    /// Iterate over spaces in board order.
    pub fn iter(&self) -> impl Iterator<Item = &BoardSpace> {
        self.spaces.iter()
    }

    /// Positions belonging to `group`.
    #[must_use]
    pub fn group_members(&self, group: ColorGroup) -> &[usize] {
        self.groups
            .get(&group)
            .map(|members| members.as_slice())
            .unwrap_or(&[])
    }

    /// Whether the owner of `position` owns its whole color group.
    ///
    /// False for unowned spaces and for anything that is not an ordinary
    /// property.
    #[must_use]
    pub fn has_monopoly(&self, position: usize) -> bool {
        let space = &self.spaces[position];
        let (Some(group), Some(owner)) = (space.kind.group(), space.owner()) else {
            return false;
        };
        self.group_members(group)
            .iter()
            .all(|&member| self.spaces[member].owner() == Some(owner))
    }

    /// Positions currently owned by `player`.
    pub fn holdings_of(&self, player: PlayerId) -> impl Iterator<Item = usize> + '_ {
        self.spaces
            .iter()
            .enumerate()
            .filter(move |(_, space)| space.owner() == Some(player))
            .map(|(position, _)| position)
    }

    /// Railroads owned by `player` (0-4).
    #[must_use]
    pub fn railroads_owned_by(&self, player: PlayerId) -> u32 {
        self.count_owned(player, SpaceKind::Railroad)
    }

    /// Utilities owned by `player` (0-2).
    #[must_use]
    pub fn utilities_owned_by(&self, player: PlayerId) -> u32 {
        self.count_owned(player, SpaceKind::Utility)
    }

    fn count_owned(&self, player: PlayerId, kind: SpaceKind) -> u32 {
        self.spaces
            .iter()
            .filter(|space| space.kind == kind && space.owner() == Some(player))
            .count() as u32
    }

    /// Whether every purchasable space has been bought at least once.
    #[must_use]
    pub fn all_purchasable_ever_bought(&self) -> bool {
        self.spaces
            .iter()
            .filter(|space| space.kind.is_purchasable())
            .all(|space| space.holding.ever_purchased)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}
