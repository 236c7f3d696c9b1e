//! Board spaces and their per-game holding state.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Color set of an ordinary property. Owning every member is a monopoly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorGroup {
    Brown,
    LightBlue,
    Pink,
    Orange,
    Red,
    Yellow,
    Green,
    DarkBlue,
}

impl ColorGroup {
    /// All eight groups in board order.
    pub const ALL: [ColorGroup; 8] = [
        ColorGroup::Brown,
        ColorGroup::LightBlue,
        ColorGroup::Pink,
        ColorGroup::Orange,
        ColorGroup::Red,
        ColorGroup::Yellow,
        ColorGroup::Green,
        ColorGroup::DarkBlue,
    ];
}

/// What a space is. Only ordinary properties carry a color group, so
/// nothing else can ever form a monopoly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpaceKind {
    Property(ColorGroup),
    Railroad,
    Utility,
    Go,
    Tax,
    CommunityChest,
    Chance,
    Jail,
    FreeParking,
    GoToJail,
}

impl SpaceKind {
    /// Whether the space can be bought.
    #[must_use]
    pub const fn is_purchasable(self) -> bool {
        matches!(
            self,
            SpaceKind::Property(_) | SpaceKind::Railroad | SpaceKind::Utility
        )
    }

    /// The color group, for ordinary properties.
    #[must_use]
    pub const fn group(self) -> Option<ColorGroup> {
        match self {
            SpaceKind::Property(group) => Some(group),
            _ => None,
        }
    }
}

/// Ownership state of a space for one game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holding {
    /// Current owner; `None` while the bank holds it.
    pub owner: Option<PlayerId>,

    /// Set on the first purchase and never cleared for the rest of the game.
    pub ever_purchased: bool,
}

/// One of the 40 board positions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BoardSpace {
    /// Display name.
    pub name: &'static str,

    /// Kind, including the color group for ordinary properties.
    pub kind: SpaceKind,

    /// Purchase price, or the amount due for a tax space. 0 otherwise.
    pub cost: i64,

    /// Rent indexed by rent tier. Six entries for ordinary properties,
    /// one for everything else.
    pub rents: &'static [i64],

    /// Mutable ownership state.
    pub holding: Holding,
}

impl BoardSpace {
    /// Create an unowned space.
    #[must_use]
    pub const fn new(
        name: &'static str,
        kind: SpaceKind,
        cost: i64,
        rents: &'static [i64],
    ) -> Self {
        Self {
            name,
            kind,
            cost,
            rents,
            holding: Holding {
                owner: None,
                ever_purchased: false,
            },
        }
    }

    /// Current owner, if any.
    #[must_use]
    pub fn owner(&self) -> Option<PlayerId> {
        self.holding.owner
    }

    /// Rent at `tier`, clamped to the last entry of the schedule.
    #[must_use]
    pub fn rent_at(&self, tier: usize) -> i64 {
        match self.rents {
            [] => 0,
            rents => rents[tier.min(rents.len() - 1)],
        }
    }
}
