//! The board: space definitions, per-game holdings, and the standard layout.
//!
//! Space definitions never change. Ownership lives in each space's
//! [`Holding`] and is only meaningful within the game that built the board.

pub mod layout;
pub mod space;

pub use layout::{Board, GroupMembers};
pub use space::{BoardSpace, ColorGroup, Holding, SpaceKind};
