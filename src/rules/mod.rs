//! Game rules as functions over [`GameState`](crate::game::GameState).
//!
//! - `dice`: Rolling one or two dice
//! - `rent`: What a lander owes the owner
//! - `acquisition`: Buying on landing, auctions
//! - `elimination`: Bankruptcy and asset transfer
//!
//! The turn engine in `game` decides when each rule applies.

pub mod acquisition;
pub mod dice;
pub mod elimination;
pub mod rent;

pub use acquisition::{attempt_purchase, auction};
pub use dice::{roll_one, roll_two, Roll};
pub use elimination::{eliminate, Creditor};
pub use rent::rent_due;
