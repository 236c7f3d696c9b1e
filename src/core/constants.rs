//! Fixed rule constants of the standard board.

/// Number of spaces on the board.
pub const BOARD_SIZE: usize = 40;

/// Position of the jail space.
pub const JAIL_POSITION: usize = 10;

/// Cash each player starts with.
pub const STARTING_FUNDS: i64 = 1500;

/// Salary credited for passing or landing on GO.
pub const GO_SALARY: i64 = 200;

/// Fine paid to leave jail.
pub const JAIL_FINE: i64 = 50;

/// Turns a player is sentenced to when sent to jail.
pub const JAIL_SENTENCE: u32 = 3;

/// Bonus paid on Free Parking when the house rule is on.
pub const FREE_PARKING_BONUS: i64 = 500;

/// Highest rent tier; tiers run `0..=MAX_RENT_TIER`.
pub const MAX_RENT_TIER: usize = 5;

/// Rent for a single owned railroad; doubles per extra railroad.
pub const RAILROAD_BASE_RENT: i64 = 25;

/// Dice multiplier when the owner holds one utility.
pub const SINGLE_UTILITY_MULTIPLIER: i64 = 4;

/// Dice multiplier when the owner holds both utilities.
pub const BOTH_UTILITIES_MULTIPLIER: i64 = 10;

/// Monopoly rent multiplier for ordinary properties.
pub const MONOPOLY_MULTIPLIER: i64 = 2;

/// Consecutive rolls allowed in one turn; doubles on the last one jail the
/// player.
pub const MAX_ROLLS_PER_TURN: u32 = 3;
