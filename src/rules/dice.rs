//! Six-sided dice.

use crate::core::RandomSource;

/// Result of rolling two dice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Roll {
    /// Sum of both dice, `2..=12`.
    pub total: usize,
    /// Both dice showed the same face.
    pub is_double: bool,
}

/// Roll one die, `1..=6`.
pub fn roll_one<R: RandomSource + ?Sized>(rng: &mut R) -> usize {
    rng.uniform_int(1, 6) as usize
}

/// Roll two dice.
pub fn roll_two<R: RandomSource + ?Sized>(rng: &mut R) -> Roll {
    let first = roll_one(rng);
    let second = roll_one(rng);
    Roll {
        total: first + second,
        is_double: first == second,
    }
}
