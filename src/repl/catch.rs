//! Catch probability.
//!
//! A Pokemon with base experience `xp` is caught when a roll in `0..256`
//! lands below `255 / (1 + xp / 100)`, using integer division throughout.

use rand::Rng;

/// Exclusive upper bound of a catch roll
pub const ROLL_RANGE: u32 = 256;

/// Returns the catch threshold for a Pokemon with the given base experience.
pub fn catch_rate(base_experience: u32) -> u32 {
    255 / (1 + base_experience / 100)
}

/// Rolls once against the catch threshold.
pub fn attempt_catch<R: Rng + ?Sized>(base_experience: u32, rng: &mut R) -> bool {
    rng.gen_range(0..ROLL_RANGE) < catch_rate(base_experience)
}
