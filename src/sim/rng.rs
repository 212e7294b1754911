//! Injectable randomness
//!
//! The simulation never touches a global generator. Block colors and the
//! velocity jitter on block hits are drawn from a [`RandomSource`] owned by the
//! game state, so tests can substitute a fixed sequence.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::{JITTER_OFFSET, JITTER_SCALE, JITTER_STEPS};

/// Source of bounded integers for the simulation
pub trait RandomSource {
    /// Uniform value in `0..n` (`n` must be non-zero)
    fn next_below(&mut self, n: u32) -> u32;
}

impl RandomSource for Pcg32 {
    fn next_below(&mut self, n: u32) -> u32 {
        self.random_range(0..n)
    }
}

/// Seeded production source
pub fn seeded(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Velocity nudge applied on block hits, in [-0.1, 0.1)
pub fn jitter<R: RandomSource + ?Sized>(rng: &mut R) -> f32 {
    rng.next_below(JITTER_STEPS) as f32 / JITTER_SCALE - JITTER_OFFSET
}

/// Deterministic source that cycles through a fixed list of values.
///
/// Each value is reduced modulo the requested bound.
#[derive(Debug, Clone)]
pub struct SequenceRng {
    values: Vec<u32>,
    cursor: usize,
}

impl SequenceRng {
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Always yields the same value
    pub fn constant(value: u32) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for SequenceRng {
    fn next_below(&mut self, n: u32) -> u32 {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor = self.cursor.wrapping_add(1);
        value % n.max(1)
    }
}
