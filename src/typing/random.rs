//! Random sources
//!
//! Everything random in a typing flow goes through [`RandomSource`], so a
//! caller can swap the entropy-seeded generator for a seeded or scripted one.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniformly distributed integers
pub trait RandomSource {
    /// Uniform integer in `min..=max`. Returns `min` when `min >= max`.
    fn int_between(&mut self, min: u64, max: u64) -> u64;
}

impl RandomSource for StdRng {
    fn int_between(&mut self, min: u64, max: u64) -> u64 {
        if min >= max {
            return min;
        }
        self.gen_range(min..=max)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn int_between(&mut self, min: u64, max: u64) -> u64 {
        (**self).int_between(min, max)
    }
}

/// Fresh generator seeded from the OS
///
/// `StdRng` is `Send`, so it can be held across `.await` points in a spawned
/// task.
pub fn from_entropy() -> StdRng {
    StdRng::from_entropy()
}

/// Deterministic generator for reproducible flows
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Replays a fixed list of values
///
/// Each draw pops the next value and clamps it into the requested range.
/// Once the script runs out every draw returns the range minimum.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    values: VecDeque<u64>,
    draws: usize,
}

impl ScriptedRandom {
    pub fn new(values: impl IntoIterator<Item = u64>) -> Self {
        Self {
            values: values.into_iter().collect(),
            draws: 0,
        }
    }

    /// Number of draws made so far
    pub fn draws(&self) -> usize {
        self.draws
    }

    /// Values not yet consumed
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn int_between(&mut self, min: u64, max: u64) -> u64 {
        self.draws += 1;
        match self.values.pop_front() {
            Some(value) => value.clamp(min, max.max(min)),
            None => min,
        }
    }
}
