//! Injected randomness
//!
//! Every random draw in the engine goes through [`RandomSource`], so a run is
//! fully determined by its seed (or by a scripted sequence of draws).

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of uniform random values
pub trait RandomSource {
    /// Uniform integer in `lo..=hi` (callers guarantee `lo <= hi`)
    fn int_in(&mut self, lo: u32, hi: u32) -> u32;

    /// Uniform float in `[0, 1)`
    fn unit(&mut self) -> f32;

    /// Uniform float in `[lo, hi)`
    fn float_in(&mut self, lo: f32, hi: f32) -> f32 {
        lo + self.unit() * (hi - lo)
    }

    /// Pick one element uniformly. Returns `None` for an empty slice.
    fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            return None;
        }
        let i = self.int_in(0, items.len() as u32 - 1) as usize;
        items.get(i)
    }

    /// Fisher-Yates shuffle in place
    fn shuffle<T>(&mut self, items: &mut [T])
    where
        Self: Sized,
    {
        for i in (1..items.len()).rev() {
            let j = self.int_in(0, i as u32) as usize;
            items.swap(i, j);
        }
    }
}

/// Seeded PCG generator, the default source for real sessions
#[derive(Debug, Clone)]
pub struct SeededRng {
    seed: u64,
    rng: Pcg32,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed this generator was created from (for replays)
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRng {
    fn int_in(&mut self, lo: u32, hi: u32) -> u32 {
        self.rng.random_range(lo..=hi)
    }

    fn unit(&mut self) -> f32 {
        self.rng.random::<f32>()
    }
}

/// Replays a fixed sequence of draws
///
/// Integer draws are clamped into the requested range; once the queue runs dry
/// the lower bound is returned. Float draws are always `0.0`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRng {
    ints: VecDeque<u32>,
}

impl ScriptedRng {
    pub fn new(ints: impl IntoIterator<Item = u32>) -> Self {
        Self {
            ints: ints.into_iter().collect(),
        }
    }

    /// Draws not consumed yet
    pub fn remaining(&self) -> usize {
        self.ints.len()
    }
}

impl RandomSource for ScriptedRng {
    fn int_in(&mut self, lo: u32, hi: u32) -> u32 {
        self.ints.pop_front().map_or(lo, |v| v.clamp(lo, hi))
    }

    fn unit(&mut self) -> f32 {
        0.0
    }
}
