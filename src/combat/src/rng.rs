// src/combat/src/rng.rs
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use std::collections::VecDeque;

/// Source of the uniform integer draws combat is built on
pub trait RandomSource {
    /// Uniform draw in `[0, upper)`. A non-positive bound yields 0.
    fn random_below(&mut self, upper: i32) -> i32;

    /// Uniform index into a collection of `len` elements
    fn pick_index(&mut self, len: usize) -> usize {
        let upper = i32::try_from(len).unwrap_or(i32::MAX);
        self.random_below(upper) as usize
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn random_below(&mut self, upper: i32) -> i32 {
        (**self).random_below(upper)
    }
}

/// Seedable PCG-backed source used outside of tests
#[derive(Debug, Clone)]
pub struct ArenaRng {
    rng: Pcg32,
    seed: u64,
}

impl ArenaRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed taken from the thread-local generator
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for ArenaRng {
    fn random_below(&mut self, upper: i32) -> i32 {
        if upper <= 0 {
            0
        } else {
            self.rng.random_range(0..upper)
        }
    }
}

/// Replays canned values, one per draw, whatever the bound.
///
/// Values are reduced modulo the requested bound so a script can never leave
/// the half-open range. Once the script runs dry every draw returns 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRng {
    values: VecDeque<i32>,
    bounds: Vec<i32>,
}

impl ScriptedRng {
    pub fn new(values: impl IntoIterator<Item = i32>) -> Self {
        Self {
            values: values.into_iter().collect(),
            bounds: Vec::new(),
        }
    }

    /// Append more values to the end of the script
    pub fn extend(&mut self, values: impl IntoIterator<Item = i32>) {
        self.values.extend(values);
    }

    /// Bounds requested so far, in draw order
    pub fn bounds(&self) -> &[i32] {
        &self.bounds
    }

    pub fn draws(&self) -> usize {
        self.bounds.len()
    }

    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomSource for ScriptedRng {
    fn random_below(&mut self, upper: i32) -> i32 {
        self.bounds.push(upper);
        let value = self.values.pop_front().unwrap_or(0);
        if upper <= 0 { 0 } else { value.rem_euclid(upper) }
    }
}
