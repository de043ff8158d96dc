//! Simulation-level RNG wrapper.
//!
//! A single `SimRng` feeds every random decision of a run (spawn cells,
//! then the tie shuffle), always in the same order, so a seeded run is
//! reproducible end to end.  Seed-free runs draw the initial state from OS
//! entropy.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG.  Used only from the single driver thread.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Seeded when `seed` is `Some`, entropy-backed otherwise.
    pub fn from_seed_or_entropy(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => SimRng::new(s),
            None    => SimRng(SmallRng::from_entropy()),
        }
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Shuffle in place; used for the placement queue's equal-height ties.
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.0);
    }
}
