//! Deterministic simulation RNG.
//!
//! The only randomness in a boarding run is the shuffle that produces a
//! random boarding order, so a single seeded `SmallRng` is enough.  The same
//! seed always produces the same order, which makes every run reproducible
//! from `(layout, seed)` alone.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seeded RNG for boarding-order shuffles and any other global randomness.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }
}
