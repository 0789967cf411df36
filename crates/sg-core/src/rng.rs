//! Deterministic simulation-level RNG wrapper.
//!
//! The model draws every random number from a single shared source:
//! the population shuffle, initial placement, and the per-iteration
//! activation order.  Agents act one at a time, so there is no per-agent
//! stream and no synchronisation.  The same seed always reproduces the same
//! run.

use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Simulation-level RNG.  Used only from the single simulation thread.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }

    /// Choose a uniformly random element.  `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
