//! Simulation time model.
//!
//! Time is a monotonically increasing `Iteration` counter.  Iteration 0 is
//! the pre-run snapshot taken right after the population is placed; every
//! completed round of agent turns advances the counter by one.

use std::fmt;

/// An absolute iteration counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Iteration(pub u32);

impl Iteration {
    pub const ZERO: Iteration = Iteration(0);

    /// The iteration after `self`.
    #[inline]
    pub fn next(self) -> Iteration {
        Iteration(self.0 + 1)
    }

    /// Cast to `usize` for indexing into report series.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Iteration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "I{}", self.0)
    }
}
