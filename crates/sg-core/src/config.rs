//! Simulation configuration.

use crate::{CoreError, CoreResult};

// ── PreferenceScale ───────────────────────────────────────────────────────────

/// How a stored preference is compared against the same-kind neighbour share.
///
/// The reference model stores preferences as small decimals (e.g. `0.4`) but
/// compares them against the share expressed as a percentage (0–100).  Under
/// that rule any agent with at least one same-kind neighbour is effectively
/// satisfied.  `Percent` keeps that behaviour; `Fraction` compares the 0–1
/// share directly.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PreferenceScale {
    /// `share * 100 >= preference`.
    #[default]
    Percent,
    /// `share >= preference`.
    Fraction,
}

impl PreferenceScale {
    /// Apply the scale to a same-kind share in `[0, 1]`.
    #[inline]
    pub fn scaled(self, share: f64) -> f64 {
        match self {
            PreferenceScale::Percent => share * 100.0,
            PreferenceScale::Fraction => share,
        }
    }
}

/// Number of type-A agents in a population of `count`:
/// `count * proportion_a`, rounded half to even and clamped to `[0, count]`.
pub fn type_a_count(count: usize, proportion_a: f64) -> usize {
    let n = (count as f64 * proportion_a).round_ties_even();
    (n.max(0.0) as usize).min(count)
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Immutable once handed to the simulation builder.  `Default` yields the
/// reference run: a 20×20 torus, 380 agents, 60 % type A.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Grid width (x axis).
    pub width: u32,

    /// Grid height (y axis).
    pub height: u32,

    /// Total number of agents.  Must be strictly less than `width * height`.
    pub agent_count: usize,

    /// Share of the population that is type A, in `[0, 1]`.
    pub proportion_a: f64,

    /// Same-kind preference of type-A agents.
    pub preference_a: f64,

    /// Same-kind preference of type-B agents.
    pub preference_b: f64,

    /// Upper bound on the number of iterations after the initial snapshot.
    pub max_iterations: u32,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Print the human-readable report to stdout when the run ends.
    pub verbose: bool,

    /// Scale on which preferences are compared.
    pub preference_scale: PreferenceScale,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width:            20,
            height:           20,
            agent_count:      380,
            proportion_a:     0.6,
            preference_a:     0.4,
            preference_b:     0.3,
            max_iterations:   100,
            seed:             42,
            verbose:          true,
            preference_scale: PreferenceScale::Percent,
        }
    }
}

impl SimConfig {
    /// Total number of grid cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Number of type-A agents.  See [`type_a_count`].
    pub fn count_a(&self) -> usize {
        type_a_count(self.agent_count, self.proportion_a)
    }

    /// Number of type-B agents.
    #[inline]
    pub fn count_b(&self) -> usize {
        self.agent_count - self.count_a()
    }

    /// Check value ranges.  Grid capacity is checked by the grid itself.
    pub fn validate(&self) -> CoreResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(CoreError::Config(format!(
                "grid dimensions must be non-zero (got {}x{})",
                self.width, self.height
            )));
        }
        if !(0.0..=1.0).contains(&self.proportion_a) {
            return Err(CoreError::Config(format!(
                "proportion_a must lie in [0, 1] (got {})",
                self.proportion_a
            )));
        }
        for (name, value) in [("preference_a", self.preference_a), ("preference_b", self.preference_b)] {
            if !value.is_finite() || value < 0.0 {
                return Err(CoreError::Config(format!(
                    "{name} must be a finite non-negative number (got {value})"
                )));
            }
        }
        Ok(())
    }
}
