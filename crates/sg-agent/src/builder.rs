//! Fluent builder that creates the typed population and scatters it over
//! the grid.
//!
//! # Usage
//!
//! ```rust
//! use sg_agent::PopulationBuilder;
//! use sg_core::SimRng;
//! use sg_grid::Grid;
//!
//! let mut grid = Grid::for_population(20, 20, 380).unwrap();
//! let mut rng = SimRng::new(42);
//! let store = PopulationBuilder::new(380)
//!     .proportion_a(0.6)
//!     .preferences(0.4, 0.3)
//!     .build(&mut grid, &mut rng)
//!     .unwrap();
//!
//! assert_eq!(store.count, 380);
//! assert_eq!(grid.occupied_count(), 380);
//! ```

use tracing::debug;

use sg_core::config::type_a_count;
use sg_core::{AgentId, AgentKind, SimConfig, SimRng};
use sg_grid::{Grid, GridResult};

use crate::AgentStore;

/// Fluent builder for a placed [`AgentStore`].
pub struct PopulationBuilder {
    count:        usize,
    proportion_a: f64,
    preference_a: f64,
    preference_b: f64,
}

impl PopulationBuilder {
    /// A builder for `count` agents, all type A with preference `0` until
    /// configured otherwise.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            proportion_a: 1.0,
            preference_a: 0.0,
            preference_b: 0.0,
        }
    }

    /// Population parameters taken from a run configuration.
    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(config.agent_count)
            .proportion_a(config.proportion_a)
            .preferences(config.preference_a, config.preference_b)
    }

    /// Share of the population that is type A.
    pub fn proportion_a(mut self, proportion: f64) -> Self {
        self.proportion_a = proportion;
        self
    }

    /// Same-kind preferences for type A and type B agents.
    pub fn preferences(mut self, preference_a: f64, preference_b: f64) -> Self {
        self.preference_a = preference_a;
        self.preference_b = preference_b;
        self
    }

    /// Number of type-A agents the builder will create.
    pub fn count_a(&self) -> usize {
        type_a_count(self.count, self.proportion_a)
    }

    /// Create the agents, shuffle them, and place each on a random vacancy.
    ///
    /// The first `count_a()` agents in construction order are type A; the
    /// shuffle then decides which `AgentId` each one receives and so the
    /// order in which they are placed.  Placement draws one random vacancy
    /// per agent from the shared `rng`.
    pub fn build(self, grid: &mut Grid, rng: &mut SimRng) -> GridResult<AgentStore> {
        let count_a = self.count_a();
        let mut traits: Vec<(AgentKind, f64)> = (0..self.count)
            .map(|i| {
                if i < count_a {
                    (AgentKind::A, self.preference_a)
                } else {
                    (AgentKind::B, self.preference_b)
                }
            })
            .collect();
        rng.shuffle(&mut traits);

        let mut store = AgentStore::from_traits(traits);
        for i in 0..store.count {
            let loc = grid.random_vacancy(rng)?;
            store.place(grid, AgentId(i as u32), loc)?;
        }

        debug_assert!(store.is_consistent_with(grid), "placement broke grid/agent agreement");
        debug!(
            agents = store.count,
            type_a = count_a,
            type_b = store.count - count_a,
            cells = grid.cell_count(),
            "population placed",
        );
        Ok(store)
    }
}
