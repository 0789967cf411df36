//! Builder for constructing a [`Sim`].

use sg_agent::PopulationBuilder;
use sg_behavior::{HappinessRule, SimilarityRule};
use sg_core::{Iteration, SimConfig, SimRng};
use sg_grid::Grid;
use tracing::info;

use crate::{IntegrationSnapshot, IterationTally, Phase, Report, Sim, SimResult, TerminationCause};

/// Builder for [`Sim<R>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: grid size, population mix, preferences, budget, seed
///
/// # Optional inputs
///
/// | Constructor               | Rule                                        |
/// |---------------------------|---------------------------------------------|
/// | `SimBuilder::new(c)`      | `SimilarityRule::new(c.preference_scale)`   |
/// | `SimBuilder::with_rule`   | any `R: HappinessRule`                      |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(SimConfig::default()).build()?;
/// let report = sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<R: HappinessRule> {
    config: SimConfig,
    rule:   R,
}

impl SimBuilder<SimilarityRule> {
    /// Use the standard same-kind share rule on the config's scale.
    pub fn new(config: SimConfig) -> Self {
        let rule = SimilarityRule::new(config.preference_scale);
        Self { config, rule }
    }
}

impl<R: HappinessRule> SimBuilder<R> {
    /// Use a custom happiness predicate.
    pub fn with_rule(config: SimConfig, rule: R) -> Self {
        Self { config, rule }
    }

    /// Validate the config, size the grid, place the population, and record
    /// iteration 0.
    ///
    /// # Errors
    ///
    /// - [`SimError::Config`][crate::SimError::Config] for an invalid config.
    /// - [`SimError::Grid`][crate::SimError::Grid] when the grid has no more
    ///   cells than agents.
    pub fn build(self) -> SimResult<Sim<R>> {
        let config = self.config;
        config.validate()?;

        let mut grid = Grid::for_population(config.width, config.height, config.agent_count)?;
        let mut rng = SimRng::new(config.seed);
        let agents = PopulationBuilder::from_config(&config).build(&mut grid, &mut rng)?;

        // ── Iteration 0: state right after placement ──────────────────────
        let snapshot = IntegrationSnapshot::measure(&agents, &grid);
        let tally = IterationTally::initial(&agents, &grid, &self.rule);
        let mut report = Report::default();
        report.record(snapshot, tally);

        info!(
            width = config.width,
            height = config.height,
            agents = agents.count,
            happy = tally.happy.total(),
            integration = snapshot.all,
            seed = config.seed,
            "simulation initialised",
        );

        let mut sim = Sim {
            order: agents.agent_ids().collect(),
            config,
            grid,
            agents,
            rule: self.rule,
            rng,
            iteration: Iteration::ZERO,
            phase: Phase::Running,
            report,
        };
        if sim.config.max_iterations == 0 {
            sim.terminate(TerminationCause::BudgetExhausted);
        }
        Ok(sim)
    }
}
