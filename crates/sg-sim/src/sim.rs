//! The `Sim` struct and its iteration loop.

use sg_agent::AgentStore;
use sg_behavior::{HappinessRule, Outcome, SimilarityRule, attempt_move};
use sg_core::{AgentId, Iteration, SimConfig, SimRng};
use sg_grid::{Grid, GridResult};
use tracing::{debug, info};

use crate::{
    IntegrationSnapshot, IterationTally, Report, SimObserver, SimResult, Termination,
    TerminationCause,
};

/// Lifecycle state of a [`Sim`].  Initialisation happens inside
/// [`SimBuilder::build`][crate::SimBuilder::build], so a built `Sim` is
/// always in one of these two.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Running,
    /// Frozen: `step` is a no-op and the report is final.
    Terminated(Termination),
}

impl Phase {
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Phase::Running)
    }
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// Each call to [`step`](Self::step) runs one iteration:
///
/// 1. Shuffle the activation order with the shared [`SimRng`].
/// 2. Every agent, in that order, takes one turn via [`attempt_move`].
///    Moves are visible to agents later in the same iteration.
/// 3. Measure integration and tally the outcomes; append both to the report.
/// 4. Check termination: all happy, then deadlock, then the budget.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<R: HappinessRule = SimilarityRule> {
    pub(crate) config:    SimConfig,
    pub(crate) grid:      Grid,
    pub(crate) agents:    AgentStore,
    pub(crate) rule:      R,
    pub(crate) rng:       SimRng,
    /// Activation order, reshuffled in place each iteration.
    pub(crate) order:     Vec<AgentId>,
    /// Last completed iteration; `ZERO` right after build.
    pub(crate) iteration: Iteration,
    pub(crate) phase:     Phase,
    pub(crate) report:    Report,
}

impl<R: HappinessRule> Sim<R> {
    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn agents(&self) -> &AgentStore {
        &self.agents
    }

    pub fn rule(&self) -> &R {
        &self.rule
    }

    pub fn iteration(&self) -> Iteration {
        self.iteration
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn report(&self) -> &Report {
        &self.report
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run iterations until the simulation terminates.
    ///
    /// Calls `on_sim_end` once at the end and, when `config.verbose` is set,
    /// prints the report to stdout.  Use [`NoopObserver`][crate::NoopObserver]
    /// if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<&Report> {
        let termination = loop {
            if let Phase::Terminated(t) = self.step(observer)? {
                break t;
            }
        };
        observer.on_sim_end(termination, &self.report);
        if self.config.verbose {
            println!("{termination}");
            println!("{}", self.report);
        }
        Ok(&self.report)
    }

    /// Run exactly one iteration and return the resulting phase.
    ///
    /// Once terminated, returns the frozen phase without touching any state.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Phase> {
        if !self.phase.is_running() {
            return Ok(self.phase);
        }

        let now = self.iteration.next();
        observer.on_iteration_start(now);

        self.rng.shuffle(&mut self.order);
        let outcomes = self.take_turns()?;

        let snapshot = IntegrationSnapshot::measure(&self.agents, &self.grid);
        let tally = IterationTally::from_outcomes(&outcomes);
        self.report.record(snapshot, tally);
        self.iteration = now;

        debug!(
            iteration = now.0,
            happy = tally.happy.total(),
            moved = tally.moved.total(),
            stayed_unhappy = tally.stayed_unhappy.total(),
            integration = snapshot.all,
            "iteration complete",
        );
        observer.on_iteration_end(now, &tally, &snapshot);

        if tally.happy.total() as usize == self.agents.count {
            self.terminate(TerminationCause::AllHappy);
        } else if tally.moved.total() == 0 && tally.stayed_unhappy.total() > 0 {
            self.terminate(TerminationCause::Deadlock);
        } else if now.0 >= self.config.max_iterations {
            self.terminate(TerminationCause::BudgetExhausted);
        }

        Ok(self.phase)
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Every agent takes one turn in the current activation order.
    fn take_turns(&mut self) -> GridResult<Vec<Outcome>> {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let agents = &mut self.agents;
        let grid   = &mut self.grid;
        let rule   = &self.rule;

        self.order
            .iter()
            .map(|&agent| attempt_move(&mut *agents, &mut *grid, rule, agent))
            .collect()
    }

    pub(crate) fn terminate(&mut self, cause: TerminationCause) {
        let termination = Termination { cause, iteration: self.iteration };
        info!(cause = ?cause, iteration = self.iteration.0, "simulation terminated");
        self.report.termination = Some(termination);
        self.phase = Phase::Terminated(termination);
    }
}
