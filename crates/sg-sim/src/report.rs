//! Per-iteration tallies, integration metrics, and the final report.

use std::fmt;

use sg_agent::AgentStore;
use sg_behavior::{Action, HappinessRule, Neighborhood, Outcome, is_happy_at};
use sg_core::{AgentKind, Iteration};
use sg_grid::Grid;

// ── KindCounts ────────────────────────────────────────────────────────────────

/// A count split by agent kind.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct KindCounts {
    pub a: u32,
    pub b: u32,
}

impl KindCounts {
    #[inline]
    pub fn total(&self) -> u32 {
        self.a + self.b
    }

    #[inline]
    pub fn of(&self, kind: AgentKind) -> u32 {
        match kind {
            AgentKind::A => self.a,
            AgentKind::B => self.b,
        }
    }

    #[inline]
    fn bump(&mut self, kind: AgentKind) {
        match kind {
            AgentKind::A => self.a += 1,
            AgentKind::B => self.b += 1,
        }
    }
}

// ── IterationTally ────────────────────────────────────────────────────────────

/// Outcome counts for one iteration.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct IterationTally {
    /// Agents that were already happy on their turn.
    pub happy:          KindCounts,
    /// Agents that relocated.
    pub moved:          KindCounts,
    /// Unhappy agents that found no satisfying vacancy.
    pub stayed_unhappy: KindCounts,
}

impl IterationTally {
    /// Tally a full round of turn outcomes.
    pub fn from_outcomes(outcomes: &[Outcome]) -> Self {
        let mut tally = Self::default();
        for outcome in outcomes {
            let counts = match outcome.action {
                Action::StayedHappy => &mut tally.happy,
                Action::Moved => &mut tally.moved,
                Action::StayedUnhappy => &mut tally.stayed_unhappy,
            };
            counts.bump(outcome.kind);
        }
        tally
    }

    /// The pre-run row: who is happy where they were placed.  Nobody has
    /// moved or failed to move yet.
    pub fn initial<R: HappinessRule + ?Sized>(agents: &AgentStore, grid: &Grid, rule: &R) -> Self {
        let mut tally = Self::default();
        for agent in agents.agent_ids() {
            if is_happy_at(agents, grid, rule, agent, agents.location_of(agent)) {
                tally.happy.bump(agents.kind_of(agent));
            }
        }
        tally
    }
}

// ── IntegrationSnapshot ───────────────────────────────────────────────────────

/// Mean number of opposite-kind occupied neighbours per agent, overall and
/// per kind, each rounded to 2 decimals.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct IntegrationSnapshot {
    pub all: f64,
    pub a:   f64,
    pub b:   f64,
}

impl IntegrationSnapshot {
    /// Survey every agent at its current location.
    ///
    /// A kind with no agents reports `0.0`.
    pub fn measure(agents: &AgentStore, grid: &Grid) -> Self {
        let mut sum = [0u64; 2];
        let mut n = [0u64; 2];
        for agent in agents.agent_ids() {
            let hood = Neighborhood::survey(grid, agents, agent, agents.location_of(agent));
            let k = match agents.kind_of(agent) {
                AgentKind::A => 0,
                AgentKind::B => 1,
            };
            sum[k] += hood.opposite as u64;
            n[k] += 1;
        }
        Self {
            all: rounded_mean(sum[0] + sum[1], n[0] + n[1]),
            a:   rounded_mean(sum[0], n[0]),
            b:   rounded_mean(sum[1], n[1]),
        }
    }
}

/// `sum / n` rounded half-to-even at 2 decimals; `0.0` for an empty set.
pub(crate) fn rounded_mean(sum: u64, n: u64) -> f64 {
    if n == 0 {
        return 0.0;
    }
    (sum as f64 / n as f64 * 100.0).round_ties_even() / 100.0
}

// ── Termination ───────────────────────────────────────────────────────────────

/// Why a run stopped.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TerminationCause {
    /// Every agent was happy on its turn.
    AllHappy,
    /// Some agents are unhappy but none could move.
    Deadlock,
    /// `max_iterations` reached.
    BudgetExhausted,
}

/// The cause together with the iteration after which the run stopped.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Termination {
    pub cause:     TerminationCause,
    pub iteration: Iteration,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.iteration.0;
        match self.cause {
            TerminationCause::AllHappy => {
                write!(f, "Everyone is happy! Stopping after iteration {n}.")
            }
            TerminationCause::Deadlock => write!(
                f,
                "Some agents are unhappy, but they cannot find anywhere to move to. \
                 Stopping after iteration {n}."
            ),
            TerminationCause::BudgetExhausted => {
                write!(f, "Iteration budget exhausted. Stopping after iteration {n}.")
            }
        }
    }
}

// ── Report ────────────────────────────────────────────────────────────────────

/// Everything recorded during a run.
///
/// `snapshots[i]` and `tallies[i]` describe iteration `i`; index 0 is the
/// state right after placement.  Both vectors always have the same length
/// and only ever grow.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Report {
    pub snapshots:   Vec<IntegrationSnapshot>,
    pub tallies:     Vec<IterationTally>,
    /// `None` while the run is still going.
    pub termination: Option<Termination>,
}

impl Report {
    pub(crate) fn record(&mut self, snapshot: IntegrationSnapshot, tally: IterationTally) {
        self.snapshots.push(snapshot);
        self.tallies.push(tally);
    }

    /// Number of recorded rows (completed iterations plus the initial row).
    pub fn len(&self) -> usize {
        self.tallies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tallies.is_empty()
    }

    /// One value per iteration, extracted from the integration snapshots.
    pub fn integration_series(&self, f: impl Fn(&IntegrationSnapshot) -> f64) -> Vec<f64> {
        self.snapshots.iter().map(f).collect()
    }

    /// One value per iteration, extracted from the tallies.
    pub fn tally_series(&self, f: impl Fn(&IterationTally) -> u32) -> Vec<u32> {
        self.tallies.iter().map(f).collect()
    }
}

fn write_series<T: fmt::Display>(
    f:      &mut fmt::Formatter<'_>,
    label:  &str,
    values: impl IntoIterator<Item = T>,
) -> fmt::Result {
    let joined: Vec<String> = values.into_iter().map(|v| v.to_string()).collect();
    writeln!(f, "{label}: [{}]", joined.join(", "))
}

impl fmt::Display for Report {
    /// One labelled line per series, values in iteration order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fixed2 = |series: Vec<f64>| series.into_iter().map(|v| format!("{v:.2}"));
        writeln!(f, "All results begin at iteration 0 and go in order to the end.")?;
        writeln!(f)?;
        write_series(
            f,
            "Average number of neighbours of the other type",
            fixed2(self.integration_series(|s| s.all)),
        )?;
        write_series(
            f,
            "Average number of neighbours of the other type, type A agents",
            fixed2(self.integration_series(|s| s.a)),
        )?;
        write_series(
            f,
            "Average number of neighbours of the other type, type B agents",
            fixed2(self.integration_series(|s| s.b)),
        )?;
        write_series(f, "Happy agents", self.tally_series(|t| t.happy.total()))?;
        write_series(f, "Happy type A agents", self.tally_series(|t| t.happy.a))?;
        write_series(f, "Happy type B agents", self.tally_series(|t| t.happy.b))?;
        write_series(f, "Moves per iteration", self.tally_series(|t| t.moved.total()))?;
        write_series(f, "Type A moves per iteration", self.tally_series(|t| t.moved.a))?;
        write_series(f, "Type B moves per iteration", self.tally_series(|t| t.moved.b))?;
        write_series(
            f,
            "Agents who failed to find a new home",
            self.tally_series(|t| t.stayed_unhappy.total()),
        )?;
        write_series(
            f,
            "Type A agents who failed to find a new home",
            self.tally_series(|t| t.stayed_unhappy.a),
        )?;
        write_series(
            f,
            "Type B agents who failed to find a new home",
            self.tally_series(|t| t.stayed_unhappy.b),
        )
    }
}
