//! Simulation observer trait for progress reporting and data collection.

use sg_core::Iteration;

use crate::{IntegrationSnapshot, IterationTally, Report, Termination};

/// Callbacks invoked by [`Sim::step`][crate::Sim::step] and
/// [`Sim::run`][crate::Sim::run].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_iteration_end(&mut self, it: Iteration, tally: &IterationTally, _: &IntegrationSnapshot) {
///         println!("{it}: {} moved, {} happy", tally.moved.total(), tally.happy.total());
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before the activation order is shuffled.
    fn on_iteration_start(&mut self, _iteration: Iteration) {}

    /// Called once the iteration's outcomes and snapshot are recorded, before
    /// the termination check.
    fn on_iteration_end(
        &mut self,
        _iteration: Iteration,
        _tally:     &IterationTally,
        _snapshot:  &IntegrationSnapshot,
    ) {}

    /// Called by `run` once the simulation has terminated.
    fn on_sim_end(&mut self, _termination: Termination, _report: &Report) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
