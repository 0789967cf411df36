//! segregation: the reference Schelling run.
//!
//! 380 agents on a 20×20 torus, 60 % type A.  A wants at least 0.4 of its
//! neighbours to be its own kind, B at least 0.3, both on the percent scale.
//! Pass a seed as the first argument to vary the layout; set `RUST_LOG=debug`
//! to see every iteration.

use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use sg_core::{Iteration, SimConfig};
use sg_sim::{IntegrationSnapshot, IterationTally, SimBuilder, SimObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const WIDTH:          u32   = 20;
const HEIGHT:         u32   = 20;
const AGENT_COUNT:    usize = 380;
const PROPORTION_A:   f64   = 0.6;
const PREFERENCE_A:   f64   = 0.4;
const PREFERENCE_B:   f64   = 0.3;
const MAX_ITERATIONS: u32   = 100;
const DEFAULT_SEED:   u64   = 42;

// ── Observer ──────────────────────────────────────────────────────────────────

/// Logs a one-line progress summary per iteration.
struct ProgressLogger;

impl SimObserver for ProgressLogger {
    fn on_iteration_end(&mut self, iteration: Iteration, tally: &IterationTally, snapshot: &IntegrationSnapshot) {
        info!(
            %iteration,
            happy = tally.happy.total(),
            moved = tally.moved.total(),
            stuck = tally.stayed_unhappy.total(),
            integration = snapshot.all,
            "progress",
        );
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();

    let seed = match std::env::args().nth(1) {
        Some(arg) => arg.parse().with_context(|| format!("invalid seed {arg:?}"))?,
        None => DEFAULT_SEED,
    };

    let config = SimConfig {
        width:          WIDTH,
        height:         HEIGHT,
        agent_count:    AGENT_COUNT,
        proportion_a:   PROPORTION_A,
        preference_a:   PREFERENCE_A,
        preference_b:   PREFERENCE_B,
        max_iterations: MAX_ITERATIONS,
        seed,
        verbose:        true,
        ..SimConfig::default()
    };
    println!("=== segregation: Schelling model ===");
    println!(
        "Grid: {WIDTH}×{HEIGHT}  |  Agents: {AGENT_COUNT} ({} A, {} B)  |  Seed: {seed}",
        config.count_a(),
        config.count_b(),
    );
    println!();

    let mut sim = SimBuilder::new(config).build()?;

    let t0 = Instant::now();
    let report = sim.run(&mut ProgressLogger)?;
    let elapsed = t0.elapsed();

    if let Some(termination) = report.termination {
        info!(
            cause = ?termination.cause,
            iterations = termination.iteration.0,
            elapsed_ms = elapsed.as_millis() as u64,
            "run finished",
        );
    }
    Ok(())
}
