//! `sg-sim`: iteration loop orchestrator for the Schelling simulation.
//!
//! # Phases
//!
//! ```text
//! Initializing  SimBuilder::build
//!   validate config → size grid → build + place population
//!   → record iteration 0 (integration snapshot, initial happiness)
//! Running       Sim::step, once per iteration
//!   ① shuffle activation order
//!   ② every agent takes one turn (attempt_move), outcomes kept in order
//!   ③ integration snapshot
//!   ④ tally the six outcome codes
//!   ⑤ append to the report
//!   ⑥ termination check: all happy → deadlock → iteration budget
//! Terminated    no further mutation; the report is final
//! ```
//!
//! # Quick-start
//!
//! ```rust
//! use sg_core::SimConfig;
//! use sg_sim::{NoopObserver, SimBuilder};
//!
//! let config = SimConfig { verbose: false, ..SimConfig::default() };
//! let mut sim = SimBuilder::new(config).build()?;
//! let report = sim.run(&mut NoopObserver)?;
//! assert!(report.termination.is_some());
//! # Ok::<(), sg_sim::SimError>(())
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod report;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use report::{IntegrationSnapshot, IterationTally, KindCounts, Report, Termination, TerminationCause};
pub use sim::{Phase, Sim};
