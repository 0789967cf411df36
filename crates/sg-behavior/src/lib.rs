//! `sg-behavior`: how an agent judges a cell and decides whether to move.
//!
//! # Crate layout
//!
//! | Module           | Contents                                                   |
//! |------------------|------------------------------------------------------------|
//! | [`neighborhood`] | `Neighborhood`: same/opposite kind counts around a cell    |
//! | [`rule`]         | `HappinessRule` trait, `SimilarityRule`                    |
//! | [`outcome`]      | `Outcome`, `Action`: what an agent did on its turn         |
//! | [`decide`]       | `is_happy_at`, `attempt_move`                              |
//!
//! # Design notes
//!
//! Agents hold no reference to the world.  The grid and the agent store are
//! passed into [`is_happy_at`] and [`attempt_move`] by the simulation loop,
//! which owns both and hands out a mutable borrow only to the agent whose
//! turn it is.

pub mod decide;
pub mod neighborhood;
pub mod outcome;
pub mod rule;


pub use decide::{attempt_move, is_happy_at};
pub use neighborhood::Neighborhood;
pub use outcome::{Action, Outcome};
pub use rule::{HappinessRule, SimilarityRule};
