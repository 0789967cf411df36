//! `sg-core`: foundational types for the Schelling segregation simulation.
//!
//! This crate is a dependency of every other `sg-*` crate.  It intentionally
//! has no `sg-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`coord`]       | `Coord` grid key                                      |
//! | [`kind`]        | `AgentKind` (type A / type B)                         |
//! | [`iteration`]   | `Iteration` counter                                   |
//! | [`config`]      | `SimConfig`, `PreferenceScale`                        |
//! | [`rng`]         | `SimRng` (single shared source)                       |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod coord;
pub mod error;
pub mod ids;
pub mod iteration;
pub mod kind;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{PreferenceScale, SimConfig};
pub use coord::Coord;
pub use error::{CoreError, CoreResult};
pub use ids::AgentId;
pub use iteration::Iteration;
pub use kind::AgentKind;
pub use rng::SimRng;
