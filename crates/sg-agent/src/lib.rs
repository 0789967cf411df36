//! `sg-agent`: Structure-of-Arrays agent storage and population builder.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`store`]   | `AgentStore` (SoA arrays: kind, preference, location)        |
//! | [`builder`] | `PopulationBuilder` (typed population + random placement)    |

pub mod builder;
pub mod store;

#[cfg(test)]
mod tests;

pub use builder::PopulationBuilder;
pub use store::AgentStore;
