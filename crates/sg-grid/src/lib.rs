//! `sg-grid`: toroidal occupancy grid.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                      |
//! |-----------|---------------------------------------------------------------|
//! | [`grid`]  | `Grid` (occupancy map, torus neighbours, vacancies, mutators) |
//! | [`error`] | `GridError`, `GridResult<T>`                                  |

pub mod error;
pub mod grid;


pub use error::{GridError, GridResult};
pub use grid::Grid;
