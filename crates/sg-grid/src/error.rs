//! Grid error type.

use thiserror::Error;

use sg_core::{AgentId, Coord};

/// Errors produced by `sg-grid`.
///
/// `TooSmall` is a configuration error raised before a run starts.
/// `NoVacancy` during a run means the sizing invariant was broken.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid dimensions must be non-zero (got {width}x{height})")]
    EmptyGrid { width: u32, height: u32 },

    #[error("grid of {cells} cells is too small for {population} agents; it needs at least one spare cell")]
    TooSmall { cells: usize, population: usize },

    #[error("coordinate {0} lies outside the grid")]
    OutOfBounds(Coord),

    #[error("no vacant cell left on the grid")]
    NoVacancy,

    #[error("cell {loc} is already occupied by {occupant}")]
    Occupied { loc: Coord, occupant: AgentId },

    #[error("cell {0} is not occupied")]
    Unoccupied(Coord),
}

pub type GridResult<T> = Result<T, GridError>;
