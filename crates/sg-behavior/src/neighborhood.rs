//! Neighbour composition around a cell, as seen by one agent.

use sg_agent::AgentStore;
use sg_core::{AgentId, Coord};
use sg_grid::Grid;

/// Occupied-neighbour counts around a cell, split by kind relative to the
/// surveying agent.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Neighborhood {
    /// Occupied neighbour cells holding an agent of the surveyor's kind.
    pub same:     u32,
    /// Occupied neighbour cells holding an agent of the other kind.
    pub opposite: u32,
}

impl Neighborhood {
    /// Count the occupants of `grid.neighbors(at)` by kind relative to
    /// `subject`.
    ///
    /// The subject itself is never counted.  This matters when `at` is next
    /// to the subject's current cell (it is about to leave it) and on grids
    /// narrow enough that a cell neighbours itself.  A coordinate that wraps
    /// onto the same cell more than once is counted once per appearance.
    pub fn survey(grid: &Grid, agents: &AgentStore, subject: AgentId, at: Coord) -> Self {
        let kind = agents.kind_of(subject);
        let mut hood = Neighborhood::default();
        for cell in grid.neighbors(at) {
            match grid.occupant_at(cell) {
                Some(other) if other != subject => {
                    if agents.kind_of(other) == kind {
                        hood.same += 1;
                    } else {
                        hood.opposite += 1;
                    }
                }
                _ => {}
            }
        }
        hood
    }

    /// Total occupied neighbour cells.
    #[inline]
    pub fn total(&self) -> u32 {
        self.same + self.opposite
    }

    /// Share of occupied neighbours that are the same kind, in `[0, 1]`.
    ///
    /// `None` when no neighbour cell is occupied.
    pub fn same_share(&self) -> Option<f64> {
        match self.total() {
            0 => None,
            total => Some(self.same as f64 / total as f64),
        }
    }
}
