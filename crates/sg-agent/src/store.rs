//! Core agent storage.
//!
//! Every `Vec` field has exactly `count` elements; the `AgentId` value is the
//! index into all of them:
//!
//! ```ignore
//! let here = store.location[agent.index()];
//! ```
//!
//! Kind and preference are written once by [`PopulationBuilder`] and never
//! change.  `location` changes only through [`AgentStore::relocate`], which
//! moves the grid occupant in the same step.
//!
//! [`PopulationBuilder`]: crate::PopulationBuilder

use sg_core::{AgentId, AgentKind, Coord};
use sg_grid::{Grid, GridResult};

/// Structure-of-Arrays storage for all agent state.
#[derive(Clone, Debug, PartialEq)]
pub struct AgentStore {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    /// Type tag of each agent.
    pub kind: Vec<AgentKind>,

    /// Same-kind preference threshold of each agent.
    pub preference: Vec<f64>,

    /// Current cell.  `Coord::UNPLACED` before initial placement.
    pub location: Vec<Coord>,
}

impl AgentStore {
    /// Build a store from per-agent `(kind, preference)` pairs.
    ///
    /// Agent `i` gets `AgentId(i)`; every location starts `UNPLACED`.
    pub fn from_traits(traits: Vec<(AgentKind, f64)>) -> Self {
        let count = traits.len();
        let (kind, preference): (Vec<AgentKind>, Vec<f64>) = traits.into_iter().unzip();
        Self {
            count,
            kind,
            preference,
            location: vec![Coord::UNPLACED; count],
        }
    }

    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    #[inline]
    pub fn kind_of(&self, agent: AgentId) -> AgentKind {
        self.kind[agent.index()]
    }

    #[inline]
    pub fn preference_of(&self, agent: AgentId) -> f64 {
        self.preference[agent.index()]
    }

    #[inline]
    pub fn location_of(&self, agent: AgentId) -> Coord {
        self.location[agent.index()]
    }

    /// Number of agents of `kind`.
    pub fn count_of(&self, kind: AgentKind) -> usize {
        self.kind.iter().filter(|&&k| k == kind).count()
    }

    // ── Placement ─────────────────────────────────────────────────────────

    /// Put an unplaced agent into the empty cell `loc`.
    pub fn place(&mut self, grid: &mut Grid, agent: AgentId, loc: Coord) -> GridResult<()> {
        grid.place(agent, loc)?;
        self.location[agent.index()] = loc;
        Ok(())
    }

    /// Move `agent` from its current cell to the empty cell `to`.
    ///
    /// The grid is validated before it changes, and the recorded location is
    /// only updated once the grid move succeeded, so the two never disagree.
    pub fn relocate(&mut self, grid: &mut Grid, agent: AgentId, to: Coord) -> GridResult<()> {
        let from = self.location[agent.index()];
        grid.relocate(from, to)?;
        self.location[agent.index()] = to;
        Ok(())
    }

    /// `true` if the grid and the recorded locations are in 1:1 agreement:
    /// the occupied-cell count equals the population and every agent's
    /// location cell holds exactly that agent.
    pub fn is_consistent_with(&self, grid: &Grid) -> bool {
        grid.occupied_count() == self.count
            && self
                .agent_ids()
                .all(|agent| grid.occupant_at(self.location_of(agent)) == Some(agent))
    }
}
