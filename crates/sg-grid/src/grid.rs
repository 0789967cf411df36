//! Occupancy grid with torus neighbour semantics.
//!
//! # Data layout
//!
//! Cells live in one flat `Vec<Option<AgentId>>` in x-major order:
//!
//! ```text
//! index(x, y) = x * height + y
//! ```
//!
//! The same order is used to enumerate vacancies, so a vacancy scan visits
//! `(0,0), (0,1), …, (0,H-1), (1,0), …`.  Movers take the first satisfying
//! vacancy in that order, which makes the scan order part of the model.

use sg_core::{AgentId, Coord, SimRng};

use crate::{GridError, GridResult};

/// The 8 neighbour offsets: E, W, N, S, then the four diagonals.
const OFFSETS_8: [(i64, i64); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// A `width × height` torus of cells, each empty or holding one agent.
///
/// The grid only knows which agent sits where.  Agents' own record of their
/// location lives in `sg_agent::AgentStore`; the two are kept in step by
/// routing every move through [`Grid::relocate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width:    u32,
    height:   u32,
    cells:    Vec<Option<AgentId>>,
    occupied: usize,
}

impl Grid {
    /// An empty grid.  Fails if either dimension is zero.
    pub fn new(width: u32, height: u32) -> GridResult<Self> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid { width, height });
        }
        let cells = vec![None; width as usize * height as usize];
        Ok(Self { width, height, cells, occupied: 0 })
    }

    /// An empty grid sized for `population` agents.
    ///
    /// The cell count must strictly exceed the population so that at least
    /// one vacancy exists at all times.
    pub fn for_population(width: u32, height: u32, population: usize) -> GridResult<Self> {
        let grid = Self::new(width, height)?;
        if grid.cell_count() <= population {
            return Err(GridError::TooSmall { cells: grid.cell_count(), population });
        }
        Ok(grid)
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of cells currently holding an agent.
    pub fn occupied_count(&self) -> usize {
        self.occupied
    }

    /// `true` if `loc` lies inside the grid.
    #[inline]
    pub fn contains(&self, loc: Coord) -> bool {
        loc.x < self.width && loc.y < self.height
    }

    // ── Neighbourhood ─────────────────────────────────────────────────────

    /// The 8 cells around `loc`, each axis wrapped independently.
    ///
    /// A component below 0 wraps to the last index on its axis, one above
    /// the last index wraps to 0.  Occupancy is not consulted.  On an axis of
    /// length 1 or 2 the wrapped coordinates repeat (or equal `loc`); all
    /// eight entries are returned regardless.
    pub fn neighbors(&self, loc: Coord) -> [Coord; 8] {
        debug_assert!(self.contains(loc), "neighbors of off-grid {loc}");
        OFFSETS_8.map(|(dx, dy)| Coord {
            x: wrap_axis(loc.x as i64 + dx, self.width),
            y: wrap_axis(loc.y as i64 + dy, self.height),
        })
    }

    // ── Occupancy queries ─────────────────────────────────────────────────

    /// The agent at `loc`, or `None` if the cell is empty or off-grid.
    #[inline]
    pub fn occupant_at(&self, loc: Coord) -> Option<AgentId> {
        if !self.contains(loc) {
            return None;
        }
        self.cells[self.index(loc)]
    }

    /// Every empty cell, in enumeration order.
    ///
    /// Fails with [`GridError::NoVacancy`] if the grid is full.
    pub fn vacancies(&self) -> GridResult<Vec<Coord>> {
        let empties: Vec<Coord> = self
            .cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| self.coord_at(i))
            .collect();
        if empties.is_empty() {
            return Err(GridError::NoVacancy);
        }
        Ok(empties)
    }

    /// One uniformly random empty cell.
    pub fn random_vacancy(&self, rng: &mut SimRng) -> GridResult<Coord> {
        let empties = self.vacancies()?;
        rng.choose(&empties).copied().ok_or(GridError::NoVacancy)
    }

    /// Iterator over `(location, agent)` for every occupied cell.
    pub fn occupants(&self) -> impl Iterator<Item = (Coord, AgentId)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, cell)| cell.map(|agent| (self.coord_at(i), agent)))
    }

    // ── Mutators ──────────────────────────────────────────────────────────

    /// Put `agent` into the empty cell `loc`.
    pub fn place(&mut self, agent: AgentId, loc: Coord) -> GridResult<()> {
        let idx = self.checked_index(loc)?;
        if let Some(occupant) = self.cells[idx] {
            return Err(GridError::Occupied { loc, occupant });
        }
        self.cells[idx] = Some(agent);
        self.occupied += 1;
        Ok(())
    }

    /// Empty the cell `loc`, returning the agent that was there.
    pub fn vacate(&mut self, loc: Coord) -> GridResult<AgentId> {
        let idx = self.checked_index(loc)?;
        let agent = self.cells[idx].take().ok_or(GridError::Unoccupied(loc))?;
        self.occupied -= 1;
        Ok(agent)
    }

    /// Move the occupant of `from` into the empty cell `to`.
    ///
    /// Both cells are validated before anything changes, so on error the
    /// grid is untouched.
    pub fn relocate(&mut self, from: Coord, to: Coord) -> GridResult<AgentId> {
        let from_idx = self.checked_index(from)?;
        let to_idx = self.checked_index(to)?;
        let agent = self.cells[from_idx].ok_or(GridError::Unoccupied(from))?;
        if let Some(occupant) = self.cells[to_idx] {
            return Err(GridError::Occupied { loc: to, occupant });
        }
        self.cells[from_idx] = None;
        self.cells[to_idx] = Some(agent);
        Ok(agent)
    }

    // ── Indexing helpers ──────────────────────────────────────────────────

    #[inline]
    fn index(&self, loc: Coord) -> usize {
        loc.x as usize * self.height as usize + loc.y as usize
    }

    #[inline]
    fn coord_at(&self, index: usize) -> Coord {
        let h = self.height as usize;
        Coord::new((index / h) as u32, (index % h) as u32)
    }

    fn checked_index(&self, loc: Coord) -> GridResult<usize> {
        if !self.contains(loc) {
            return Err(GridError::OutOfBounds(loc));
        }
        Ok(self.index(loc))
    }
}

/// Torus wrap for a single `±1` step along an axis of length `len`.
#[inline]
fn wrap_axis(v: i64, len: u32) -> u32 {
    let max = len as i64 - 1;
    if v < 0 {
        max as u32
    } else if v > max {
        0
    } else {
        v as u32
    }
}
