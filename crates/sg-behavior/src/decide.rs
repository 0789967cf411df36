//! Happiness evaluation and the move decision.

use sg_agent::AgentStore;
use sg_core::{AgentId, Coord};
use sg_grid::{Grid, GridResult};

use crate::{Action, HappinessRule, Neighborhood, Outcome};

/// Would `agent` be happy at `loc`?
///
/// Pass the agent's current location to ask whether it is happy now.  Reads
/// the grid and store only.
pub fn is_happy_at<R: HappinessRule + ?Sized>(
    agents: &AgentStore,
    grid:   &Grid,
    rule:   &R,
    agent:  AgentId,
    loc:    Coord,
) -> bool {
    let hood = Neighborhood::survey(grid, agents, agent, loc);
    rule.is_happy(agents.kind_of(agent), agents.preference_of(agent), &hood)
}

/// Give `agent` its turn.
///
/// - Happy where it stands → [`Action::StayedHappy`], nothing changes.
/// - Otherwise scan `grid.vacancies()` in enumeration order and relocate to
///   the first cell where it would be happy → [`Action::Moved`].
/// - No such cell → [`Action::StayedUnhappy`], nothing changes.
///
/// Candidate cells are judged without the agent itself: a vacancy next to
/// its current cell does not count the agent as its own neighbour, so such
/// a cell can lose its place in the scan to one further down the order.
///
/// The grid is mutated at most once, and only on `Moved`.  An error means
/// the grid has no vacancy at all, which the sizing check rules out.
pub fn attempt_move<R: HappinessRule + ?Sized>(
    agents: &mut AgentStore,
    grid:   &mut Grid,
    rule:   &R,
    agent:  AgentId,
) -> GridResult<Outcome> {
    let kind = agents.kind_of(agent);
    let here = agents.location_of(agent);

    if is_happy_at(agents, grid, rule, agent, here) {
        return Ok(Outcome::new(kind, Action::StayedHappy));
    }

    let target = grid
        .vacancies()?
        .into_iter()
        .find(|&loc| is_happy_at(agents, grid, rule, agent, loc));

    match target {
        Some(to) => {
            agents.relocate(grid, agent, to)?;
            Ok(Outcome::new(kind, Action::Moved))
        }
        None => Ok(Outcome::new(kind, Action::StayedUnhappy)),
    }
}
