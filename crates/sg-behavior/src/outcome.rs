//! Agent outcomes: what an agent did with its turn.

use std::fmt;

use sg_core::AgentKind;

/// The three things an agent can do on its turn.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// Already happy where it stands; did nothing.
    StayedHappy,
    /// Unhappy, but no vacancy would satisfy it; did not move.
    StayedUnhappy,
    /// Unhappy, and relocated to the first satisfying vacancy.
    Moved,
}

/// A turn result tagged with the acting agent's kind.
///
/// Kind × action gives six distinct outcomes, which the simulation loop
/// tallies into totals and per-kind counts.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Outcome {
    pub kind:   AgentKind,
    pub action: Action,
}

impl Outcome {
    #[inline]
    pub fn new(kind: AgentKind, action: Action) -> Self {
        Self { kind, action }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::StayedHappy => "stayed-happy",
            Action::StayedUnhappy => "stayed-unhappy",
            Action::Moved => "moved",
        };
        f.write_str(s)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.action, self.kind)
    }
}
