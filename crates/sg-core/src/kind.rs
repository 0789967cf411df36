//! Agent type tag.

use std::fmt;

/// The two agent populations of the model.
///
/// Kind is fixed at population-build time and never changes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentKind {
    A,
    B,
}

impl AgentKind {
    /// Both kinds, in reporting order.
    pub const ALL: [AgentKind; 2] = [AgentKind::A, AgentKind::B];

    /// The other kind.
    #[inline]
    pub fn opposite(self) -> AgentKind {
        match self {
            AgentKind::A => AgentKind::B,
            AgentKind::B => AgentKind::A,
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AgentKind::A => "A",
            AgentKind::B => "B",
        };
        f.write_str(s)
    }
}
