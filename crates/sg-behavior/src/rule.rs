//! The `HappinessRule` trait: the extension point for the satisfaction test.

use sg_core::{AgentKind, PreferenceScale};

use crate::Neighborhood;

/// Decides whether an agent is content with a given neighbourhood.
///
/// The simulation loop only ever calls this through
/// [`is_happy_at`][crate::is_happy_at], which builds the [`Neighborhood`]
/// from the grid.  Implementations must be pure: the same inputs always give
/// the same answer.
///
/// # Example
///
/// ```rust
/// use sg_behavior::{HappinessRule, Neighborhood};
/// use sg_core::AgentKind;
///
/// /// Content anywhere with at least two neighbours.
/// struct Sociable;
///
/// impl HappinessRule for Sociable {
///     fn is_happy(&self, _kind: AgentKind, _preference: f64, hood: &Neighborhood) -> bool {
///         hood.total() >= 2
///     }
/// }
///
/// let hood = Neighborhood { same: 1, opposite: 1 };
/// assert!(Sociable.is_happy(AgentKind::A, 0.0, &hood));
/// ```
pub trait HappinessRule {
    fn is_happy(&self, kind: AgentKind, preference: f64, hood: &Neighborhood) -> bool;
}

/// The Schelling similarity test.
///
/// An agent with no occupied neighbour cells is never happy.  Otherwise it is
/// happy when the same-kind share, put on the configured
/// [`PreferenceScale`], meets or exceeds its preference.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SimilarityRule {
    pub scale: PreferenceScale,
}

impl SimilarityRule {
    pub fn new(scale: PreferenceScale) -> Self {
        Self { scale }
    }
}

impl HappinessRule for SimilarityRule {
    fn is_happy(&self, _kind: AgentKind, preference: f64, hood: &Neighborhood) -> bool {
        // Isolation is never satisfying; also guards the share's division.
        let Some(share) = hood.same_share() else {
            return false;
        };
        self.scale.scaled(share) >= preference
    }
}
