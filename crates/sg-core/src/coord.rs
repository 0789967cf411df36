//! Grid coordinate.

use std::fmt;

/// An `(x, y)` cell coordinate with `0 <= x < width` and `0 <= y < height`.
///
/// Coordinates are unsigned; torus wrapping is resolved by the grid, which
/// knows the dimensions.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: u32,
    pub y: u32,
}

impl Coord {
    /// Sentinel for an agent that has not been placed on the grid yet.
    pub const UNPLACED: Coord = Coord { x: u32::MAX, y: u32::MAX };

    #[inline]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_placed(self) -> bool {
        self != Self::UNPLACED
    }
}

impl From<(u32, u32)> for Coord {
    #[inline]
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
