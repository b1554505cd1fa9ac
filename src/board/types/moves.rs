//! Move type.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;

/// A move from one square to another. No special-move flags.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    /// Absolute row distance
    #[inline]
    #[must_use]
    pub const fn row_diff(self) -> usize {
        self.from.0.abs_diff(self.to.0)
    }

    /// Absolute column distance
    #[inline]
    #[must_use]
    pub const fn col_diff(self) -> usize {
        self.from.1.abs_diff(self.to.1)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}
