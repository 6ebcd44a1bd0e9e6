//! The simulation turn counter.
//!
//! One turn is one robot move.  The driver counts turns from zero; the value
//! reported with a move is the number of turns taken *including* that move.

use std::fmt;

/// A monotonically increasing turn counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Turn(pub u64);

impl Turn {
    pub const ZERO: Turn = Turn(0);

    /// The turn after `self`.
    #[inline]
    pub fn next(self) -> Turn {
        Turn(self.0 + 1)
    }

    #[inline]
    pub fn count(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}
