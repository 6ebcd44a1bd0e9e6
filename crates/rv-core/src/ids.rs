//! Place identifiers.
//!
//! Places are named in the edge list ("Post Office", "Farm", …) but the
//! simulation works on dense `NodeId`s assigned by the road graph in order of
//! first appearance.  Keeping the id `Copy + Ord + Hash` lets parcels, routes
//! and states stay plain values.

use std::fmt;

/// Index of a place in the road graph.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel meaning "no valid place", equal to `u32::MAX`.
    pub const INVALID: NodeId = NodeId(u32::MAX);

    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Default for NodeId {
    /// Returns the `INVALID` sentinel so uninitialized ids are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl From<NodeId> for usize {
    #[inline(always)]
    fn from(id: NodeId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for NodeId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<NodeId, Self::Error> {
        u32::try_from(n).map(NodeId)
    }
}
