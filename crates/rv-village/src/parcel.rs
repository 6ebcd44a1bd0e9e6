//! Parcels awaiting delivery.

use rv_core::NodeId;

/// A parcel at `place` that must be taken to `address`.
///
/// A parcel the robot is carrying sits at the robot's place and moves with
/// it.  Once `place == address` the parcel is delivered and disappears from
/// the state, so an outstanding parcel always has `place != address`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parcel {
    pub place:   NodeId,
    pub address: NodeId,
}

impl Parcel {
    pub fn new(place: NodeId, address: NodeId) -> Self {
        Self { place, address }
    }

    /// `true` if the parcel sits where the robot stands (picked up).
    #[inline]
    pub fn is_held_at(&self, robot: NodeId) -> bool {
        self.place == robot
    }

    #[inline]
    pub fn is_delivered(&self) -> bool {
        self.place == self.address
    }
}
