//! `VillageState` and the move transition.

use rv_core::{NodeId, RandomIndex};
use rv_spatial::RoadGraph;

use crate::{Parcel, VillageError, VillageResult};

/// Snapshot of the robot's place and every undelivered parcel.
///
/// Moving builds a new state; see [`moved`](Self::moved).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VillageState {
    pub place:   NodeId,
    pub parcels: Vec<Parcel>,
}

impl VillageState {
    /// Build a state at `place`.  Parcels already at their address are
    /// dropped, so the outstanding-parcel invariant holds from the start.
    pub fn new(place: NodeId, parcels: Vec<Parcel>) -> Self {
        let parcels = parcels.into_iter().filter(|p| !p.is_delivered()).collect();
        Self { place, parcels }
    }

    /// `true` once every parcel has been delivered.
    pub fn is_done(&self) -> bool {
        self.parcels.is_empty()
    }

    pub fn parcel_count(&self) -> usize {
        self.parcels.len()
    }

    /// Parcels sitting at the robot's place (carried by it).
    pub fn held_parcels(&self) -> impl Iterator<Item = &Parcel> + '_ {
        self.parcels.iter().filter(|p| p.is_held_at(self.place))
    }

    /// The state after the robot moves to `destination`.
    ///
    /// A destination not adjacent to the current place is a no-op: the
    /// result equals `self`.  Otherwise every parcel at the current place
    /// travels with the robot, and then every parcel that has reached its
    /// address is removed.  Relocation happens first, so a parcel picked up
    /// this move is delivered in the same move when `destination` is its
    /// address.
    #[must_use]
    pub fn moved(&self, graph: &RoadGraph, destination: NodeId) -> VillageState {
        if !graph.is_adjacent(self.place, destination) {
            return self.clone();
        }
        let parcels = self
            .parcels
            .iter()
            .map(|p| {
                if p.place == self.place {
                    Parcel::new(destination, p.address)
                } else {
                    *p
                }
            })
            .filter(|p| !p.is_delivered())
            .collect();
        VillageState { place: destination, parcels }
    }

    /// A random task: `parcel_count` parcels with uniformly random addresses,
    /// each placed at a random place different from its address, and the
    /// robot at `start`.
    ///
    /// Places are drawn from the graph in node order via `rng`.  Fails if
    /// `start` is not in the graph or the graph has fewer than two places.
    pub fn random(
        graph:        &RoadGraph,
        parcel_count: usize,
        start:        NodeId,
        rng:          &mut dyn RandomIndex,
    ) -> VillageResult<VillageState> {
        if !graph.contains(start) {
            return Err(rv_spatial::SpatialError::UnknownNode(start).into());
        }
        let n = graph.node_count();
        if n < 2 {
            return Err(VillageError::TooFewPlaces(n));
        }

        let mut parcels = Vec::with_capacity(parcel_count);
        for _ in 0..parcel_count {
            let address = NodeId(rng.pick_index(n) as u32);
            let mut place = NodeId(rng.pick_index(n) as u32);
            while place == address {
                place = NodeId(rng.pick_index(n) as u32);
            }
            parcels.push(Parcel { place, address });
        }
        Ok(VillageState { place: start, parcels })
    }
}
