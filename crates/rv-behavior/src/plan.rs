//! Per-parcel legs shared by the route-planning policies.
//!
//! For every outstanding parcel the robot's next errand is either a pickup
//! (walk to the parcel) or a drop-off (it is carrying the parcel, walk to
//! the address).  Delivered parcels are skipped before routing so the
//! router is never asked for a route from the robot's place to itself.

use rv_core::NodeId;
use rv_spatial::Route;
use rv_village::{Parcel, VillageState};

use crate::{BehaviorResult, PolicyContext};

/// Where the robot has to go next for one parcel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Leg {
    pub target: NodeId,
    /// `true` when the robot still has to pick the parcel up.
    pub pickup: bool,
}

impl Leg {
    pub fn for_parcel(robot: NodeId, parcel: &Parcel) -> Self {
        if parcel.place != robot {
            Leg { target: parcel.place, pickup: true }
        } else {
            Leg { target: parcel.address, pickup: false }
        }
    }
}

/// A routed leg for the parcel at `parcel_index` in the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub parcel_index: usize,
    pub route:        Route,
    pub pickup:       bool,
}

impl Candidate {
    /// Lazy-policy preference: shorter is better, pickups get half a step
    /// of bonus.
    pub fn score(&self) -> f64 {
        (if self.pickup { 0.5 } else { 0.0 }) - self.route.len() as f64
    }
}

/// Route the leg for one parcel.
pub fn route_leg(
    ctx:          &PolicyContext<'_>,
    robot:        NodeId,
    parcel_index: usize,
    parcel:       &Parcel,
) -> BehaviorResult<Candidate> {
    let leg = Leg::for_parcel(robot, parcel);
    let route = ctx.router.route(ctx.graph, robot, leg.target)?;
    Ok(Candidate { parcel_index, route, pickup: leg.pickup })
}

/// Route a leg for every outstanding parcel, in parcel order.
pub fn candidates(ctx: &PolicyContext<'_>, state: &VillageState) -> BehaviorResult<Vec<Candidate>> {
    state
        .parcels
        .iter()
        .enumerate()
        .filter(|(_, p)| !p.is_delivered())
        .map(|(i, p)| route_leg(ctx, state.place, i, p))
        .collect()
}
