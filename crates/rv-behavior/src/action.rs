//! Policy decisions.

use rv_core::NodeId;
use rv_spatial::Route;

use crate::{BehaviorError, BehaviorResult};

/// What a policy decided this turn: where to move, and the memory to hand
/// back next turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action<M> {
    pub direction: NodeId,
    pub memory:    M,
}

impl Action<Route> {
    /// The terminal contract shared by every route-following policy:
    /// move to `route[0]`, remember `route[1..]`.
    ///
    /// `from` is only used to report an empty route.
    pub fn follow(from: NodeId, route: Route) -> BehaviorResult<Self> {
        route
            .into_step()
            .map(|(direction, memory)| Action { direction, memory })
            .ok_or(BehaviorError::EmptyRoute(from))
    }
}
