//! Goal-oriented: serve parcels in list order, routing to each errand.

use rv_core::RandomIndex;
use rv_spatial::Route;
use rv_village::VillageState;

use crate::plan::route_leg;
use crate::{Action, BehaviorError, BehaviorResult, PolicyContext, RobotPolicy};

/// A [`RobotPolicy`] that, whenever its planned route runs out, plans a
/// route for the first outstanding parcel: to the parcel if it is not yet
/// carried, otherwise to its address.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoalOrientedPolicy;

impl RobotPolicy for GoalOrientedPolicy {
    type Memory = Route;

    fn name(&self) -> &'static str {
        "goal"
    }

    fn initial_memory(&self) -> Route {
        Route::empty()
    }

    fn decide(
        &self,
        state:  &VillageState,
        memory: Route,
        ctx:    &PolicyContext<'_>,
        _rng:   &mut dyn RandomIndex,
    ) -> BehaviorResult<Action<Route>> {
        let route = if memory.is_empty() {
            let (index, parcel) = state
                .parcels
                .iter()
                .enumerate()
                .find(|(_, p)| !p.is_delivered())
                .ok_or(BehaviorError::NoParcels)?;
            route_leg(ctx, state.place, index, parcel)?.route
        } else {
            memory
        };
        Action::follow(state.place, route)
    }
}
