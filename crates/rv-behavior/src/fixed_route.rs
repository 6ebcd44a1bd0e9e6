//! Fixed tour: walk a predefined loop over and over.

use rv_core::RandomIndex;
use rv_spatial::Route;
use rv_village::VillageState;

use crate::{Action, BehaviorError, BehaviorResult, PolicyContext, RobotPolicy};

/// A [`RobotPolicy`] that follows a fixed tour, restarting it whenever the
/// remaining tour in memory runs out.
///
/// The tour must be a closed walk from the start place (its last stop is
/// where it begins) for the restart to stay on the roads; a stop that is
/// not adjacent is simply a wasted turn.
#[derive(Debug, Clone)]
pub struct FixedRoutePolicy {
    tour: Route,
}

impl FixedRoutePolicy {
    pub fn new(tour: Route) -> BehaviorResult<Self> {
        if tour.is_empty() {
            return Err(BehaviorError::EmptyTour);
        }
        Ok(Self { tour })
    }

    pub fn tour(&self) -> &Route {
        &self.tour
    }
}

impl RobotPolicy for FixedRoutePolicy {
    type Memory = Route;

    fn name(&self) -> &'static str {
        "route"
    }

    fn initial_memory(&self) -> Route {
        Route::empty()
    }

    fn decide(
        &self,
        state:  &VillageState,
        memory: Route,
        _ctx:   &PolicyContext<'_>,
        _rng:   &mut dyn RandomIndex,
    ) -> BehaviorResult<Action<Route>> {
        let remaining = if memory.is_empty() { self.tour.clone() } else { memory };
        Action::follow(state.place, remaining)
    }
}
