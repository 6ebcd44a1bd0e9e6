//! Nearest-first: head for whichever errand is closest right now.

use rv_core::RandomIndex;
use rv_spatial::Route;
use rv_village::VillageState;

use crate::plan::{candidates, Candidate};
use crate::{Action, BehaviorError, BehaviorResult, PolicyContext, RobotPolicy};

/// A [`RobotPolicy`] that, whenever its planned route runs out, routes an
/// errand for every parcel and takes the shortest.
///
/// The scan keeps the first candidate and replaces it only with a strictly
/// shorter one, so among equally close parcels the earliest in the list
/// wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestFirstPolicy;

/// First strictly-shortest candidate.
pub fn nearest(candidates: Vec<Candidate>) -> Option<Candidate> {
    let mut iter = candidates.into_iter();
    let mut best = iter.next()?;
    for c in iter {
        if c.route.len() < best.route.len() {
            best = c;
        }
    }
    Some(best)
}

impl RobotPolicy for NearestFirstPolicy {
    type Memory = Route;

    fn name(&self) -> &'static str {
        "nearest"
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
            nearest(candidates(ctx, state)?)
                .ok_or(BehaviorError::NoParcels)?
                .route
        } else {
            memory
        };
        Action::follow(state.place, route)
    }
}
