//! Lazy: prefer short errands, and pickups over drop-offs of equal length.

use rv_core::RandomIndex;
use rv_spatial::Route;
use rv_village::VillageState;

use crate::plan::{candidates, Candidate};
use crate::{Action, BehaviorError, BehaviorResult, PolicyContext, RobotPolicy};

/// A [`RobotPolicy`] that, whenever its planned route runs out, scores an
/// errand for every parcel with [`Candidate::score`], which is
/// `(0.5 if pickup else 0) - route length`, and follows the best one.
///
/// Selection is a pairwise reduction that replaces the running best only on
/// a strictly greater score, so ties go to the earliest parcel.
#[derive(Debug, Clone, Copy, Default)]
pub struct LazyPolicy;

/// First candidate with the strictly greatest score.
pub fn best_scored(candidates: Vec<Candidate>) -> Option<Candidate> {
    candidates
        .into_iter()
        .reduce(|best, c| if c.score() > best.score() { c } else { best })
}

impl RobotPolicy for LazyPolicy {
    type Memory = Route;

    fn name(&self) -> &'static str {
        "lazy"
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
            best_scored(candidates(ctx, state)?)
                .ok_or(BehaviorError::NoParcels)?
                .route
        } else {
            memory
        };
        Action::follow(state.place, route)
    }
}
