//! Random walk: move to a uniformly chosen neighbor, remember nothing.

use rv_core::RandomIndex;
use rv_village::VillageState;

use crate::{Action, BehaviorError, BehaviorResult, PolicyContext, RobotPolicy};

/// A [`RobotPolicy`] that picks a random neighbor every turn.
///
/// There is no termination guarantee; run it under a turn limit.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPolicy;

impl RobotPolicy for RandomPolicy {
    type Memory = ();

    fn name(&self) -> &'static str {
        "random"
    }

    fn initial_memory(&self) {}

    fn decide(
        &self,
        state:   &VillageState,
        _memory: (),
        ctx:     &PolicyContext<'_>,
        rng:     &mut dyn RandomIndex,
    ) -> BehaviorResult<Action<()>> {
        let neighbors = ctx.graph.neighbors(state.place)?;
        if neighbors.is_empty() {
            return Err(BehaviorError::NoNeighbors(state.place));
        }
        let direction = neighbors[rng.pick_index(neighbors.len())];
        Ok(Action { direction, memory: () })
    }
}
