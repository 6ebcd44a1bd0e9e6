//! The `RobotPolicy` trait: the extension point for decision strategies.

use rv_core::RandomIndex;
use rv_village::VillageState;

use crate::{Action, BehaviorResult, PolicyContext};

/// Pluggable robot decision strategy.
///
/// Each turn the driver calls [`decide`](Self::decide) with the current
/// state and the memory returned by the previous call (or
/// [`initial_memory`](Self::initial_memory) on the first turn).  The policy
/// returns the next direction and the memory for the following turn.
///
/// Implementations are pure: identical `(state, memory)` and an identical
/// index source always give the identical action.
///
/// # Example
///
/// ```rust,ignore
/// struct AlwaysFirstNeighbor;
///
/// impl RobotPolicy for AlwaysFirstNeighbor {
///     type Memory = ();
///
///     fn name(&self) -> &'static str { "first" }
///     fn initial_memory(&self) {}
///
///     fn decide(&self, state: &VillageState, _: (), ctx: &PolicyContext<'_>, _: &mut dyn RandomIndex)
///         -> BehaviorResult<Action<()>>
///     {
///         let direction = ctx.graph.neighbors(state.place)?[0];
///         Ok(Action { direction, memory: () })
///     }
/// }
/// ```
pub trait RobotPolicy {
    /// Whatever the policy carries from one turn to the next.
    type Memory;

    /// Short, stable identifier used in logs and reports.
    fn name(&self) -> &'static str;

    /// Memory for the first turn of a run.
    fn initial_memory(&self) -> Self::Memory;

    /// Choose the next move.
    fn decide(
        &self,
        state:  &VillageState,
        memory: Self::Memory,
        ctx:    &PolicyContext<'_>,
        rng:    &mut dyn RandomIndex,
    ) -> BehaviorResult<Action<Self::Memory>>;
}
