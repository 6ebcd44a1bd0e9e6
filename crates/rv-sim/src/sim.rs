//! The `Sim` struct and its turn loop.

use tracing::{debug, info, warn};

use rv_behavior::{PolicyContext, RobotPolicy};
use rv_core::{NodeId, RandomIndex, Turn};
use rv_spatial::{RoadGraph, Router};
use rv_village::VillageState;

use crate::{SimObserver, SimResult};

// ── RunOutcome ────────────────────────────────────────────────────────────────

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every parcel was delivered after `turns` moves.
    Completed { turns: u64 },
    /// The turn limit was reached with `remaining` parcels undelivered.
    TurnLimit { turns: u64, remaining: usize },
}

impl RunOutcome {
    pub fn turns(&self) -> u64 {
        match *self {
            RunOutcome::Completed { turns } | RunOutcome::TurnLimit { turns, .. } => turns,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, RunOutcome::Completed { .. })
    }
}

/// The result of a single turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step<M> {
    pub direction: NodeId,
    pub state:     VillageState,
    pub memory:    M,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The simulation driver.
///
/// `Sim<P, R>` owns the road graph, the policy and the router; the task
/// state and the policy's memory are passed in per run, so one `Sim` can
/// run any number of tasks.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<P: RobotPolicy, R: Router> {
    /// The village map.  Read-only for the whole run.
    pub graph: RoadGraph,

    /// The decision strategy.  Called once per turn.
    pub policy: P,

    /// Routing engine handed to the policy through `PolicyContext`.
    pub router: R,

    /// `None` runs until every parcel is delivered.
    pub max_turns: Option<u64>,
}

impl<P: RobotPolicy, R: Router> Sim<P, R> {
    // ── Public API ────────────────────────────────────────────────────────

    /// The policy's memory for the start of a run.
    pub fn initial_memory(&self) -> P::Memory {
        self.policy.initial_memory()
    }

    /// Run until every parcel is delivered or the turn limit is reached.
    ///
    /// Calls observer hooks at the start, after every move, and at the end.
    /// Use [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(
        &self,
        mut state:  VillageState,
        mut memory: P::Memory,
        rng:        &mut dyn RandomIndex,
        observer:   &mut O,
    ) -> SimResult<RunOutcome> {
        observer.on_run_start(&state);
        let mut turn = Turn::ZERO;

        let outcome = loop {
            if state.is_done() {
                break RunOutcome::Completed { turns: turn.count() };
            }
            if self.max_turns.is_some_and(|limit| turn.count() >= limit) {
                break RunOutcome::TurnLimit {
                    turns:     turn.count(),
                    remaining: state.parcel_count(),
                };
            }

            let step = self.step(&state, memory, rng)?;
            turn = turn.next();
            debug!(
                policy = self.policy.name(),
                %turn,
                from = %state.place,
                to = %step.direction,
                parcels_left = step.state.parcel_count(),
                "turn"
            );
            observer.on_turn(turn, step.direction, &step.state);
            state = step.state;
            memory = step.memory;
        };

        match outcome {
            RunOutcome::Completed { turns } => {
                info!(policy = self.policy.name(), turns, "all parcels delivered");
            }
            RunOutcome::TurnLimit { turns, remaining } => {
                warn!(policy = self.policy.name(), turns, remaining, "turn limit reached");
            }
        }
        observer.on_run_end(&outcome);
        Ok(outcome)
    }

    /// Take one turn: ask the policy for a direction and apply the move.
    ///
    /// A direction that is not adjacent to `state.place` yields an unchanged
    /// state.
    pub fn step(
        &self,
        state:  &VillageState,
        memory: P::Memory,
        rng:    &mut dyn RandomIndex,
    ) -> SimResult<Step<P::Memory>> {
        let ctx = PolicyContext::new(&self.graph, &self.router);
        let action = self.policy.decide(state, memory, &ctx, rng)?;
        let next = state.moved(&self.graph, action.direction);
        if next.place != action.direction {
            debug!(from = %state.place, to = %action.direction, "direction not adjacent; robot stays");
        }
        Ok(Step { direction: action.direction, state: next, memory: action.memory })
    }
}
