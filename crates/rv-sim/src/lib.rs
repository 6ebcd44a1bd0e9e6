//! `rv-sim`: the turn loop that drives a robot policy over a village task.
//!
//! # Turn loop
//!
//! ```text
//! observer.on_run_start(state)
//! while parcels remain:
//!   ① Limit  : stop with RunOutcome::TurnLimit once max_turns is reached.
//!   ② Decide : policy.decide(state, memory) → (direction, memory').
//!   ③ Move   : state = state.moved(graph, direction); memory = memory'.
//!   ④ Report : turn += 1; observer.on_turn(turn, direction, state).
//! observer.on_run_end(outcome)
//! ```
//!
//! An invalid direction is not an error: `moved` leaves the state unchanged
//! and the turn still counts.  Policy errors (including routing failures)
//! abort the run.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use rv_behavior::GoalOrientedPolicy;
//! use rv_core::SimRng;
//! use rv_sim::{NoopObserver, SimBuilder};
//! use rv_spatial::BfsRouter;
//!
//! let sim = SimBuilder::new(graph, GoalOrientedPolicy, BfsRouter)
//!     .max_turns(1_000)
//!     .build()?;
//! let outcome = sim.run(state, sim.initial_memory(), &mut SimRng::new(7), &mut NoopObserver)?;
//! println!("{} turns", outcome.turns());
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver, TraceRecorder, TracingObserver, TurnEvent};
pub use sim::{RunOutcome, Sim, Step};
