//! `rv-behavior`: robot decision policies.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`action`]      | `Action<M>` — a move direction plus the next memory       |
//! | [`context`]     | `PolicyContext<'a>` — graph and router shared by policies |
//! | [`model`]       | `RobotPolicy` trait                                       |
//! | [`plan`]        | per-parcel legs shared by the routing policies            |
//! | [`random`]      | `RandomPolicy`                                            |
//! | [`fixed_route`] | `FixedRoutePolicy`                                        |
//! | [`goal`]        | `GoalOrientedPolicy`                                      |
//! | [`nearest`]     | `NearestFirstPolicy`                                      |
//! | [`lazy`]        | `LazyPolicy`                                              |
//! | [`kind`]        | `PolicyKind` — policy selection by name                   |
//! | [`error`]       | `BehaviorError`, `BehaviorResult<T>`                      |
//!
//! # Design notes
//!
//! A policy is a pure function of `(state, memory)`.  It never mutates the
//! state or itself; whatever it needs to remember between turns goes into
//! the memory value it returns, which the driver hands back on the next
//! turn without looking inside.  Randomness arrives through
//! `&mut dyn RandomIndex`, so every policy is reproducible under a scripted
//! index source.

pub mod action;
pub mod context;
pub mod error;
pub mod fixed_route;
pub mod goal;
pub mod kind;
pub mod lazy;
pub mod model;
pub mod nearest;
pub mod plan;
pub mod random;


pub use action::Action;
pub use context::PolicyContext;
pub use error::{BehaviorError, BehaviorResult};
pub use fixed_route::FixedRoutePolicy;
pub use goal::GoalOrientedPolicy;
pub use kind::PolicyKind;
pub use lazy::LazyPolicy;
pub use model::RobotPolicy;
pub use nearest::NearestFirstPolicy;
pub use random::RandomPolicy;
