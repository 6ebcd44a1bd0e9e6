//! `rv-core`: foundational types for the robot village simulation.
//!
//! This crate is a dependency of every other `rv-*` crate.  It has no `rv-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`ids`]     | `NodeId`                                                  |
//! | [`turn`]    | `Turn` counter                                            |
//! | [`rng`]     | `RandomIndex` capability, `SimRng`, `ScriptedIndex`       |
//! | [`group`]   | `PersistentGroup` — persistent set with shared storage    |
//! | [`config`]  | `SimConfig`, `VillageConfig` (Meadowfield dataset)        |
//! | [`error`]   | `RvError`, `RvResult`                                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to ids and config types.    |

pub mod config;
pub mod error;
pub mod group;
pub mod ids;
pub mod rng;
pub mod turn;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{SimConfig, VillageConfig};
pub use error::{RvError, RvResult};
pub use group::PersistentGroup;
pub use ids::NodeId;
pub use rng::{FnIndex, RandomIndex, ScriptedIndex, SimRng};
pub use turn::Turn;
