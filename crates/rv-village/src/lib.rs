//! `rv-village`: the world state of the delivery simulation.
//!
//! | Module     | Contents                                              |
//! |------------|-------------------------------------------------------|
//! | [`parcel`] | `Parcel`                                              |
//! | [`state`]  | `VillageState` — `moved`, `random`                    |
//! | [`error`]  | `VillageError`, `VillageResult<T>`                    |
//!
//! A `VillageState` is a value.  Moving the robot never edits a state; it
//! builds the next one and leaves the previous one intact, so callers can
//! keep and compare any number of historical states.

pub mod error;
pub mod parcel;
pub mod state;

#[cfg(test)]
mod tests;

pub use error::{VillageError, VillageResult};
pub use parcel::Parcel;
pub use state::VillageState;
