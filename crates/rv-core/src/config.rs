//! Simulation and village configuration.
//!
//! The road list and the mail tour are configuration, not constants: the
//! simulation crates take them as arguments so any graph can be tested.
//! [`VillageConfig::meadowfield`] provides the classic 11-place village.

use crate::{RvError, RvResult};

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Run parameters for a comparison or a single simulation.
///
/// Typically loaded from a JSON file by the application (with the `serde`
/// feature) or built in code.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Master RNG seed.  The same seed always produces identical tasks.
    pub seed: u64,

    /// Parcels generated per random task.
    pub parcel_count: usize,

    /// Place name where the robot starts.
    pub start_place: String,

    /// Stop a run after this many turns and report it as not converged.
    /// `None` runs until every parcel is delivered.
    pub max_turns: Option<u64>,

    /// Random tasks per policy when comparing policies.
    pub trials: usize,
}

impl SimConfig {
    pub fn validate(&self) -> RvResult<()> {
        if self.start_place.is_empty() {
            return Err(RvError::Config("start_place must not be empty".into()));
        }
        if self.max_turns == Some(0) {
            return Err(RvError::Config("max_turns must be positive when set".into()));
        }
        if self.trials == 0 {
            return Err(RvError::Config("trials must be positive".into()));
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed:         42,
            parcel_count: 5,
            start_place:  "Post Office".into(),
            max_turns:    Some(10_000),
            trials:       100,
        }
    }
}

// ── VillageConfig ─────────────────────────────────────────────────────────────

/// The village map: `"A-B"` road strings plus the fixed mail tour used by the
/// fixed-route policy.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VillageConfig {
    pub roads: Vec<String>,

    /// Tour starting (but not including) the start place; must be a walk in
    /// the road graph.
    pub mail_route: Vec<String>,
}

const MEADOWFIELD_ROADS: [&str; 14] = [
    "Alice's House-Bob's House",   "Alice's House-Cabin",
    "Alice's House-Post Office",   "Bob's House-Town Hall",
    "Daria's House-Ernie's House", "Daria's House-Town Hall",
    "Ernie's House-Grete's House", "Grete's House-Farm",
    "Grete's House-Shop",          "Marketplace-Farm",
    "Marketplace-Post Office",     "Marketplace-Shop",
    "Marketplace-Town Hall",       "Shop-Town Hall",
];

const MEADOWFIELD_MAIL_ROUTE: [&str; 13] = [
    "Alice's House", "Cabin", "Alice's House", "Bob's House",
    "Town Hall", "Daria's House", "Ernie's House",
    "Grete's House", "Shop", "Grete's House", "Farm",
    "Marketplace", "Post Office",
];

impl VillageConfig {
    /// Meadowfield: 14 roads between 11 places, and a 13-stop tour that
    /// starts and ends at the post office and passes every place.
    pub fn meadowfield() -> Self {
        Self {
            roads:      MEADOWFIELD_ROADS.iter().map(|s| s.to_string()).collect(),
            mail_route: MEADOWFIELD_MAIL_ROUTE.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Shallow checks only; road syntax is validated when the graph is built.
    pub fn validate(&self) -> RvResult<()> {
        if self.roads.is_empty() {
            return Err(RvError::Config("village has no roads".into()));
        }
        if self.mail_route.is_empty() {
            return Err(RvError::Config("mail_route must not be empty".into()));
        }
        Ok(())
    }
}

impl Default for VillageConfig {
    fn default() -> Self {
        Self::meadowfield()
    }
}
