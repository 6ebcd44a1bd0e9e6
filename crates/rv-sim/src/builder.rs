//! Fluent builder for constructing a [`Sim`].

use rv_behavior::RobotPolicy;
use rv_core::SimConfig;
use rv_spatial::{RoadGraph, Router};

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<P, R>`].
///
/// # Required inputs
///
/// - [`RoadGraph`]: the village map
/// - `P: RobotPolicy`: the decision strategy
/// - `R: Router`: the routing algorithm (e.g. [`rv_spatial::BfsRouter`])
///
/// # Optional inputs (have defaults)
///
/// | Method             | Default                         |
/// |--------------------|---------------------------------|
/// | `.max_turns(n)`    | No limit: run until delivered   |
/// | `.config(&cfg)`    | Takes `max_turns` from `cfg`    |
///
/// # Example
///
/// ```rust,ignore
/// let sim = SimBuilder::new(graph, LazyPolicy, BfsRouter)
///     .max_turns(500)
///     .build()?;
/// ```
pub struct SimBuilder<P: RobotPolicy, R: Router> {
    graph:     RoadGraph,
    policy:    P,
    router:    R,
    max_turns: Option<u64>,
}

impl<P: RobotPolicy, R: Router> SimBuilder<P, R> {
    /// Create a builder with all required inputs.
    pub fn new(graph: RoadGraph, policy: P, router: R) -> Self {
        Self { graph, policy, router, max_turns: None }
    }

    /// Stop a run after `n` turns and report [`RunOutcome::TurnLimit`].
    ///
    /// [`RunOutcome::TurnLimit`]: crate::RunOutcome::TurnLimit
    pub fn max_turns(mut self, n: u64) -> Self {
        self.max_turns = Some(n);
        self
    }

    /// Apply the driver-relevant parts of a [`SimConfig`].
    pub fn config(mut self, config: &SimConfig) -> Self {
        self.max_turns = config.max_turns;
        self
    }

    /// Validate inputs and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<P, R>> {
        if self.max_turns == Some(0) {
            return Err(SimError::Config("max_turns must be positive".into()));
        }
        if self.graph.is_empty() {
            return Err(SimError::Config("road graph has no places".into()));
        }
        Ok(Sim {
            graph:     self.graph,
            policy:    self.policy,
            router:    self.router,
            max_turns: self.max_turns,
        })
    }
}
