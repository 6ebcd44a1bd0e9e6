//! Simulation observer trait for progress reporting and data collection.

use tracing::info;

use rv_core::{NodeId, Turn};
use rv_spatial::RoadGraph;
use rv_village::VillageState;

use crate::RunOutcome;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// turn loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: move printer
///
/// ```rust,ignore
/// struct MovePrinter;
///
/// impl SimObserver for MovePrinter {
///     fn on_turn(&mut self, turn: Turn, direction: NodeId, _state: &VillageState) {
///         println!("{turn}: moved to {direction}");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once before the first turn with the initial state.
    fn on_run_start(&mut self, _state: &VillageState) {}

    /// Called after every move.
    ///
    /// `turn` counts the move just made (the first move is `T1`), and
    /// `state` is the state after it.
    fn on_turn(&mut self, _turn: Turn, _direction: NodeId, _state: &VillageState) {}

    /// Called once when the run stops, whether complete or cut off.
    fn on_run_end(&mut self, _outcome: &RunOutcome) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

// ── TraceRecorder ─────────────────────────────────────────────────────────────

/// One recorded move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnEvent {
    pub turn:         Turn,
    pub from:         NodeId,
    pub direction:    NodeId,
    pub parcels_left: usize,
}

/// Collects every move of a run in memory.
#[derive(Debug, Default)]
pub struct TraceRecorder {
    pub start:   Option<VillageState>,
    pub events:  Vec<TurnEvent>,
    pub outcome: Option<RunOutcome>,
    last_place:  Option<NodeId>,
}

impl TraceRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The places visited after the start, in order.
    pub fn path(&self) -> Vec<NodeId> {
        self.events.iter().map(|e| e.direction).collect()
    }
}

impl SimObserver for TraceRecorder {
    fn on_run_start(&mut self, state: &VillageState) {
        self.start = Some(state.clone());
        self.events.clear();
        self.outcome = None;
        self.last_place = Some(state.place);
    }

    fn on_turn(&mut self, turn: Turn, direction: NodeId, state: &VillageState) {
        let from = self.last_place.unwrap_or(NodeId::INVALID);
        self.events.push(TurnEvent { turn, from, direction, parcels_left: state.parcel_count() });
        self.last_place = Some(state.place);
    }

    fn on_run_end(&mut self, outcome: &RunOutcome) {
        self.outcome = Some(*outcome);
    }
}

// ── TracingObserver ───────────────────────────────────────────────────────────

/// Logs a human-readable narration of the run at `info` level, naming places
/// through the road graph.
pub struct TracingObserver<'g> {
    graph: &'g RoadGraph,
}

impl<'g> TracingObserver<'g> {
    pub fn new(graph: &'g RoadGraph) -> Self {
        Self { graph }
    }

    fn name(&self, node: NodeId) -> &str {
        self.graph.place_name(node).unwrap_or("<unknown>")
    }
}

impl SimObserver for TracingObserver<'_> {
    fn on_run_start(&mut self, state: &VillageState) {
        info!(start = self.name(state.place), parcels = state.parcel_count(), "run started");
    }

    fn on_turn(&mut self, turn: Turn, direction: NodeId, state: &VillageState) {
        info!(%turn, parcels_left = state.parcel_count(), "Moved to {}", self.name(direction));
    }

    fn on_run_end(&mut self, outcome: &RunOutcome) {
        match *outcome {
            RunOutcome::Completed { turns } => info!("Done in {turns} turns"),
            RunOutcome::TurnLimit { turns, remaining } => {
                info!("Stopped after {turns} turns with {remaining} parcels left")
            }
        }
    }
}
