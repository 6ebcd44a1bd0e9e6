//! `TraceObserver<W>`: bridges `SimObserver` to a `TraceWriter`.

use rv_core::{NodeId, Turn};
use rv_sim::{RunOutcome, SimObserver};
use rv_spatial::RoadGraph;
use rv_village::VillageState;

use crate::row::{RunSummaryRow, TurnRow};
use crate::writer::TraceWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes every move and every run summary to a
/// [`TraceWriter`] backend, with places written by name.
///
/// One observer can watch many runs; each `on_run_start` opens a new run
/// index.  Errors from the writer are stored internally because
/// `SimObserver` methods have no return value.  After `sim.run()` returns,
/// check for errors with [`take_error`][Self::take_error].
pub struct TraceObserver<'g, W: TraceWriter> {
    writer:     W,
    graph:      &'g RoadGraph,
    policy:     String,
    /// Runs started so far; the current run is `runs - 1`.
    runs:       u32,
    last_place: NodeId,
    last_error: Option<OutputError>,
}

impl<'g, W: TraceWriter> TraceObserver<'g, W> {
    /// Create an observer backed by `writer`, naming places through `graph`.
    pub fn new(writer: W, graph: &'g RoadGraph) -> Self {
        Self {
            writer,
            graph,
            policy:     String::new(),
            runs:       0,
            last_place: NodeId::INVALID,
            last_error: None,
        }
    }

    /// Label the following runs with a policy name.
    pub fn set_policy(&mut self, name: &str) {
        self.policy = name.to_string();
    }

    /// Number of runs observed so far.
    pub fn runs(&self) -> u32 {
        self.runs
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the writer.
    pub fn finish(&mut self) -> OutputResult<()> {
        self.writer.finish()
    }

    /// Unwrap the inner writer (e.g. to inspect buffers after the runs).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn current_run(&self) -> u32 {
        self.runs.saturating_sub(1)
    }

    fn name(&self, node: NodeId) -> OutputResult<String> {
        Ok(self.graph.place_name(node)?.to_string())
    }

    fn turn_row(&self, turn: Turn, direction: NodeId, state: &VillageState) -> OutputResult<TurnRow> {
        Ok(TurnRow {
            run:          self.current_run(),
            policy:       self.policy.clone(),
            turn:         turn.count(),
            from:         self.name(self.last_place)?,
            direction:    self.name(direction)?,
            parcels_left: state.parcel_count() as u64,
        })
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: TraceWriter> SimObserver for TraceObserver<'_, W> {
    fn on_run_start(&mut self, state: &VillageState) {
        self.runs += 1;
        self.last_place = state.place;
    }

    fn on_turn(&mut self, turn: Turn, direction: NodeId, state: &VillageState) {
        let result = self
            .turn_row(turn, direction, state)
            .and_then(|row| self.writer.write_turn(&row));
        self.store_err(result);
        self.last_place = state.place;
    }

    fn on_run_end(&mut self, outcome: &RunOutcome) {
        let parcels_left = match *outcome {
            RunOutcome::Completed { .. } => 0,
            RunOutcome::TurnLimit { remaining, .. } => remaining as u64,
        };
        let row = RunSummaryRow {
            run:       self.current_run(),
            policy:    self.policy.clone(),
            turns:     outcome.turns(),
            completed: outcome.is_completed(),
            parcels_left,
        };
        let result = self.writer.write_run(&row);
        self.store_err(result);
    }
}
