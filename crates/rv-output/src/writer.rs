//! The `TraceWriter` trait implemented by trace backends.

use crate::{OutputResult, RunSummaryRow, TurnRow};

/// Sink for turn rows and run summaries.
///
/// Errors surface to [`TraceObserver`][crate::TraceObserver], which stores
/// them for [`take_error`][crate::TraceObserver::take_error].
pub trait TraceWriter {
    /// Write one move.
    fn write_turn(&mut self, row: &TurnRow) -> OutputResult<()>;

    /// Write the summary of one finished run.
    fn write_run(&mut self, row: &RunSummaryRow) -> OutputResult<()>;

    /// Flush all underlying handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
