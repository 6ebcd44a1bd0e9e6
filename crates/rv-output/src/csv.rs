//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `turns.csv`
//! - `runs.csv`

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use csv::Writer;

use crate::writer::TraceWriter;
use crate::{OutputError, OutputResult, RunSummaryRow, TurnRow};

const TURN_HEADER: [&str; 6] = ["run", "policy", "turn", "from", "direction", "parcels_left"];
const RUN_HEADER: [&str; 5] = ["run", "policy", "turns", "completed", "parcels_left"];

/// Writes a run trace as two CSV streams.
pub struct CsvTraceWriter<W: Write = File> {
    turns:    Writer<W>,
    runs:     Writer<W>,
    finished: bool,
}

impl CsvTraceWriter<File> {
    /// Open (or create) `turns.csv` and `runs.csv` in `dir` and write the
    /// header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let turns = File::create(dir.join("turns.csv"))?;
        let runs = File::create(dir.join("runs.csv"))?;
        Self::from_writers(turns, runs)
    }
}

impl<W: Write> CsvTraceWriter<W> {
    /// Write to any pair of sinks (e.g. in-memory buffers).
    pub fn from_writers(turns: W, runs: W) -> OutputResult<Self> {
        let mut turns = Writer::from_writer(turns);
        turns.write_record(TURN_HEADER)?;

        let mut runs = Writer::from_writer(runs);
        runs.write_record(RUN_HEADER)?;

        Ok(Self { turns, runs, finished: false })
    }

    /// Flush and return the `(turns, runs)` sinks.
    pub fn into_inner(self) -> OutputResult<(W, W)> {
        let turns = self.turns.into_inner().map_err(|e| into_io(e.error()))?;
        let runs = self.runs.into_inner().map_err(|e| into_io(e.error()))?;
        Ok((turns, runs))
    }
}

/// The flush error from a failed `into_inner`, detached from the writer.
fn into_io(source: &io::Error) -> OutputError {
    OutputError::Io(io::Error::new(source.kind(), source.to_string()))
}

impl<W: Write> TraceWriter for CsvTraceWriter<W> {
    fn write_turn(&mut self, row: &TurnRow) -> OutputResult<()> {
        self.turns.write_record(&[
            row.run.to_string(),
            row.policy.clone(),
            row.turn.to_string(),
            row.from.clone(),
            row.direction.clone(),
            row.parcels_left.to_string(),
        ])?;
        Ok(())
    }

    fn write_run(&mut self, row: &RunSummaryRow) -> OutputResult<()> {
        self.runs.write_record(&[
            row.run.to_string(),
            row.policy.clone(),
            row.turns.to_string(),
            (row.completed as u8).to_string(),
            row.parcels_left.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.turns.flush()?;
        self.runs.flush()?;
        Ok(())
    }
}
