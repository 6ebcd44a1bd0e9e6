//! `rv-output`: trace writers for robot village runs.
//!
//! | Backend | Files created              |
//! |---------|----------------------------|
//! | CSV     | `turns.csv`, `runs.csv`    |
//!
//! Backends implement [`TraceWriter`] and are driven by [`TraceObserver`],
//! which implements `rv_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use rv_output::{CsvTraceWriter, TraceObserver};
//!
//! let writer = CsvTraceWriter::new(Path::new("./output"))?;
//! let mut obs = TraceObserver::new(writer, &sim.graph);
//! obs.set_policy("lazy");
//! sim.run(state, memory, &mut rng, &mut obs)?;
//! obs.finish()?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use crate::csv::CsvTraceWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TraceObserver;
pub use row::{RunSummaryRow, TurnRow};
pub use writer::TraceWriter;
