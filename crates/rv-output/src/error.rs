//! Error types for rv-output.

use rv_spatial::SpatialError;
use thiserror::Error;

/// Errors that can occur when writing a run trace.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("cannot name place: {0}")]
    Spatial(#[from] SpatialError),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
