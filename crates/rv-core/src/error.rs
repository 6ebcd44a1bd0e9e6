//! Shared error type.
//!
//! Sub-crates define their own error enums (`SpatialError`, `BehaviorError`,
//! …) and wrap each other via `#[from]`.  `RvError` covers what lives in this
//! crate: configuration validation and textual parsing.

use thiserror::Error;

/// The error type for `rv-core`.
#[derive(Debug, Error)]
pub enum RvError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `rv-core`.
pub type RvResult<T> = Result<T, RvError>;
