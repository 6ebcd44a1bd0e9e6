//! Spatial-subsystem error type.

use thiserror::Error;

use rv_core::NodeId;

/// Errors produced by `rv-spatial`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpatialError {
    #[error("malformed edge {entry:?}: expected \"<place>-<place>\"")]
    MalformedEdge { entry: String },

    #[error("node {0} not found in road graph")]
    UnknownNode(NodeId),

    #[error("place {0:?} not found in road graph")]
    UnknownPlace(String),

    #[error("no route from {from} to {to}")]
    NoRoute { from: NodeId, to: NodeId },
}

pub type SpatialResult<T> = Result<T, SpatialError>;
