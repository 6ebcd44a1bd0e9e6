use rv_core::NodeId;
use rv_spatial::SpatialError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BehaviorError {
    #[error("no outstanding parcels to plan for")]
    NoParcels,

    #[error("place {0} has no neighbors")]
    NoNeighbors(NodeId),

    #[error("fixed-route policy needs a non-empty tour")]
    EmptyTour,

    #[error("planned route from {0} is empty")]
    EmptyRoute(NodeId),

    #[error("unknown policy {0:?}")]
    UnknownPolicy(String),

    #[error("routing failed: {0}")]
    Routing(#[from] SpatialError),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
