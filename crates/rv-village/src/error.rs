use rv_spatial::SpatialError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VillageError {
    #[error("random tasks need at least two places, graph has {0}")]
    TooFewPlaces(usize),

    #[error(transparent)]
    Spatial(#[from] SpatialError),
}

pub type VillageResult<T> = Result<T, VillageError>;
