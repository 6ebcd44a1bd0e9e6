use rv_behavior::BehaviorError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("policy failed: {0}")]
    Behavior(#[from] BehaviorError),
}

pub type SimResult<T> = Result<T, SimError>;
