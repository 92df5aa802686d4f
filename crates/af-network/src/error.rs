//! Error types for network ownership operations.

use af_core::GridId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    #[error("No network with grid id {grid}")]
    UnknownGrid { grid: GridId },

    #[error("No grid ids left to assign")]
    GridIdsExhausted,
}

pub type NetworkResult<T> = Result<T, NetworkError>;
