//! Error types for quorum operations

use thiserror::Error;

use crate::NodeId;

/// Errors surfaced by the state vector, its codecs, and the mapper
#[derive(Error, Debug)]
pub enum QuorumError {
    // Mapper errors
    #[error("node {0} is not present in the mapper")]
    NodeMissing(NodeId),

    #[error("index {index} out of range: length {length}")]
    OutOfRange { index: usize, length: usize },

    // Wire errors
    #[error("buffer too short: expected {expected}, got {actual}")]
    Truncated { expected: usize, actual: usize },

    #[error("invalid wire format: {0}")]
    InvalidWireFormat(String),
}

/// Result type for quorum operations
pub type QuorumResult<T> = Result<T, QuorumError>;
