//! Error types for state operations

use thiserror::Error;

/// Errors that can occur while manipulating statevectors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StateError {
    /// Operator applied to a vector of the wrong length; fatal, the
    /// pipeline must abort before producing a result
    #[error("dimension mismatch: operator expects dimension {expected}, state has {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Total probability mass drifted away from 1
    #[error("state not normalized: squared-amplitude sum is {mass}")]
    NotNormalized { mass: f64 },

    /// Probability mass found on a basis state holding the invalid door
    /// code after a stage that should exclude it; signals invariant
    /// breakage in operator construction, not user error
    #[error(
        "invalid basis state: index {index} carries probability {probability:.3e} \
         on an invalid door code"
    )]
    InvalidBasisState { index: usize, probability: f64 },
}

/// Result type for state operations
pub type Result<T> = std::result::Result<T, StateError>;
