//! Error types for operator construction and verification

use thiserror::Error;

/// Errors produced while building or verifying operators
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GateError {
    /// U†U deviates from the identity beyond the tolerance
    ///
    /// A violation indicates a construction bug, not user error. It is
    /// reported with the measured deviation so callers can surface it as
    /// a warning and decide whether to proceed.
    #[error(
        "operator is not unitary: {dimension}x{dimension} matrix deviates \
         from U†U = I by {deviation:.3e} (tolerance {tolerance:.1e})"
    )]
    UnitarityViolation {
        dimension: usize,
        deviation: f64,
        tolerance: f64,
    },
}

/// Result type for gate operations
pub type Result<T> = std::result::Result<T, GateError>;
