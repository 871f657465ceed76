//! Error types for the simulators

use crate::result::OperatorKind;
use montyq_core::CoreError;
use montyq_state::StateError;
use std::fmt;

/// Result type for simulator operations
pub type Result<T> = std::result::Result<T, SimulatorError>;

/// Errors that can occur while building or running a simulation
#[derive(Debug, Clone, PartialEq)]
pub enum SimulatorError {
    /// Invalid configuration
    InvalidConfig(String),

    /// An operator failed its unitarity check and the configuration
    /// promotes violations to errors
    UnitarityViolation {
        operator: OperatorKind,
        deviation: f64,
        tolerance: f64,
    },

    /// A state-level invariant broke mid-pipeline
    StateError { message: String },

    /// Strategy label could not be resolved
    InvalidStrategy { message: String },

    /// The external wavefunction backend failed to produce a state
    BackendFailed { message: String },
}

impl fmt::Display for SimulatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulatorError::InvalidConfig(msg) => {
                write!(f, "Invalid configuration: {}", msg)
            }
            SimulatorError::UnitarityViolation {
                operator,
                deviation,
                tolerance,
            } => {
                write!(
                    f,
                    "{} operator failed unitarity check: deviation {:.3e} exceeds tolerance {:.1e}",
                    operator, deviation, tolerance
                )
            }
            SimulatorError::StateError { message } => {
                write!(f, "State error: {}", message)
            }
            SimulatorError::InvalidStrategy { message } => {
                write!(f, "Invalid strategy: {}", message)
            }
            SimulatorError::BackendFailed { message } => {
                write!(f, "Wavefunction backend failed: {}", message)
            }
        }
    }
}

impl std::error::Error for SimulatorError {}

impl From<StateError> for SimulatorError {
    fn from(err: StateError) -> Self {
        SimulatorError::StateError {
            message: err.to_string(),
        }
    }
}

impl From<CoreError> for SimulatorError {
    fn from(err: CoreError) -> Self {
        SimulatorError::InvalidStrategy {
            message: err.to_string(),
        }
    }
}
