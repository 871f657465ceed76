//! Error types for the core domain types

use thiserror::Error;

/// Errors produced by the core codec and label types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Register value does not name a real door
    #[error("invalid door value {value}, real doors are 0-2")]
    InvalidDoor { value: u8 },

    /// Basis index outside the 64-dimensional game space
    #[error("invalid basis index {index}, expected 0..64")]
    InvalidBasisIndex { index: usize },

    /// Strategy label is neither "keep" nor "switch"
    #[error("unknown strategy {name:?}, expected \"keep\" or \"switch\"")]
    UnknownStrategy { name: String },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
