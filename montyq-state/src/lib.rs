//! Quantum state representation for the Monty Hall model
//!
//! This crate owns the statevector value type and the engine that drives
//! it through the protocol:
//!
//! - [`StateVector`] — an owned complex amplitude vector with norm and
//!   probability queries. Statevectors are value objects: created fresh
//!   per simulation run, never shared or mutated across runs.
//! - [`StateEngine`] — prepares the initial superposition, applies
//!   operators (dimension-checked dense matrix–vector products) and
//!   extracts win probability and diagnostic views.
//!
//! Invariants maintained here: total probability mass stays 1 within
//! tolerance at every protocol stage, and amplitude never leaks onto
//! basis states holding the invalid door code.

pub mod engine;
pub mod error;
pub mod state_vector;

pub use engine::{AmplitudeRow, StateEngine};
pub use error::{Result, StateError};
pub use state_vector::StateVector;
