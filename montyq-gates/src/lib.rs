//! Unitary operators for the Monty Hall quantum model
//!
//! This crate turns the game rules into explicit unitary matrices over
//! the 64-dimensional (prize, player, host) statevector:
//!
//! - [`rules`] — pure rule functions: which doors the host may reveal and
//!   where a switching player ends up. Independent of any matrix
//!   bookkeeping so the branching logic is testable on its own.
//! - [`builder`] — compiles the rule distributions into the 64×64 reveal
//!   operator, the 16×16 switch permutation and its 64×64 extension.
//! - [`matrix_ops`] — dense helpers over flattened row-major matrices.
//! - [`unitarity`] — U†U ≈ I verification, reported as a structured
//!   diagnostic with the measured deviation.
//!
//! Operator construction is a pure function of the fixed rules: building
//! an operator twice yields bit-identical matrices.

pub mod builder;
pub mod error;
pub mod matrix_ops;
pub mod rules;
pub mod unitarity;

pub use builder::{extended_switch_operator, reveal_operator, switch_operator, UNREVEALED};
pub use error::{GateError, Result};
pub use matrix_ops::{identity_matrix, matrix_adjoint, matrix_multiply};
pub use rules::{reveal_candidates, reveal_column, switch_target};
pub use unitarity::{check_unitary, is_unitary, unitarity_deviation, DEFAULT_TOLERANCE};
