//! Unitarity verification
//!
//! A matrix U is unitary when U†U equals the identity. The check here is
//! a build-time diagnostic, not an execution gate: a violation signals a
//! construction bug and is reported with the measured deviation, but the
//! caller decides whether to warn or abort.

use crate::error::{GateError, Result};
use crate::matrix_ops::{matrix_adjoint, matrix_multiply};
use num_complex::Complex64;

/// Default tolerance for unitarity checks
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Maximum element-wise deviation of U†U from the identity
///
/// Real and imaginary parts are compared separately; the returned value
/// is the largest absolute difference found in either part.
pub fn unitarity_deviation(matrix: &[Complex64], dimension: usize) -> f64 {
    let adjoint = matrix_adjoint(matrix, dimension);
    let product = matrix_multiply(&adjoint, matrix, dimension);

    let mut deviation: f64 = 0.0;
    for i in 0..dimension {
        for j in 0..dimension {
            let expected = if i == j { 1.0 } else { 0.0 };
            let entry = product[i * dimension + j];
            deviation = deviation.max((entry.re - expected).abs());
            deviation = deviation.max(entry.im.abs());
        }
    }
    deviation
}

/// Check whether U†U ≈ I within the tolerance
pub fn is_unitary(matrix: &[Complex64], dimension: usize, tolerance: f64) -> bool {
    unitarity_deviation(matrix, dimension) <= tolerance
}

/// Verify unitarity, returning a structured violation on failure
///
/// # Errors
/// [`GateError::UnitarityViolation`] carrying the measured deviation.
pub fn check_unitary(matrix: &[Complex64], dimension: usize, tolerance: f64) -> Result<()> {
    let deviation = unitarity_deviation(matrix, dimension);
    if deviation > tolerance {
        return Err(GateError::UnitarityViolation {
            dimension,
            deviation,
            tolerance,
        });
    }
    Ok(())
}
