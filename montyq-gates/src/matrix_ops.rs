//! Dense matrix helpers over flattened row-major storage
//!
//! Operators are stored as flattened `Vec<Complex64>` in row-major order:
//! entry (i, j) of a d×d matrix lives at `matrix[i * d + j]`. Dimensions
//! are passed explicitly; a length that disagrees with the stated
//! dimension is a programming error and panics.

use num_complex::Complex64;

/// Create a d×d identity matrix
pub fn identity_matrix(dimension: usize) -> Vec<Complex64> {
    let mut matrix = vec![Complex64::new(0.0, 0.0); dimension * dimension];
    for i in 0..dimension {
        matrix[i * dimension + i] = Complex64::new(1.0, 0.0);
    }
    matrix
}

/// Multiply two d×d matrices: C = A · B
///
/// # Panics
/// Panics if either slice length is not `dimension * dimension`.
pub fn matrix_multiply(a: &[Complex64], b: &[Complex64], dimension: usize) -> Vec<Complex64> {
    assert_eq!(a.len(), dimension * dimension, "matrix A has wrong length");
    assert_eq!(b.len(), dimension * dimension, "matrix B has wrong length");

    let mut result = vec![Complex64::new(0.0, 0.0); dimension * dimension];
    for i in 0..dimension {
        for k in 0..dimension {
            let a_ik = a[i * dimension + k];
            if a_ik == Complex64::new(0.0, 0.0) {
                continue;
            }
            for j in 0..dimension {
                result[i * dimension + j] += a_ik * b[k * dimension + j];
            }
        }
    }
    result
}

/// Adjoint (conjugate transpose) of a d×d matrix: (A†)ᵢⱼ = conj(Aⱼᵢ)
///
/// # Panics
/// Panics if the slice length is not `dimension * dimension`.
pub fn matrix_adjoint(matrix: &[Complex64], dimension: usize) -> Vec<Complex64> {
    assert_eq!(
        matrix.len(),
        dimension * dimension,
        "matrix has wrong length"
    );

    let mut result = vec![Complex64::new(0.0, 0.0); dimension * dimension];
    for i in 0..dimension {
        for j in 0..dimension {
            result[i * dimension + j] = matrix[j * dimension + i].conj();
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_identity_multiplication() {
        let identity = identity_matrix(4);
        let mut matrix = vec![Complex64::new(0.0, 0.0); 16];
        for (k, entry) in matrix.iter_mut().enumerate() {
            *entry = Complex64::new(k as f64, -(k as f64));
        }

        assert_eq!(matrix_multiply(&identity, &matrix, 4), matrix);
        assert_eq!(matrix_multiply(&matrix, &identity, 4), matrix);
    }

    #[test]
    fn test_adjoint_is_an_involution() {
        let mut matrix = vec![Complex64::new(0.0, 0.0); 9];
        for (k, entry) in matrix.iter_mut().enumerate() {
            *entry = Complex64::new(k as f64, 1.0 + k as f64);
        }

        let twice = matrix_adjoint(&matrix_adjoint(&matrix, 3), 3);
        for (a, b) in matrix.iter().zip(twice.iter()) {
            assert_relative_eq!(a.re, b.re, epsilon = 1e-15);
            assert_relative_eq!(a.im, b.im, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_adjoint_conjugates_off_diagonal() {
        // [[0, i], [0, 0]] adjoint is [[0, 0], [-i, 0]]
        let zero = Complex64::new(0.0, 0.0);
        let matrix = vec![zero, Complex64::new(0.0, 1.0), zero, zero];
        let adjoint = matrix_adjoint(&matrix, 2);
        assert_eq!(adjoint[2], Complex64::new(0.0, -1.0));
        assert_eq!(adjoint[1], zero);
    }

    #[test]
    #[should_panic(expected = "wrong length")]
    fn test_multiply_rejects_wrong_length() {
        let short = vec![Complex64::new(1.0, 0.0); 3];
        let identity = identity_matrix(2);
        matrix_multiply(&short, &identity, 2);
    }
}
