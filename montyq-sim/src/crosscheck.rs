//! Optional cross-check against an external wavefunction toolkit
//!
//! The core's own linear algebra is authoritative; an external
//! wavefunction simulator may additionally vouch for the prize
//! superposition preparation. The collaborator is an explicitly passed
//! handle — never ambient process state — and the check degrades to
//! [`PreparationCheck::Skipped`] when no backend is supplied, so the
//! core stays deterministic and toolkit-independent in tests.

use crate::error::Result;
use montyq_core::door::{DOOR_COUNT, REGISTER_VALUES};
use num_complex::Complex64;

/// An external simulator able to produce the prize-register wavefunction
///
/// Implementations return the 4-dimensional state their own machinery
/// prepares for "prize in equal superposition over the three doors".
pub trait WavefunctionBackend {
    /// Human-readable backend name for reports
    fn name(&self) -> &str;

    /// Produce the prize-register wavefunction
    ///
    /// # Errors
    /// Backend-specific failures (an absent toolkit, a dead service) are
    /// reported as [`crate::SimulatorError::BackendFailed`].
    fn prize_wavefunction(&self) -> Result<Vec<Complex64>>;
}

/// Outcome of the preparation cross-check
#[derive(Debug, Clone, PartialEq)]
pub enum PreparationCheck {
    /// No backend supplied; the internal preparation stands alone
    Skipped,
    /// Backend and internal preparation agree within tolerance
    Consistent { backend: String, max_deviation: f64 },
    /// Backend disagrees with the internal preparation
    Inconsistent { backend: String, max_deviation: f64 },
}

/// The probability distribution the preparation must realize
fn expected_probabilities() -> [f64; REGISTER_VALUES as usize] {
    let uniform = 1.0 / DOOR_COUNT as f64;
    [uniform, uniform, uniform, 0.0]
}

/// Compare a backend's prize preparation against the internal one
///
/// Squared magnitudes are compared rather than raw amplitudes, so a
/// backend differing only by phase still passes.
///
/// # Errors
/// Propagates backend failures; an absent backend is not a failure.
pub fn verify_preparation(
    backend: Option<&dyn WavefunctionBackend>,
    tolerance: f64,
) -> Result<PreparationCheck> {
    let Some(backend) = backend else {
        return Ok(PreparationCheck::Skipped);
    };

    let wavefunction = backend.prize_wavefunction()?;
    let expected = expected_probabilities();

    let mut max_deviation: f64 = 0.0;
    for (index, target) in expected.iter().enumerate() {
        let actual = wavefunction
            .get(index)
            .map(|amplitude| amplitude.norm_sqr())
            .unwrap_or(0.0);
        max_deviation = max_deviation.max((actual - target).abs());
    }
    // extra amplitudes beyond the 4-dimensional register also count
    for amplitude in wavefunction.iter().skip(expected.len()) {
        max_deviation = max_deviation.max(amplitude.norm_sqr());
    }

    let name = backend.name().to_string();
    if max_deviation <= tolerance {
        Ok(PreparationCheck::Consistent {
            backend: name,
            max_deviation,
        })
    } else {
        Ok(PreparationCheck::Inconsistent {
            backend: name,
            max_deviation,
        })
    }
}

/// Reference backend built on the crate's own preparation
///
/// Useful as a default collaborator and as the test double for the
/// cross-check plumbing.
#[derive(Debug, Default)]
pub struct InternalWavefunction;

impl WavefunctionBackend for InternalWavefunction {
    fn name(&self) -> &str {
        "internal"
    }

    fn prize_wavefunction(&self) -> Result<Vec<Complex64>> {
        let amplitude = Complex64::new(1.0 / (DOOR_COUNT as f64).sqrt(), 0.0);
        let mut state = vec![Complex64::new(0.0, 0.0); REGISTER_VALUES as usize];
        for door in 0..DOOR_COUNT {
            state[door as usize] = amplitude;
        }
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimulatorError;

    struct BiasedBackend;

    impl WavefunctionBackend for BiasedBackend {
        fn name(&self) -> &str {
            "biased"
        }

        fn prize_wavefunction(&self) -> Result<Vec<Complex64>> {
            // all mass on door 0: a collapsed, not superposed, prize
            let mut state = vec![Complex64::new(0.0, 0.0); 4];
            state[0] = Complex64::new(1.0, 0.0);
            Ok(state)
        }
    }

    struct DeadBackend;

    impl WavefunctionBackend for DeadBackend {
        fn name(&self) -> &str {
            "dead"
        }

        fn prize_wavefunction(&self) -> Result<Vec<Complex64>> {
            Err(SimulatorError::BackendFailed {
                message: "service unreachable".to_string(),
            })
        }
    }

    #[test]
    fn test_absent_backend_skips() {
        let check = verify_preparation(None, 1e-9).unwrap();
        assert_eq!(check, PreparationCheck::Skipped);
    }

    #[test]
    fn test_internal_backend_is_consistent() {
        let backend = InternalWavefunction;
        let check = verify_preparation(Some(&backend), 1e-9).unwrap();
        assert!(matches!(check, PreparationCheck::Consistent { .. }));
    }

    #[test]
    fn test_biased_backend_is_flagged() {
        let backend = BiasedBackend;
        let check = verify_preparation(Some(&backend), 1e-9).unwrap();
        match check {
            PreparationCheck::Inconsistent { max_deviation, .. } => {
                assert!(max_deviation > 0.5);
            }
            other => panic!("expected inconsistency, got {:?}", other),
        }
    }

    #[test]
    fn test_backend_failure_propagates() {
        let backend = DeadBackend;
        let err = verify_preparation(Some(&backend), 1e-9).unwrap_err();
        assert!(matches!(err, SimulatorError::BackendFailed { .. }));
    }
}
