//! State engine: preparation, operator application and probability
//! extraction

use crate::error::{Result, StateError};
use crate::state_vector::StateVector;
use montyq_core::basis::{BasisState, DIMENSION};
use montyq_core::door::DOOR_COUNT;
use num_complex::Complex64;

/// Drives statevectors through the game protocol
///
/// The engine itself carries no state between calls: statevectors go in
/// and come out as values, so independent simulations never share or
/// mutate each other's vectors.
///
/// # Example
/// ```
/// use montyq_state::StateEngine;
///
/// let engine = StateEngine::new();
/// let psi = engine.prepare_initial();
/// assert!(psi.is_normalized(1e-12));
/// // the player starts on the prize door in exactly one of three branches
/// assert!((engine.win_probability(&psi) - 1.0 / 3.0).abs() < 1e-12);
/// ```
#[derive(Debug, Default)]
pub struct StateEngine;

/// One row of the basis-indexed amplitude table
#[derive(Debug, Clone, PartialEq)]
pub struct AmplitudeRow {
    /// Basis index into the statevector
    pub index: usize,
    /// Decoded register triple
    pub state: BasisState,
    /// Complex amplitude at this index
    pub amplitude: Complex64,
    /// |amplitude|²
    pub probability: f64,
}

impl StateEngine {
    /// Create a new engine
    pub fn new() -> Self {
        Self
    }

    /// Prepare the initial game state
    ///
    /// Equal 1/√3 amplitude on the three basis states with the prize
    /// behind a real door, the player committed to door 0 and the host
    /// register still on the unrevealed code; zero everywhere else. Door
    /// 0 is the fixed committed choice, not a draw.
    pub fn prepare_initial(&self) -> StateVector {
        let amplitude = Complex64::new(1.0 / (DOOR_COUNT as f64).sqrt(), 0.0);
        let mut psi = StateVector::zero(DIMENSION);
        for prize in 0..DOOR_COUNT {
            let index = BasisState::new(prize, 0, 0).index();
            psi.amplitudes_mut()[index] = amplitude;
        }
        psi
    }

    /// Apply an operator: psi' = U · psi
    ///
    /// The operator must be a flattened row-major square matrix matching
    /// the state dimension.
    ///
    /// # Errors
    /// [`StateError::DimensionMismatch`] when the lengths disagree; this
    /// is fatal and must abort the pipeline.
    pub fn apply(&self, operator: &[Complex64], psi: &StateVector) -> Result<StateVector> {
        let dimension = psi.dimension();
        if operator.len() != dimension * dimension {
            return Err(StateError::DimensionMismatch {
                expected: dimension,
                actual: (operator.len() as f64).sqrt() as usize,
            });
        }

        let input = psi.amplitudes();
        let mut output = StateVector::zero(dimension);
        let out = output.amplitudes_mut();
        for (row, out_amplitude) in out.iter_mut().enumerate() {
            let mut sum = Complex64::new(0.0, 0.0);
            for (col, &in_amplitude) in input.iter().enumerate() {
                let entry = operator[row * dimension + col];
                if entry != Complex64::new(0.0, 0.0) {
                    sum += entry * in_amplitude;
                }
            }
            *out_amplitude = sum;
        }
        Ok(output)
    }

    /// Probability of the win event: player register equals prize
    /// register, both naming real doors
    ///
    /// Amplitude on invalid-door indices is ignored; it must be ~0 when
    /// the protocol invariants held (see [`StateEngine::check_valid_subspace`]).
    pub fn win_probability(&self, psi: &StateVector) -> f64 {
        psi.amplitudes()
            .iter()
            .enumerate()
            .filter(|(index, _)| BasisState::from_index(*index).is_win())
            .map(|(_, amplitude)| amplitude.norm_sqr())
            .sum()
    }

    /// Probability mass sitting on basis states with an invalid door code
    pub fn invalid_door_mass(&self, psi: &StateVector) -> f64 {
        psi.amplitudes()
            .iter()
            .enumerate()
            .filter(|(index, _)| BasisState::from_index(*index).has_invalid_door())
            .map(|(_, amplitude)| amplitude.norm_sqr())
            .sum()
    }

    /// Assert the invalid-door subspace is unpopulated
    ///
    /// # Errors
    /// [`StateError::InvalidBasisState`] naming the worst offending index
    /// when any invalid-door basis state carries probability above the
    /// tolerance. This signals a logic bug in operator construction and
    /// should be reported loudly.
    pub fn check_valid_subspace(&self, psi: &StateVector, tolerance: f64) -> Result<()> {
        let mut worst: Option<(usize, f64)> = None;
        for (index, amplitude) in psi.amplitudes().iter().enumerate() {
            if !BasisState::from_index(index).has_invalid_door() {
                continue;
            }
            let probability = amplitude.norm_sqr();
            if probability > tolerance && worst.map_or(true, |(_, p)| probability > p) {
                worst = Some((index, probability));
            }
        }
        match worst {
            Some((index, probability)) => Err(StateError::InvalidBasisState { index, probability }),
            None => Ok(()),
        }
    }

    /// Basis-indexed amplitude table for diagnostics and reporting
    pub fn amplitude_table(&self, psi: &StateVector) -> Vec<AmplitudeRow> {
        psi.amplitudes()
            .iter()
            .enumerate()
            .map(|(index, &amplitude)| AmplitudeRow {
                index,
                state: BasisState::from_index(index),
                amplitude,
                probability: amplitude.norm_sqr(),
            })
            .collect()
    }
}
