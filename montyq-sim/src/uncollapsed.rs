//! Static no-measurement regime
//!
//! The degenerate baseline: nothing is ever measured and the host never
//! acts, so the prize superposition carries no usable information. The
//! 16-dimensional (player ⊗ prize) wavefunction is prepared directly —
//! prize in equal 1/√3 superposition over the three doors, player on
//! door 0 for "keep" or in equal superposition over doors 1 and 2 for
//! "switch" — and the win probability is read straight off the prepared
//! state. Both strategies come out at exactly 1/3.
//!
//! Layout of the 4-bit index: player register in the high two bits,
//! prize register in the low two, matching the full game layout with the
//! host bits stripped.

use montyq_core::door::{is_valid_door, DOOR_COUNT};
use montyq_core::{Strategy, PLAYER_HOST_DIMENSION};
use num_complex::Complex64;

/// Prepare the (player ⊗ prize) wavefunction for one strategy
pub fn prepared_state(strategy: Strategy) -> Vec<Complex64> {
    let player_doors: &[u8] = match strategy {
        Strategy::Keep => &[0],
        Strategy::Switch => &[1, 2],
    };

    let prize_amplitude = 1.0 / (DOOR_COUNT as f64).sqrt();
    let player_amplitude = 1.0 / (player_doors.len() as f64).sqrt();

    let mut state = vec![Complex64::new(0.0, 0.0); PLAYER_HOST_DIMENSION];
    for prize in 0..DOOR_COUNT {
        for &player in player_doors {
            let index = ((player as usize) << 2) | prize as usize;
            state[index] = Complex64::new(prize_amplitude * player_amplitude, 0.0);
        }
    }
    state
}

/// Win probability of a prepared (player ⊗ prize) wavefunction
///
/// Sums |amplitude|² over indices where the player and prize registers
/// agree on a real door; invalid-door indices are skipped.
pub fn win_probability(state: &[Complex64]) -> f64 {
    state
        .iter()
        .enumerate()
        .filter(|(index, _)| {
            let prize = (index & 0b11) as u8;
            let player = ((index >> 2) & 0b11) as u8;
            is_valid_door(prize) && prize == player
        })
        .map(|(_, amplitude)| amplitude.norm_sqr())
        .sum()
}

/// Win probability for one strategy under this regime
pub fn strategy_probability(strategy: Strategy) -> f64 {
    win_probability(&prepared_state(strategy))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_prepared_states_are_normalized() {
        for strategy in Strategy::ALL {
            let state = prepared_state(strategy);
            let mass: f64 = state.iter().map(|a| a.norm_sqr()).sum();
            assert_relative_eq!(mass, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_neither_strategy_gains_an_edge() {
        assert_relative_eq!(
            strategy_probability(Strategy::Keep),
            1.0 / 3.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            strategy_probability(Strategy::Switch),
            1.0 / 3.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_invalid_door_indices_stay_empty() {
        for strategy in Strategy::ALL {
            let state = prepared_state(strategy);
            for (index, amplitude) in state.iter().enumerate() {
                let prize = (index & 0b11) as u8;
                let player = ((index >> 2) & 0b11) as u8;
                if !is_valid_door(prize) || !is_valid_door(player) {
                    assert_eq!(amplitude.norm_sqr(), 0.0);
                }
            }
        }
    }
}
