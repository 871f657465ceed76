//! Operator construction
//!
//! Two operators drive the game protocol:
//!
//! - the **reveal operator** (64×64) writes the host's revealed door into
//!   the host register, branching into an equal superposition when the
//!   rules leave two candidate doors;
//! - the **switch operator** (16×16 over the (player, host) registers,
//!   extended to 64×64 by leaving the prize register untouched) moves the
//!   player to the remaining unopened door.
//!
//! The reveal operator is block-diagonal over (prize, player): each 4×4
//! block acts on the host register alone. The block column for the
//! unrevealed sentinel code is prescribed by [`crate::rules::reveal_column`];
//! the remaining columns are completed to an orthonormal set by
//! Gram–Schmidt with identity preference, so already-revealed codes map
//! to themselves wherever orthogonality permits. Blocks touching an
//! invalid door code are the identity, which keeps the invalid subspace
//! closed.
//!
//! Both constructions are pure functions of the fixed rules and produce
//! bit-identical matrices on every call.

use crate::rules::{reveal_column, switch_target};
use montyq_core::basis::{BasisState, DIMENSION, PLAYER_HOST_DIMENSION};
use montyq_core::door::{is_valid_door, REGISTER_VALUES};
use num_complex::Complex64;

/// Host register code meaning "no door revealed yet"
///
/// The host register stores the revealed door directly, so code 0 doubles
/// as the sentinel. Reachable states never reveal door 0 (the player is
/// committed to it), so the overlap is confined to unreachable blocks.
pub const UNREVEALED: u8 = 0;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);

/// Residual mass below which a candidate column counts as already spanned
const RESIDUAL_FLOOR: f64 = 1e-9;

/// One column of a 4×4 host-register block
type BlockColumn = [Complex64; 4];

/// Build the 64×64 reveal operator
///
/// For each valid (prize, player) pair the host-register block sends the
/// sentinel code to the candidate distribution: amplitude 1 onto the
/// single empty non-player door, or 1/√2 onto each of the two empty doors
/// when the prize sits behind the player's door. The result is a
/// permutation-like matrix with occasional 2-way 1/√2 splits.
pub fn reveal_operator() -> Vec<Complex64> {
    let mut matrix = vec![ZERO; DIMENSION * DIMENSION];

    for prize in 0..REGISTER_VALUES {
        for player in 0..REGISTER_VALUES {
            let block = reveal_block(prize, player);
            for (code_in, column) in block.iter().enumerate() {
                let col = BasisState::new(prize, player, code_in as u8).index();
                for (code_out, &value) in column.iter().enumerate() {
                    if value == ZERO {
                        continue;
                    }
                    let row = BasisState::new(prize, player, code_out as u8).index();
                    matrix[row * DIMENSION + col] = value;
                }
            }
        }
    }

    matrix
}

/// Build the 16×16 switch operator over the (player, host) registers
///
/// A permutation matrix: where the switch is defined the player moves to
/// the third door with the host register fixed, pairing basis states into
/// two-cycles; everywhere else the operator is the identity.
pub fn switch_operator() -> Vec<Complex64> {
    let mut matrix = vec![ZERO; PLAYER_HOST_DIMENSION * PLAYER_HOST_DIMENSION];

    for col in 0..PLAYER_HOST_DIMENSION {
        let state = BasisState::from_player_host_index(col, 0);
        let target = switch_target(state.player, state.host).unwrap_or(state.player);
        let row = BasisState::new(0, target, state.host).player_host_index();
        matrix[row * PLAYER_HOST_DIMENSION + col] = ONE;
    }

    matrix
}

/// Build the switch operator extended to the full 64-dimensional space
///
/// Conceptually the switch block tensored with the identity on the prize
/// register, but the register layout puts the prize in the low bits, so
/// the extension transforms each basis index directly: decode, move the
/// player, re-encode with the prize unchanged. Less error-prone than a
/// literal tensor product against this bit layout.
pub fn extended_switch_operator() -> Vec<Complex64> {
    let mut matrix = vec![ZERO; DIMENSION * DIMENSION];

    for col in 0..DIMENSION {
        let state = BasisState::from_index(col);
        let target = switch_target(state.player, state.host).unwrap_or(state.player);
        let row = BasisState::new(state.prize, target, state.host).index();
        matrix[row * DIMENSION + col] = ONE;
    }

    matrix
}

/// The 4×4 host-register block for one (prize, player) pair
///
/// Returned as an array of columns: `block[code_in]` is the image of the
/// host code `code_in`.
fn reveal_block(prize: u8, player: u8) -> [BlockColumn; 4] {
    if !is_valid_door(prize) || !is_valid_door(player) {
        return identity_block();
    }

    let mut sentinel_image = [ZERO; 4];
    for (door, amplitude) in reveal_column(prize, player) {
        sentinel_image[door as usize] = Complex64::new(amplitude, 0.0);
    }

    complete_block(sentinel_image)
}

/// Complete a prescribed sentinel column to a full 4×4 unitary block
///
/// Columns for the already-revealed codes are chosen by Gram–Schmidt with
/// identity preference: each code keeps its own basis vector when the
/// orthonormalized residual survives, and falls back to the lowest basis
/// vector not yet spanned otherwise. The procedure is deterministic, so
/// repeated builds agree bitwise.
fn complete_block(sentinel_image: BlockColumn) -> [BlockColumn; 4] {
    let mut columns = [[ZERO; 4]; 4];
    columns[UNREVEALED as usize] = sentinel_image;
    let mut placed = 1;

    for code in 1..4usize {
        let preferred = basis_column(code);
        let column = orthonormal_residual(&preferred, &columns[..placed])
            .unwrap_or_else(|| fallback_column(&columns[..placed]));
        columns[code] = column;
        placed += 1;
    }

    columns
}

/// Basis vector |code⟩ as a block column
fn basis_column(code: usize) -> BlockColumn {
    let mut column = [ZERO; 4];
    column[code] = ONE;
    column
}

/// Orthonormalize a candidate against the placed columns
///
/// Returns `None` when the candidate is already spanned (residual mass
/// below [`RESIDUAL_FLOOR`]).
fn orthonormal_residual(candidate: &BlockColumn, placed: &[BlockColumn]) -> Option<BlockColumn> {
    let mut residual = *candidate;
    for column in placed {
        let overlap: Complex64 = column
            .iter()
            .zip(residual.iter())
            .map(|(c, r)| c.conj() * r)
            .sum();
        for (r, c) in residual.iter_mut().zip(column.iter()) {
            *r -= overlap * c;
        }
    }

    let mass: f64 = residual.iter().map(|a| a.norm_sqr()).sum();
    if mass < RESIDUAL_FLOOR {
        return None;
    }

    let inverse_norm = mass.sqrt().recip();
    for r in residual.iter_mut() {
        *r *= inverse_norm;
    }
    Some(residual)
}

/// First basis vector with a surviving residual against the placed columns
fn fallback_column(placed: &[BlockColumn]) -> BlockColumn {
    for code in 0..4usize {
        if let Some(column) = orthonormal_residual(&basis_column(code), placed) {
            return column;
        }
    }
    unreachable!("fewer than four orthonormal columns always leave a free basis vector")
}

fn identity_block() -> [BlockColumn; 4] {
    let mut block = [[ZERO; 4]; 4];
    for (code, column) in block.iter_mut().enumerate() {
        column[code] = ONE;
    }
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix_ops::identity_matrix;
    use crate::unitarity::is_unitary;
    use approx::assert_relative_eq;
    use montyq_core::door::INVALID_DOOR;
    use std::f64::consts::FRAC_1_SQRT_2;

    const TOLERANCE: f64 = 1e-10;

    fn entry(matrix: &[Complex64], row: usize, col: usize) -> Complex64 {
        matrix[row * DIMENSION + col]
    }

    #[test]
    fn test_reveal_operator_is_unitary() {
        let reveal = reveal_operator();
        assert!(is_unitary(&reveal, DIMENSION, TOLERANCE));
    }

    #[test]
    fn test_switch_operator_is_unitary() {
        let switch = switch_operator();
        assert!(is_unitary(&switch, PLAYER_HOST_DIMENSION, TOLERANCE));
    }

    #[test]
    fn test_extended_switch_operator_is_unitary() {
        let switch = extended_switch_operator();
        assert!(is_unitary(&switch, DIMENSION, TOLERANCE));
    }

    #[test]
    fn test_prize_behind_player_door_splits_evenly() {
        // prize and player both on door 0: two-way 1/√2 branch onto
        // reveal doors 1 and 2
        let reveal = reveal_operator();
        let col = BasisState::new(0, 0, UNREVEALED).index();

        let branch_1 = entry(&reveal, BasisState::new(0, 0, 1).index(), col);
        let branch_2 = entry(&reveal, BasisState::new(0, 0, 2).index(), col);
        assert_relative_eq!(branch_1.re, FRAC_1_SQRT_2, epsilon = 1e-12);
        assert_relative_eq!(branch_2.re, FRAC_1_SQRT_2, epsilon = 1e-12);
        assert_relative_eq!(branch_1.im, 0.0, epsilon = 1e-12);
        assert_relative_eq!(branch_2.im, 0.0, epsilon = 1e-12);

        // no amplitude escapes the branch pair
        for row in 0..DIMENSION {
            if row != BasisState::new(0, 0, 1).index() && row != BasisState::new(0, 0, 2).index() {
                assert_eq!(entry(&reveal, row, col), Complex64::new(0.0, 0.0));
            }
        }
    }

    #[test]
    fn test_distinct_doors_reveal_deterministically() {
        // prize on door 1, player on door 0: the host must open door 2
        let reveal = reveal_operator();
        let col = BasisState::new(1, 0, UNREVEALED).index();
        let row = BasisState::new(1, 0, 2).index();

        assert_relative_eq!(entry(&reveal, row, col).re, 1.0, epsilon = 1e-12);
        for other in 0..DIMENSION {
            if other != row {
                assert_eq!(entry(&reveal, other, col), Complex64::new(0.0, 0.0));
            }
        }
    }

    #[test]
    fn test_invalid_door_blocks_are_identity() {
        let reveal = reveal_operator();
        for code in 0..REGISTER_VALUES {
            for host in 0..REGISTER_VALUES {
                let with_invalid_prize = BasisState::new(INVALID_DOOR, code, host).index();
                let with_invalid_player = BasisState::new(code, INVALID_DOOR, host).index();
                for &col in &[with_invalid_prize, with_invalid_player] {
                    for row in 0..DIMENSION {
                        let expected = if row == col {
                            Complex64::new(1.0, 0.0)
                        } else {
                            Complex64::new(0.0, 0.0)
                        };
                        assert_eq!(entry(&reveal, row, col), expected);
                    }
                }
            }
        }
    }

    #[test]
    fn test_reveal_column_norms_are_one() {
        let reveal = reveal_operator();
        for col in 0..DIMENSION {
            let mass: f64 = (0..DIMENSION)
                .map(|row| entry(&reveal, row, col).norm_sqr())
                .sum();
            assert_relative_eq!(mass, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_switch_moves_to_third_door_and_keeps_host() {
        let switch = extended_switch_operator();
        // player on door 0, host revealed door 2: switching lands on door 1
        let col = BasisState::new(0, 0, 2).index();
        let row = BasisState::new(0, 1, 2).index();
        assert_eq!(entry(&switch, row, col), Complex64::new(1.0, 0.0));
    }

    #[test]
    fn test_switch_is_self_inverse() {
        let switch = extended_switch_operator();
        let squared = crate::matrix_ops::matrix_multiply(&switch, &switch, DIMENSION);
        let identity = identity_matrix(DIMENSION);
        for (a, b) in squared.iter().zip(identity.iter()) {
            assert_relative_eq!(a.re, b.re, epsilon = 1e-12);
            assert_relative_eq!(a.im, b.im, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_switch_fixes_prize_register() {
        let switch = extended_switch_operator();
        for col in 0..DIMENSION {
            let source = BasisState::from_index(col);
            for row in 0..DIMENSION {
                if entry(&switch, row, col) != Complex64::new(0.0, 0.0) {
                    let target = BasisState::from_index(row);
                    assert_eq!(source.prize, target.prize);
                    assert_eq!(source.host, target.host);
                }
            }
        }
    }

    #[test]
    fn test_rebuilds_are_bit_identical() {
        assert_eq!(reveal_operator(), reveal_operator());
        assert_eq!(switch_operator(), switch_operator());
        assert_eq!(extended_switch_operator(), extended_switch_operator());
    }
}
