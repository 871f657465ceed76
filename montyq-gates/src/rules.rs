//! Game rules as pure functions
//!
//! These functions describe what the host and the player do, with no
//! matrix bookkeeping attached: the reveal rule returns an outgoing
//! amplitude distribution and the switch rule a target door. The
//! [`builder`](crate::builder) module compiles them into operators.

use montyq_core::door::{is_valid_door, third_door, DOOR_COUNT};

/// Doors the host may reveal for a given prize and player door
///
/// Set semantics over `{0, 1, 2}` minus the prize door minus the player
/// door: one candidate when the doors differ, two when they coincide.
/// Never empty on valid doors, since at most two doors are excluded.
pub fn reveal_candidates(prize: u8, player: u8) -> Vec<u8> {
    debug_assert!(is_valid_door(prize) && is_valid_door(player));
    (0..DOOR_COUNT)
        .filter(|&door| door != prize && door != player)
        .collect()
}

/// Outgoing amplitude distribution of the host's reveal
///
/// One `(door, amplitude)` entry per candidate door. A single candidate
/// gets amplitude 1; two candidates (prize door equals player door) each
/// get 1/√2 — an equal-superposition branch, not a random choice. Both
/// branches coexist in the resulting statevector.
pub fn reveal_column(prize: u8, player: u8) -> Vec<(u8, f64)> {
    let candidates = reveal_candidates(prize, player);
    let amplitude = 1.0 / (candidates.len() as f64).sqrt();
    candidates
        .into_iter()
        .map(|door| (door, amplitude))
        .collect()
}

/// Where a switching player lands, if the switch is defined
///
/// Defined when the player and host doors are distinct real doors: the
/// player moves to the unique remaining door. Returns `None` (identity
/// action) when the doors coincide or either register holds the invalid
/// code; such states are unreachable under the protocol.
pub fn switch_target(player: u8, host: u8) -> Option<u8> {
    if is_valid_door(player) && is_valid_door(host) && player != host {
        Some(third_door(player, host))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_candidates_single_when_doors_differ() {
        assert_eq!(reveal_candidates(1, 0), vec![2]);
        assert_eq!(reveal_candidates(2, 0), vec![1]);
        assert_eq!(reveal_candidates(0, 1), vec![2]);
        assert_eq!(reveal_candidates(2, 1), vec![0]);
    }

    #[test]
    fn test_candidates_pair_when_doors_coincide() {
        assert_eq!(reveal_candidates(0, 0), vec![1, 2]);
        assert_eq!(reveal_candidates(1, 1), vec![0, 2]);
        assert_eq!(reveal_candidates(2, 2), vec![0, 1]);
    }

    #[test]
    fn test_candidate_count_never_zero_or_three() {
        for prize in 0..3 {
            for player in 0..3 {
                let count = reveal_candidates(prize, player).len();
                assert!(count == 1 || count == 2);
                assert_eq!(count == 2, prize == player);
            }
        }
    }

    #[test]
    fn test_column_amplitudes() {
        let column = reveal_column(1, 0);
        assert_eq!(column, vec![(2, 1.0)]);

        let column = reveal_column(0, 0);
        assert_eq!(column.len(), 2);
        for (_, amplitude) in column {
            assert_relative_eq!(amplitude, std::f64::consts::FRAC_1_SQRT_2, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_switch_reaches_third_door() {
        assert_eq!(switch_target(0, 1), Some(2));
        assert_eq!(switch_target(0, 2), Some(1));
        assert_eq!(switch_target(1, 2), Some(0));
    }

    #[test]
    fn test_switch_undefined_cases() {
        assert_eq!(switch_target(1, 1), None);
        assert_eq!(switch_target(3, 1), None);
        assert_eq!(switch_target(1, 3), None);
        assert_eq!(switch_target(3, 3), None);
    }

    #[test]
    fn test_switch_is_an_involution() {
        for player in 0..3 {
            for host in 0..3 {
                if let Some(target) = switch_target(player, host) {
                    assert_eq!(switch_target(target, host), Some(player));
                }
            }
        }
    }
}
