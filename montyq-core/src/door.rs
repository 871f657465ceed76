//! Door register values and helpers

/// Number of real doors in the game
pub const DOOR_COUNT: u8 = 3;

/// The unused fourth code a 2-bit register can hold
///
/// No valid door ever becomes 3; operators treat register values of 3
/// as identity pass-through so the invalid subspace stays closed.
pub const INVALID_DOOR: u8 = 3;

/// Number of values a 2-bit register can encode (doors 0-2 plus the
/// invalid code)
pub const REGISTER_VALUES: u8 = 4;

/// Check whether a register value names a real door
#[inline]
pub fn is_valid_door(door: u8) -> bool {
    door < DOOR_COUNT
}

/// The unique door that is neither `a` nor `b`
///
/// Doors 0, 1 and 2 sum to 3, so the remaining door is `3 - a - b`.
///
/// # Panics
/// Debug builds panic if `a` and `b` are not two distinct valid doors.
#[inline]
pub fn third_door(a: u8, b: u8) -> u8 {
    debug_assert!(is_valid_door(a) && is_valid_door(b) && a != b);
    DOOR_COUNT - a - b
}
