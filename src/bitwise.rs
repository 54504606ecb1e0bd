//! Bitwise operations on 32-bit signed integers.
//!
//! These follow the host surface, whose integers are 32 bits wide for bit
//! manipulation. The shift functions take the offset first and the value
//! second, and use only the low five bits of the offset, so an offset of 32
//! behaves like 0 and no offset ever panics.
//!
//! # Examples
//!
//! ```rust
//! use listops::bitwise;
//!
//! assert_eq!(bitwise::and(0b1100, 0b1010), 0b1000);
//! assert_eq!(bitwise::shift_left_by(3, 1), 8);
//! assert_eq!(bitwise::shift_right_by(1, -32), -16);
//! assert_eq!(bitwise::shift_right_zf_by(1, -32), 2_147_483_632);
//! ```

const OFFSET_MASK: i32 = 0b1_1111;

#[allow(clippy::cast_sign_loss)]
const fn masked(offset: i32) -> u32 {
    (offset & OFFSET_MASK) as u32
}

/// Bitwise AND.
#[inline]
#[must_use]
pub const fn and(left: i32, right: i32) -> i32 {
    left & right
}

/// Bitwise OR.
#[inline]
#[must_use]
pub const fn or(left: i32, right: i32) -> i32 {
    left | right
}

/// Bitwise XOR.
#[inline]
#[must_use]
pub const fn xor(left: i32, right: i32) -> i32 {
    left ^ right
}

/// Flips every bit.
#[inline]
#[must_use]
pub const fn complement(value: i32) -> i32 {
    !value
}

/// Shifts `value` left by `offset` bits, filling with zeros.
#[inline]
#[must_use]
pub const fn shift_left_by(offset: i32, value: i32) -> i32 {
    value.wrapping_shl(masked(offset))
}

/// Shifts `value` right by `offset` bits, copying the sign bit into the
/// vacated positions.
#[inline]
#[must_use]
pub const fn shift_right_by(offset: i32, value: i32) -> i32 {
    value.wrapping_shr(masked(offset))
}

/// Shifts `value` right by `offset` bits, filling with zeros.
///
/// The bits are treated as unsigned for the shift and reinterpreted as
/// signed afterwards, so `shift_right_zf_by(0, -1)` is still `-1`.
#[inline]
#[must_use]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_wrap)]
pub const fn shift_right_zf_by(offset: i32, value: i32) -> i32 {
    ((value as u32).wrapping_shr(masked(offset))) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0b0110, 0b0011, 0b0010, 0b0111, 0b0101)]
    #[case(-1, 0, 0, -1, -1)]
    #[case(i32::MIN, -1, i32::MIN, -1, i32::MAX)]
    fn test_and_or_xor(
        #[case] left: i32,
        #[case] right: i32,
        #[case] expected_and: i32,
        #[case] expected_or: i32,
        #[case] expected_xor: i32,
    ) {
        assert_eq!(and(left, right), expected_and);
        assert_eq!(or(left, right), expected_or);
        assert_eq!(xor(left, right), expected_xor);
    }

    #[rstest]
    #[case(0, -1)]
    #[case(-1, 0)]
    #[case(5, -6)]
    fn test_complement(#[case] value: i32, #[case] expected: i32) {
        assert_eq!(complement(value), expected);
    }

    #[rstest]
    #[case(1, 5, 10)]
    #[case(31, 1, i32::MIN)]
    #[case(32, 7, 7)]
    #[case(33, 7, 14)]
    #[case(-1, 1, i32::MIN)]
    fn test_shift_left_by(#[case] offset: i32, #[case] value: i32, #[case] expected: i32) {
        assert_eq!(shift_left_by(offset, value), expected);
    }

    #[rstest]
    #[case(1, 32, 16)]
    #[case(2, -32, -8)]
    #[case(31, -1, -1)]
    #[case(32, -32, -32)]
    fn test_shift_right_by_propagates_sign(
        #[case] offset: i32,
        #[case] value: i32,
        #[case] expected: i32,
    ) {
        assert_eq!(shift_right_by(offset, value), expected);
    }

    #[rstest]
    #[case(0, -1, -1)]
    #[case(1, -1, i32::MAX)]
    #[case(2, -32, 1_073_741_816)]
    #[case(31, -1, 1)]
    #[case(1, 32, 16)]
    fn test_shift_right_zf_by_fills_with_zeros(
        #[case] offset: i32,
        #[case] value: i32,
        #[case] expected: i32,
    ) {
        assert_eq!(shift_right_zf_by(offset, value), expected);
    }
}
