//! Multi-operand byte XOR
//!
//! Every operand is masked to its low 8 bits before combination, so
//! `xor_all([a, b, c]) == (a & 0xFF) ^ (b & 0xFF) ^ (c & 0xFF)`.
//! Typical use is a longitudinal XOR checksum over a frame.

use super::Word;

/// XOR the low bytes of all operands
///
/// Accepts any number of operands; an empty sequence yields 0.
///
/// # Example
/// ```
/// use voltage_bitbyte::bytes::xor_all;
/// assert_eq!(xor_all([0x12u32, 0x34, 0x1_56]), 0x12 ^ 0x34 ^ 0x56);
/// assert_eq!(xor_all([0x12u8]), 0x12);
/// ```
#[inline]
pub fn xor_all<I>(values: I) -> u8
where
    I: IntoIterator,
    I::Item: Word,
{
    values
        .into_iter()
        .fold(0u8, |acc, value| acc ^ value.low_byte())
}

/// XOR the low bytes of a literal operand list
///
/// Expands to `((a) & 0xFF) ^ ((b) & 0xFF) ^ ...` evaluated in the operands'
/// own type, so it works in `const` contexts and with untyped literals.
///
/// # Example
/// ```
/// use voltage_bitbyte::byte_xor;
/// assert_eq!(byte_xor!(0x12), 0x12);
/// assert_eq!(byte_xor!(0x1FF, 0x0F, 0xF0), 0x00);
/// ```
#[macro_export]
macro_rules! byte_xor {
    ($value:expr $(,)?) => {
        (($value) & 0xFF)
    };
    ($value:expr, $($rest:expr),+ $(,)?) => {
        (($value) & 0xFF) ^ $crate::byte_xor!($($rest),+)
    };
}
