//! Byte-level operations on fixed-width unsigned words
//!
//! Byte positions are zero-based with position 0 = least-significant byte.
//!
//! For 32-bit value `0x04030201`:
//! - position 0 (`LL`): 0x01
//! - position 1 (`HL`): 0x02
//! - position 2 (`LH`): 0x03
//! - position 3 (`HH`): 0x04
//!
//! Positions whose shift reaches the word width are guarded: extraction
//! yields 0 and replacement leaves the word unchanged. Use [`try_byte_at`]
//! when an out-of-range position should be reported instead.

use bytes::BufMut;
use tracing::debug;

use super::Word;
use crate::error::{BitByteError, Result};

/// Shift amount for a byte position, `None` when it falls outside the word
#[inline]
fn byte_shift<T: Word>(position: u32) -> Option<usize> {
    let shift = position.checked_mul(8)?;
    (shift < T::BITS).then_some(shift as usize)
}

/// Extract the byte at `position` (0 = LSB)
///
/// `(value >> 8 * position) & 0xFF`; positions beyond the word width yield 0.
///
/// # Example
/// ```
/// use voltage_bitbyte::bytes::byte_at;
/// assert_eq!(byte_at(2, 0x0403_0201u32), 0x03);
/// ```
#[inline]
pub fn byte_at<T: Word>(position: u32, value: T) -> u8 {
    match byte_shift::<T>(position) {
        Some(shift) => (value >> shift).low_byte(),
        None => 0,
    }
}

/// Extract the byte at `position`, rejecting positions outside the word
pub fn try_byte_at<T: Word>(position: u32, value: T) -> Result<u8> {
    match byte_shift::<T>(position) {
        Some(shift) => Ok((value >> shift).low_byte()),
        None => {
            debug!(position, width = T::BITS, "Byte position out of range");
            Err(BitByteError::PositionOutOfRange {
                position,
                width: T::BITS,
            })
        },
    }
}

/// Low byte of a 16-bit value
#[inline]
pub const fn low_byte(value: u16) -> u8 {
    value as u8
}

/// High byte of a 16-bit value
#[inline]
pub const fn high_byte(value: u16) -> u8 {
    (value >> 8) as u8
}

/// Low byte of the low word of a 32-bit value (position 0)
#[inline]
pub const fn ll_byte(value: u32) -> u8 {
    value as u8
}

/// High byte of the low word of a 32-bit value (position 1)
#[inline]
pub const fn hl_byte(value: u32) -> u8 {
    (value >> 8) as u8
}

/// Low byte of the high word of a 32-bit value (position 2)
#[inline]
pub const fn lh_byte(value: u32) -> u8 {
    (value >> 16) as u8
}

/// High byte of the high word of a 32-bit value (position 3)
#[inline]
pub const fn hh_byte(value: u32) -> u8 {
    (value >> 24) as u8
}

/// Replace the byte at `position` with `byte & 0xFF`
///
/// All other bytes are preserved. Positions beyond the word width
/// return `value` unchanged.
///
/// # Example
/// ```
/// use voltage_bitbyte::bytes::set_byte_at;
/// assert_eq!(set_byte_at(2, 0x0403_0201u32, 0xFF), 0x04FF_0201);
/// ```
#[inline]
pub fn set_byte_at<T: Word>(position: u32, value: T, byte: u32) -> T {
    let Some(shift) = byte_shift::<T>(position) else {
        return value;
    };
    let mask = T::from_byte(0xFF) << shift;
    (value & !mask) | (T::from_byte(byte as u8) << shift)
}

/// Write-back form of [`set_byte_at`]
#[inline]
pub fn set_byte_in<T: Word>(target: &mut T, position: u32, byte: u32) {
    *target = set_byte_at(position, *target, byte);
}

/// Reverse the bit order of a byte (bit 0 ↔ bit 7, bit 1 ↔ bit 6, ...)
#[inline]
pub const fn reverse_bits(byte: u8) -> u8 {
    byte.reverse_bits()
}

/// Reverse the bit order of the low byte of a wider word
///
/// Bits above the low byte are discarded.
#[inline]
pub fn reverse_low_byte<T: Word>(value: T) -> u8 {
    value.low_byte().reverse_bits()
}

/// Expand an 8-bit value to its single byte
#[inline]
pub const fn expand_bytes8(value: u8) -> [u8; 1] {
    [value]
}

/// Expand a 16-bit value to its bytes, LSB first
#[inline]
pub const fn expand_bytes16(value: u16) -> [u8; 2] {
    [low_byte(value), high_byte(value)]
}

/// Expand a 32-bit value to its bytes, LSB first
#[inline]
pub const fn expand_bytes32(value: u32) -> [u8; 4] {
    [
        ll_byte(value),
        hl_byte(value),
        lh_byte(value),
        hh_byte(value),
    ]
}

/// Append the LSB-first bytes of a 16-bit value to a buffer
#[inline]
pub fn put_expanded16<B: BufMut>(buf: &mut B, value: u16) {
    buf.put_slice(&expand_bytes16(value));
}

/// Append the LSB-first bytes of a 32-bit value to a buffer
#[inline]
pub fn put_expanded32<B: BufMut>(buf: &mut B, value: u32) {
    buf.put_slice(&expand_bytes32(value));
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;
    use bytes::BytesMut;
    use tracing_test::traced_test;

    #[test]
    fn test_byte_at_positions() {
        let value = 0x0403_0201u32;
        assert_eq!(byte_at(0, value), 0x01);
        assert_eq!(byte_at(1, value), 0x02);
        assert_eq!(byte_at(2, value), 0x03);
        assert_eq!(byte_at(3, value), 0x04);
    }

    #[test]
    fn test_byte_at_out_of_width() {
        assert_eq!(byte_at(2, 0xFFFFu16), 0);
        assert_eq!(byte_at(4, u32::MAX), 0);
        assert_eq!(byte_at(u32::MAX, u64::MAX), 0);
        assert_eq!(byte_at(7, u64::MAX), 0xFF);
    }

    #[test]
    #[traced_test]
    fn test_try_byte_at() {
        assert_eq!(try_byte_at(1, 0x0201u16).unwrap(), 0x02);
        assert_eq!(
            try_byte_at(2, 0x0201u16),
            Err(BitByteError::PositionOutOfRange {
                position: 2,
                width: 16
            })
        );
        assert!(logs_contain("Byte position out of range"));
    }

    #[test]
    fn test_named_bytes() {
        assert_eq!(low_byte(0x0201), 0x01);
        assert_eq!(high_byte(0x0201), 0x02);

        assert_eq!(ll_byte(0x0403_0201), 0x01);
        assert_eq!(hl_byte(0x0403_0201), 0x02);
        assert_eq!(lh_byte(0x0403_0201), 0x03);
        assert_eq!(hh_byte(0x0403_0201), 0x04);
    }

    #[test]
    fn test_set_byte_at() {
        assert_eq!(set_byte_at(2, 0x0403_0201u32, 0xFF), 0x04FF_0201);
        assert_eq!(set_byte_at(0, 0x0403_0201u32, 0x1AB), 0x0403_02AB);
        assert_eq!(set_byte_at(1, 0xFFFFu16, 0x00), 0x00FF);
        // Out-of-width position leaves the word intact
        assert_eq!(set_byte_at(4, 0x0403_0201u32, 0xFF), 0x0403_0201);
    }

    #[test]
    fn test_set_byte_in() {
        let mut value = 0u32;
        set_byte_in(&mut value, 3, 0x12);
        set_byte_in(&mut value, 0, 0x34);
        assert_eq!(value, 0x1200_0034);
    }

    #[test]
    fn test_reverse_bits() {
        assert_eq!(reverse_bits(0b0000_0001), 0b1000_0000);
        assert_eq!(reverse_bits(0b1111_0000), 0b0000_1111);
        assert_eq!(reverse_bits(0b1010_0110), 0b0110_0101);
        assert_eq!(reverse_low_byte(0xFF01u16), 0b1000_0000);
    }

    #[test]
    fn test_expand_bytes() {
        assert_eq!(expand_bytes8(0x01), [0x01]);
        assert_eq!(expand_bytes16(0x0201), [0x01, 0x02]);
        assert_eq!(expand_bytes32(0x0403_0201), [0x01, 0x02, 0x03, 0x04]);
    }

    #[test]
    fn test_put_expanded() {
        let mut buf = BytesMut::new();
        put_expanded16(&mut buf, 0x0201);
        put_expanded32(&mut buf, 0x0605_0403);
        assert_eq!(&buf[..], &[0x01, 0x02, 0x03, 0x04, 0x05, 0x06]);
    }
}
