//! Single-bit operations on fixed-width unsigned words
//!
//! Common use cases:
//! - Status register flag inspection
//! - Coil/discrete input packing
//! - Control word manipulation
//!
//! `set_bit`, `clear_bit` and `toggle_bit` mutate the caller's word in place;
//! `with_bit`/`without_bit` are the pure equivalents. Bit indices at or beyond
//! the word width read as 0 and leave the word unchanged.

use tracing::debug;

use super::Word;
use crate::error::{BitByteError, Result};

/// Single-bit mask for `bit`, `None` when the index falls outside the word
#[inline]
fn bit_mask<T: Word>(bit: u32) -> Option<T> {
    (bit < T::BITS).then(|| T::one() << bit as usize)
}

/// Read a single bit as 0 or 1
#[inline]
pub fn get_bit<T: Word>(value: T, bit: u32) -> u8 {
    if bit >= T::BITS {
        return 0;
    }
    (value >> bit as usize).low_byte() & 0x01
}

/// Check whether a single bit is set
#[inline]
pub fn is_bit_set<T: Word>(value: T, bit: u32) -> bool {
    get_bit(value, bit) == 1
}

/// Read a single bit, rejecting indices outside the word
pub fn try_get_bit<T: Word>(value: T, bit: u32) -> Result<u8> {
    if bit >= T::BITS {
        debug!(bit, width = T::BITS, "Bit index out of range");
        return Err(BitByteError::BitIndexOutOfRange {
            bit,
            width: T::BITS,
        });
    }
    Ok(get_bit(value, bit))
}

/// Set a single bit in place (`value |= 1 << bit`)
#[inline]
pub fn set_bit<T: Word>(value: &mut T, bit: u32) {
    if let Some(mask) = bit_mask::<T>(bit) {
        *value = *value | mask;
    }
}

/// Clear a single bit in place (`value &= !(1 << bit)`)
#[inline]
pub fn clear_bit<T: Word>(value: &mut T, bit: u32) {
    if let Some(mask) = bit_mask::<T>(bit) {
        *value = *value & !mask;
    }
}

/// Toggle a single bit in place
#[inline]
pub fn toggle_bit<T: Word>(value: &mut T, bit: u32) {
    if let Some(mask) = bit_mask::<T>(bit) {
        *value = *value ^ mask;
    }
}

/// Copy of `value` with `bit` set
#[inline]
pub fn with_bit<T: Word>(mut value: T, bit: u32) -> T {
    set_bit(&mut value, bit);
    value
}

/// Copy of `value` with `bit` cleared
#[inline]
pub fn without_bit<T: Word>(mut value: T, bit: u32) -> T {
    clear_bit(&mut value, bit);
    value
}
