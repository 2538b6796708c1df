//! Fixed-width unsigned word abstraction

use num_traits::{PrimInt, Unsigned};

/// Unsigned fixed-width integer usable by the byte and bit helpers
///
/// Implemented for `u8`, `u16`, `u32`, `u64`, `u128` and `usize`.
pub trait Word: PrimInt + Unsigned {
    /// Width of the type in bits
    const BITS: u32;

    /// Truncate to the least-significant byte
    fn low_byte(self) -> u8;

    /// Widen a byte into this type
    fn from_byte(byte: u8) -> Self;
}

macro_rules! impl_word {
    ($($t:ty),* $(,)?) => {
        $(
            impl Word for $t {
                const BITS: u32 = <$t>::BITS;

                #[inline]
                fn low_byte(self) -> u8 {
                    self as u8
                }

                #[inline]
                fn from_byte(byte: u8) -> Self {
                    byte as $t
                }
            }
        )*
    };
}

impl_word!(u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bits() {
        assert_eq!(<u8 as Word>::BITS, 8);
        assert_eq!(<u16 as Word>::BITS, 16);
        assert_eq!(<u32 as Word>::BITS, 32);
        assert_eq!(<u128 as Word>::BITS, 128);
    }

    #[test]
    fn test_low_byte_truncates() {
        assert_eq!(0x1234u16.low_byte(), 0x34);
        assert_eq!(0xDEAD_BEEFu32.low_byte(), 0xEF);
        assert_eq!(u64::from_byte(0xAB), 0xAB);
    }
}
