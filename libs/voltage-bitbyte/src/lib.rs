//! Voltage Bit/Byte Utility Library
//!
//! Small, stateless helpers over fixed-width integers and floats for
//! VoltageEMS protocol and point-processing code.
//!
//! # Architecture
//!
//! This library provides:
//! - **Bytes**: Byte extraction/replacement, bit reversal, byte expansion,
//!   single-bit operations, XOR checksums, host byte order detection
//! - **Variadic**: Compile-time argument counting, positional selection
//! - **Numeric**: Range clamping, powers, powers of ten, decimal rounding
//! - **Config**: Deserializable clamp/round/byte-order settings
//!
//! Unchecked operations are total: out-of-width byte positions and bit
//! indices are guarded rather than left to shift overflow. Each has a
//! `try_*`/`checked_*` counterpart returning [`BitByteError`].

pub mod bytes;
pub mod config;
pub mod error;
pub mod numeric;
pub mod variadic;

// Re-export core types
pub use crate::bytes::{is_big_endian, xor_all, ByteOrder, Word};
pub use config::NumericConfig;
pub use error::{BitByteError, Result};
pub use numeric::{
    checked_power, checked_round_to_precision, clamp_range, power, power_of_ten,
    round_to_precision,
};
pub use variadic::arg_at;
