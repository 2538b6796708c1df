//! Byte and bit processing utilities
//!
//! Provides byte extraction/replacement, bit manipulation, XOR checksums
//! and host byte order detection over fixed-width unsigned integers.
//!
//! # Design Principles
//!
//! - **Total**: Out-of-width positions and bit indices are guarded, never UB
//! - **Generic**: One implementation for every unsigned width via [`Word`]
//! - **Inline**: Every helper is a small `#[inline]` function

pub mod bit_ops;
pub mod byte_ops;
pub mod byte_order;
pub mod word;
pub mod xor;

pub use bit_ops::*;
pub use byte_ops::*;
pub use byte_order::{is_big_endian, ByteOrder};
pub use word::Word;
pub use xor::xor_all;
