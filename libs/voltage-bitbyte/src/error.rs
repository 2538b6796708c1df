//! Bit/Byte Utility Error Types
//!
//! The unchecked operations in this crate are total and never fail.
//! These errors are returned only by the `try_*`/`checked_*` variants,
//! positional argument selection and configuration loading.

use thiserror::Error;

/// Result type for voltage-bitbyte operations
pub type Result<T> = std::result::Result<T, BitByteError>;

/// Bit/byte utility errors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BitByteError {
    /// Byte position does not fit in the word
    #[error("Byte position {position} out of range for {width}-bit word")]
    PositionOutOfRange { position: u32, width: u32 },

    /// Bit index does not fit in the word
    #[error("Bit index {bit} out of range for {width}-bit word")]
    BitIndexOutOfRange { bit: u32, width: u32 },

    /// 1-based argument position outside the supplied arguments
    #[error("Argument position {position} out of range (1..={count})")]
    ArgumentPosition { position: usize, count: usize },

    /// Arithmetic overflow
    #[error("Overflow: {0}")]
    Overflow(String),

    /// Scaled value does not fit the i32 truncation range
    #[error("Value {value} scaled to {precision} decimal digits exceeds i32 range")]
    ScaledOutOfRange { value: f64, precision: u32 },

    /// Unrecognized byte order name
    #[error("Invalid byte order: {0}")]
    InvalidByteOrder(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<figment::Error> for BitByteError {
    fn from(err: figment::Error) -> Self {
        BitByteError::Config(err.to_string())
    }
}

// Helper methods for creating errors
impl BitByteError {
    pub fn overflow(msg: impl Into<String>) -> Self {
        BitByteError::Overflow(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        BitByteError::Config(msg.into())
    }

    pub fn invalid_byte_order(msg: impl Into<String>) -> Self {
        BitByteError::InvalidByteOrder(msg.into())
    }

    /// Check if this error comes from a caller-supplied position or index
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            BitByteError::PositionOutOfRange { .. }
                | BitByteError::BitIndexOutOfRange { .. }
                | BitByteError::ArgumentPosition { .. }
                | BitByteError::ScaledOutOfRange { .. }
        )
    }
}
