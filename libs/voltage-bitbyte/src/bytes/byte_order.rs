//! Byte order representation and host endianness detection
//!
//! Host byte order is a property of the hardware/ABI: it is detected once per
//! process and cached for every later call.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::byte_ops::{expand_bytes16, expand_bytes32};
use crate::error::BitByteError;

/// Host byte order, detected on first access
static HOST_BIG_ENDIAN: LazyLock<bool> = LazyLock::new(detect_big_endian);

/// Probe the native layout of `1u16`: a zero first byte means big-endian
fn detect_big_endian() -> bool {
    let probe = 1u16.to_ne_bytes();
    let big_endian = probe[0] == 0;
    debug!(big_endian, "Detected host byte order");
    big_endian
}

/// Check whether the host stores the most significant byte first
///
/// Constant for the lifetime of the process.
#[inline]
pub fn is_big_endian() -> bool {
    *HOST_BIG_ENDIAN
}

/// Byte order of multi-byte values
///
/// Uses ABCD notation where A = most significant byte:
/// - `BigEndian (ABCD)`: 0x12345678 → [0x12, 0x34, 0x56, 0x78]
/// - `LittleEndian (DCBA)`: 0x12345678 → [0x78, 0x56, 0x34, 0x12]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", rename_all = "snake_case")]
pub enum ByteOrder {
    /// Big-endian: ABCD (most significant byte first)
    ///
    /// Network byte order.
    BigEndian,

    /// Little-endian: DCBA (least significant byte first)
    ///
    /// Intel x86 and most ARM native byte order.
    LittleEndian,
}

impl ByteOrder {
    /// Byte order of the machine running this process
    pub fn host() -> Self {
        if is_big_endian() {
            Self::BigEndian
        } else {
            Self::LittleEndian
        }
    }

    /// Get descriptive name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BigEndian => "ABCD (Big-Endian)",
            Self::LittleEndian => "DCBA (Little-Endian)",
        }
    }

    /// Check if this is the big-endian order
    pub fn is_big_endian(&self) -> bool {
        matches!(self, Self::BigEndian)
    }

    /// Lay out a 16-bit value in this order
    #[inline]
    pub fn expand16(&self, value: u16) -> [u8; 2] {
        let mut bytes = expand_bytes16(value);
        if self.is_big_endian() {
            bytes.reverse();
        }
        bytes
    }

    /// Lay out a 32-bit value in this order
    #[inline]
    pub fn expand32(&self, value: u32) -> [u8; 4] {
        let mut bytes = expand_bytes32(value);
        if self.is_big_endian() {
            bytes.reverse();
        }
        bytes
    }
}

impl FromStr for ByteOrder {
    type Err = BitByteError;

    /// Parse configuration strings
    ///
    /// - "ABCD", "AB-CD", "BE", "BIG_ENDIAN", "AB" → BigEndian
    /// - "DCBA", "DC-BA", "LE", "LITTLE_ENDIAN", "BA" → LittleEndian
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace('-', "");
        match normalized.as_str() {
            "ABCD" | "AB" | "BE" | "BIG" | "BIG_ENDIAN" | "BIGENDIAN" => Ok(Self::BigEndian),
            "DCBA" | "BA" | "LE" | "LITTLE" | "LITTLE_ENDIAN" | "LITTLEENDIAN" => {
                Ok(Self::LittleEndian)
            },
            _ => Err(BitByteError::invalid_byte_order(s)),
        }
    }
}

impl TryFrom<String> for ByteOrder {
    type Error = BitByteError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Default for ByteOrder {
    /// Default to big-endian (network byte order)
    fn default() -> Self {
        Self::BigEndian
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn test_is_big_endian_matches_target() {
        assert_eq!(is_big_endian(), cfg!(target_endian = "big"));
        assert_eq!(is_big_endian(), is_big_endian());
    }

    #[test]
    #[traced_test]
    fn test_detection_is_logged() {
        assert_eq!(detect_big_endian(), cfg!(target_endian = "big"));
        assert!(logs_contain("Detected host byte order"));
    }

    #[test]
    fn test_host() {
        assert_eq!(ByteOrder::host().is_big_endian(), is_big_endian());
    }

    #[test]
    fn test_from_str_valid() {
        assert_eq!("ABCD".parse::<ByteOrder>().unwrap(), ByteOrder::BigEndian);
        assert_eq!("AB-CD".parse::<ByteOrder>().unwrap(), ByteOrder::BigEndian);
        assert_eq!("be".parse::<ByteOrder>().unwrap(), ByteOrder::BigEndian);
        assert_eq!(
            "big_endian".parse::<ByteOrder>().unwrap(),
            ByteOrder::BigEndian
        );

        assert_eq!("DCBA".parse::<ByteOrder>().unwrap(), ByteOrder::LittleEndian);
        assert_eq!("LE".parse::<ByteOrder>().unwrap(), ByteOrder::LittleEndian);
        assert_eq!(
            "little_endian".parse::<ByteOrder>().unwrap(),
            ByteOrder::LittleEndian
        );
    }

    #[test]
    fn test_from_str_invalid() {
        assert_eq!(
            "CDAB".parse::<ByteOrder>(),
            Err(BitByteError::InvalidByteOrder("CDAB".to_string()))
        );
        assert!("".parse::<ByteOrder>().is_err());
    }

    #[test]
    fn test_expand() {
        assert_eq!(
            ByteOrder::BigEndian.expand32(0x1234_5678),
            [0x12, 0x34, 0x56, 0x78]
        );
        assert_eq!(
            ByteOrder::LittleEndian.expand32(0x1234_5678),
            [0x78, 0x56, 0x34, 0x12]
        );
        assert_eq!(ByteOrder::BigEndian.expand16(0x1234), [0x12, 0x34]);
        assert_eq!(ByteOrder::LittleEndian.expand16(0x1234), [0x34, 0x12]);
    }

    #[test]
    fn test_serde() {
        let order: ByteOrder = serde_json::from_str("\"DCBA\"").unwrap();
        assert_eq!(order, ByteOrder::LittleEndian);
        assert_eq!(
            serde_json::to_string(&ByteOrder::BigEndian).unwrap(),
            "\"big_endian\""
        );
        assert!(serde_json::from_str::<ByteOrder>("\"middle\"").is_err());
    }

    #[test]
    fn test_default_and_display() {
        assert_eq!(ByteOrder::default(), ByteOrder::BigEndian);
        assert_eq!(ByteOrder::LittleEndian.to_string(), "DCBA (Little-Endian)");
    }
}
