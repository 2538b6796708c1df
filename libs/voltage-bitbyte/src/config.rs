//! Value post-processing configuration
//!
//! `NumericConfig` is meant to be embedded in a point or channel
//! configuration: it clamps and rounds raw readings and selects the byte
//! order used when a value is written out.
//!
//! ```toml
//! precision = 2
//! min = 0.0
//! max = 100.0
//! byte_order = "DCBA"
//! ```

use std::path::Path;

use figment::{
    providers::{Format, Json, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::bytes::ByteOrder;
use crate::error::{BitByteError, Result};
use crate::numeric::{clamp_range, round_to_precision, MAX_DECIMAL_PRECISION};

/// Clamp/round/encode settings for a numeric value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumericConfig {
    /// Decimal digits kept by [`NumericConfig::apply`]; `None` disables rounding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<u32>,
    /// Lower clamp bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Upper clamp bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Byte order used by the `encode_*` helpers
    pub byte_order: ByteOrder,
}

impl NumericConfig {
    /// Check precision and bound consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(precision) = self.precision {
            if precision > MAX_DECIMAL_PRECISION {
                return Err(BitByteError::config(format!(
                    "precision {} exceeds maximum {}",
                    precision, MAX_DECIMAL_PRECISION
                )));
            }
        }

        if let (Some(min), Some(max)) = (self.min, self.max) {
            if min > max {
                return Err(BitByteError::config(format!(
                    "min {} is greater than max {}",
                    min, max
                )));
            }
        }

        Ok(())
    }

    /// Clamp to the configured bounds, then round to the configured precision
    ///
    /// Missing bounds are open-ended.
    pub fn apply(&self, value: f64) -> f64 {
        let clamped = clamp_range(
            value,
            self.min.unwrap_or(f64::NEG_INFINITY),
            self.max.unwrap_or(f64::INFINITY),
        );
        match self.precision {
            Some(precision) => round_to_precision(clamped, precision),
            None => clamped,
        }
    }

    /// Lay out a 16-bit value in the configured byte order
    pub fn encode_u16(&self, value: u16) -> [u8; 2] {
        self.byte_order.expand16(value)
    }

    /// Lay out a 32-bit value in the configured byte order
    pub fn encode_u32(&self, value: u32) -> [u8; 4] {
        self.byte_order.expand32(value)
    }

    /// Extract and validate from caller-assembled providers
    pub fn from_figment(figment: Figment) -> Result<Self> {
        let config: Self = figment.extract()?;
        if let Err(e) = config.validate() {
            warn!("Invalid numeric configuration: {}", e);
            return Err(e);
        }
        Ok(config)
    }

    /// Load from a TOML, YAML or JSON file, selected by extension
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(BitByteError::config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .ok_or_else(|| BitByteError::config("Config file must have an extension"))?;

        let figment = match extension {
            "toml" => Figment::new().merge(Toml::file(path)),
            "yaml" | "yml" => Figment::new().merge(Yaml::file(path)),
            "json" => Figment::new().merge(Json::file(path)),
            _ => {
                return Err(BitByteError::config(format!(
                    "Unsupported config file format: {}",
                    extension
                )))
            },
        };

        debug!(path = %path.display(), "Loading numeric configuration");
        Self::from_figment(figment)
    }
}
