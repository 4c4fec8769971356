//! Configuration schema types for `binvis.toml`
//!
//! Defines the structure and validation rules for encode/decode settings.

use crate::color::MetricName;
use crate::curve::{CurveSpec, SizePolicy, SIDES};
use crate::error::BinvisError;
use crate::schemes::SchemeName;
use serde::{Deserialize, Serialize};

/// Rendering settings shared by encode and decode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Color scheme
    #[serde(default)]
    pub scheme: SchemeName,
    /// Curve side; omitted means the smallest side that fits the region
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curve_size: Option<u32>,
    /// Block size of each cell in written PNGs
    #[serde(default = "default_scale")]
    pub scale: u8,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { scheme: SchemeName::default(), curve_size: None, scale: default_scale() }
    }
}

/// Largest accepted `render.scale`.
pub const MAX_SCALE: u8 = 64;

fn default_scale() -> u8 {
    1
}

/// Byte range to visualize
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegionConfig {
    /// First byte offset
    #[serde(default)]
    pub start: usize,
    /// One past the last byte offset; omitted means end of file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<usize>,
}

/// Reconstruction settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DecodeConfig {
    /// Match off-palette colors to the perceptually nearest class
    #[serde(default)]
    pub closest: bool,
    /// Difference metric for closest matching
    #[serde(default)]
    pub metric: MetricName,
    /// Seed for representative byte selection; omitted means OS entropy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// Complete binvis.toml configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BinvisConfig {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub region: RegionConfig,
    #[serde(default)]
    pub decode: DecodeConfig,
}

/// Configuration validation error
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "render.curve_size")
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "binvis.toml: '{}' {}", self.field, self.message)
    }
}

impl BinvisConfig {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if let Some(size) = self.render.curve_size {
            if !SIDES.contains(&size) {
                errors.push(ConfigValidationError {
                    field: "render.curve_size".to_string(),
                    message: format!("must be one of {:?}, got {}", SIDES, size),
                });
            }
        }

        if !(1..=MAX_SCALE).contains(&self.render.scale) {
            errors.push(ConfigValidationError {
                field: "render.scale".to_string(),
                message: format!("must be between 1 and {}, got {}", MAX_SCALE, self.render.scale),
            });
        }

        if let Some(end) = self.region.end {
            if end <= self.region.start {
                errors.push(ConfigValidationError {
                    field: "region.end".to_string(),
                    message: format!("must be greater than region.start ({})", self.region.start),
                });
            }
        }

        errors
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Curve selection policy for `render.curve_size`.
    pub fn size_policy(&self) -> Result<SizePolicy, BinvisError> {
        match self.render.curve_size {
            Some(side) => Ok(SizePolicy::Fixed(CurveSpec::from_side(side)?)),
            None => Ok(SizePolicy::Fit),
        }
    }
}
