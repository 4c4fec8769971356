//! Error types for the encode/decode core

use crate::color::{to_hex, Color};
use thiserror::Error;

/// Error type for region, layout, and reconstruction failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum BinvisError {
    /// Region bounds are inverted or fall outside the buffer
    #[error("invalid region [{start}, {end}) for a buffer of {len} bytes")]
    RegionBounds { start: usize, end: usize, len: usize },
    /// Buffer or region contains no bytes
    #[error("cannot visualize an empty region")]
    EmptyRegion,
    /// Edited grid does not have the dimensions the encoder produced
    #[error("grid is {}x{}, expected {}x{}", .actual.0, .actual.1, .expected.0, .expected.1)]
    GridShapeMismatch { expected: (u32, u32), actual: (u32, u32) },
    /// Exact-mode lookup found a color that belongs to no class of the scheme
    #[error("unknown color {} at pixel ({x}, {y})", to_hex(.color))]
    UnknownColor { x: u32, y: u32, color: Color },
    /// Curve side is not on the supported ladder
    #[error("unsupported curve size {0}, expected one of 2, 4, 8, 16, 32, 64, 128, 256")]
    UnsupportedCurveSize(u32),
    /// No builtin scheme with this name
    #[error("unknown color scheme '{0}'")]
    UnknownScheme(String),
}

/// Convenience alias used throughout the core
pub type Result<T> = std::result::Result<T, BinvisError>;

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_unknown_color_message_names_pixel() {
        let err = BinvisError::UnknownColor { x: 3, y: 17, color: Rgb([1, 2, 255]) };
        assert_eq!(err.to_string(), "unknown color #0102FF at pixel (3, 17)");
    }

    #[test]
    fn test_grid_shape_message() {
        let err = BinvisError::GridShapeMismatch { expected: (256, 1024), actual: (256, 1000) };
        assert_eq!(err.to_string(), "grid is 256x1000, expected 256x1024");
    }

    #[test]
    fn test_region_message() {
        let err = BinvisError::RegionBounds { start: 10, end: 4, len: 100 };
        assert!(err.to_string().contains("[10, 4)"));
    }
}
