//! Error types for netpbm-core
//!
//! Provides a unified error type for raster construction and pixel access.
//! Drawing and transform operations never fail; only the operations that
//! can violate a raster invariant return [`Result`].

use thiserror::Error;

/// netpbm-core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Raster dimensions whose sample count does not fit in memory
    #[error("invalid raster dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Maximum sample value outside `1..=255`
    #[error("invalid maximum sample value: {0} (expected 1..=255)")]
    InvalidMaxValue(u32),

    /// Pixel coordinate outside the raster
    #[error("pixel ({x}, {y}) out of bounds for {width}x{height} raster")]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Sample with a channel above the raster's maximum value
    #[error("sample at ({x}, {y}) exceeds maximum value {max}")]
    SampleOutOfRange { x: u32, y: u32, max: u8 },

    /// Sample buffer whose length does not match `width * height`
    #[error("sample buffer length mismatch: expected {expected}, got {actual}")]
    DataLength { expected: usize, actual: usize },
}

/// Result type alias for netpbm-core operations
pub type Result<T> = std::result::Result<T, Error>;
