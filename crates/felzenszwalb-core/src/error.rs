//! Error types for felzenszwalb-core
//!
//! Provides a unified error type for the image buffer primitives in this
//! crate. Each variant captures enough context for diagnostics without
//! exposing internal implementation details.

use thiserror::Error;

/// felzenszwalb-core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Image dimensions are zero on at least one axis
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Pixel buffer length doesn't match `3 * width * height`
    #[error("pixel buffer length mismatch: expected {expected}, got {actual}")]
    BufferLengthMismatch { expected: usize, actual: usize },
}

/// Result type alias for felzenszwalb-core operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;
