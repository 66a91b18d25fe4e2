//! Error types for felzenszwalb-region

use felzenszwalb_core::CoreError;
use thiserror::Error;

/// Errors that can occur during segmentation
#[derive(Error, Debug)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// `k` must be non-negative
    #[error("invalid k: {0} (must be >= 0)")]
    InvalidK(f32),

    /// A channel-segmentation worker thread panicked
    #[error("a channel segmentation worker panicked")]
    WorkerPanicked,
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
