//! felzenszwalb - Felzenszwalb-Huttenlocher graph-based image segmentation
//!
//! This is the facade crate tying together:
//!
//! - [`felzenszwalb_core`] - the `Image` buffer and `DisjointSet` primitive.
//! - [`felzenszwalb_region`] - the segmentation algorithm itself (`segment_image`,
//!   `merge`, `region_size_histogram`).
//! - [`felzenszwalb_filter`] - the optional Gaussian pre-filter.
//!
//! The `felzenszwalb-cli` binary (in this same crate) wraps these with image
//! file I/O and a region-size report.

pub use felzenszwalb_core::{Channel, CoreError, CoreResult, DisjointSet, Image};
pub use felzenszwalb_filter::{gaussian_blur, FilterError, FilterResult, GaussianKernel};
pub use felzenszwalb_region::{
    densify, merge, region_size_histogram, segment_image, RegionError, RegionResult,
};

mod options;

pub use options::SegmentOptions;
