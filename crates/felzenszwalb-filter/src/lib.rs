//! felzenszwalb-filter - Separable Gaussian pre-filter
//!
//! An external collaborator of the segmentation crates: smooths an
//! [`felzenszwalb_core::Image`] before it is handed to
//! `felzenszwalb_region::segment_image`. Never invoked by the core
//! segmentation crates themselves.

pub mod convolve;
mod error;
pub mod kernel;

pub use convolve::gaussian_blur;
pub use error::{FilterError, FilterResult};
pub use kernel::GaussianKernel;
