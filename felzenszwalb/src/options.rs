//! Segmentation configuration

/// Configuration for a full segmentation run: the Felzenszwalb `k` parameter
/// plus the optional Gaussian pre-filter applied before `segment_image`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentOptions {
    /// Region-scale parameter; larger values produce larger regions.
    pub k: f32,
    /// Whether to run the Gaussian pre-filter before segmenting.
    pub use_gaussian: bool,
    /// Gaussian mask size (odd, >= 3). Only consulted if `use_gaussian`.
    pub gaussian_mask_size: u32,
    /// Gaussian standard deviation (> 0). Only consulted if `use_gaussian`.
    pub gaussian_sigma: f32,
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self {
            k: 300.0,
            use_gaussian: false,
            gaussian_mask_size: 5,
            gaussian_sigma: 0.8,
        }
    }
}

impl SegmentOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the region-scale parameter
    pub fn with_k(mut self, k: f32) -> Self {
        self.k = k;
        self
    }

    /// Enable or disable the Gaussian pre-filter
    pub fn with_gaussian(mut self, use_gaussian: bool) -> Self {
        self.use_gaussian = use_gaussian;
        self
    }

    /// Set the Gaussian mask size
    pub fn with_gaussian_mask_size(mut self, mask_size: u32) -> Self {
        self.gaussian_mask_size = mask_size;
        self
    }

    /// Set the Gaussian standard deviation
    pub fn with_gaussian_sigma(mut self, sigma: f32) -> Self {
        self.gaussian_sigma = sigma;
        self
    }
}
