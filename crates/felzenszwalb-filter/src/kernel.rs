//! 1-D Gaussian convolution kernel
//!
//! Separable Gaussian smoothing only needs a single 1-D mask applied as a
//! horizontal pass followed by a vertical pass, rather than a full 2-D
//! kernel.

use crate::error::{FilterError, FilterResult};

/// A normalized 1-D Gaussian convolution mask.
#[derive(Debug, Clone)]
pub struct GaussianKernel {
    /// Mask values, summing to 1.0
    weights: Vec<f32>,
    /// Index of the center tap
    center: usize,
}

impl GaussianKernel {
    /// Build a Gaussian mask of `size` taps (must be odd and >= 3) with
    /// standard deviation `sigma` (must be positive), normalized to sum to
    /// 1.0.
    pub fn new(size: u32, sigma: f32) -> FilterResult<Self> {
        if size < 3 || size.is_multiple_of(2) {
            return Err(FilterError::InvalidKernel(format!(
                "mask size must be odd and >= 3, got {size}"
            )));
        }
        if sigma <= 0.0 {
            return Err(FilterError::InvalidKernel(format!(
                "sigma must be positive, got {sigma}"
            )));
        }

        let half = (size / 2) as i32;
        let two_sigma_sq = 2.0 * sigma * sigma;
        let mut weights = vec![0.0f32; size as usize];
        let mut sum = 0.0f32;

        for (i, w) in weights.iter_mut().enumerate() {
            let d = (i as i32 - half) as f32;
            let value = (-(d * d) / two_sigma_sq).exp();
            *w = value;
            sum += value;
        }
        for w in &mut weights {
            *w /= sum;
        }

        Ok(GaussianKernel {
            weights,
            center: half as usize,
        })
    }

    /// Number of taps in the mask.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Whether the mask is empty (never true for a validly-constructed kernel).
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Index of the center tap.
    pub fn center(&self) -> usize {
        self.center
    }

    /// Mask weights, in order.
    pub fn weights(&self) -> &[f32] {
        &self.weights
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_even_size() {
        assert!(matches!(
            GaussianKernel::new(4, 1.0),
            Err(FilterError::InvalidKernel(_))
        ));
    }

    #[test]
    fn rejects_size_below_three() {
        assert!(matches!(
            GaussianKernel::new(1, 1.0),
            Err(FilterError::InvalidKernel(_))
        ));
    }

    #[test]
    fn rejects_non_positive_sigma() {
        assert!(matches!(
            GaussianKernel::new(5, 0.0),
            Err(FilterError::InvalidKernel(_))
        ));
        assert!(matches!(
            GaussianKernel::new(5, -1.0),
            Err(FilterError::InvalidKernel(_))
        ));
    }

    #[test]
    fn weights_sum_to_one() {
        let kernel = GaussianKernel::new(5, 1.0).unwrap();
        let sum: f32 = kernel.weights().iter().sum();
        assert!((sum - 1.0).abs() < 1e-5);
    }

    #[test]
    fn center_tap_is_the_maximum() {
        let kernel = GaussianKernel::new(7, 1.5).unwrap();
        let center_val = kernel.weights()[kernel.center()];
        for &w in kernel.weights() {
            assert!(w <= center_val + f32::EPSILON);
        }
    }

    #[test]
    fn is_symmetric_around_the_center() {
        let kernel = GaussianKernel::new(5, 2.0).unwrap();
        let w = kernel.weights();
        assert!((w[0] - w[4]).abs() < 1e-6);
        assert!((w[1] - w[3]).abs() < 1e-6);
    }
}
