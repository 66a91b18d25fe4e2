//! Separable Gaussian smoothing
//!
//! Applies a 1-D Gaussian mask as a horizontal pass followed by a vertical
//! pass, independently per color channel, with replicate (clamp) border
//! handling.

use crate::error::FilterResult;
use crate::kernel::GaussianKernel;
use felzenszwalb_core::Image;

/// Smooth `image` with a separable Gaussian mask of `mask_size` taps and
/// standard deviation `sigma`, returning a new image of the same dimensions.
///
/// # Errors
///
/// Returns [`crate::FilterError::InvalidKernel`] if `mask_size` is even,
/// below 3, or `sigma` is not positive.
pub fn gaussian_blur(image: &Image, mask_size: u32, sigma: f32) -> FilterResult<Image> {
    let kernel = GaussianKernel::new(mask_size, sigma)?;
    let width = image.width();
    let height = image.height();

    let horizontal = convolve_axis(image.as_rgb8(), width, height, &kernel, Axis::Horizontal);
    let both = convolve_axis(&horizontal, width, height, &kernel, Axis::Vertical);

    // gaussian_blur never produces a buffer length mismatch or zero
    // dimension: both are preserved unchanged from a valid `image`.
    Ok(Image::from_rgb8(width, height, both).expect("dimensions preserved from source image"))
}

#[derive(Clone, Copy)]
enum Axis {
    Horizontal,
    Vertical,
}

fn convolve_axis(
    data: &[u8],
    width: u32,
    height: u32,
    kernel: &GaussianKernel,
    axis: Axis,
) -> Vec<u8> {
    let w = width as i32;
    let h = height as i32;
    let half = kernel.center() as i32;
    let mut out = vec![0u8; data.len()];

    for y in 0..h {
        for x in 0..w {
            let mut sum = [0.0f32; 3];

            for (tap, &weight) in kernel.weights().iter().enumerate() {
                let offset = tap as i32 - half;
                let (sx, sy) = match axis {
                    Axis::Horizontal => ((x + offset).clamp(0, w - 1), y),
                    Axis::Vertical => (x, (y + offset).clamp(0, h - 1)),
                };
                let base = 3 * (sy as usize * width as usize + sx as usize);
                sum[0] += data[base] as f32 * weight;
                sum[1] += data[base + 1] as f32 * weight;
                sum[2] += data[base + 2] as f32 * weight;
            }

            let out_base = 3 * (y as usize * width as usize + x as usize);
            out[out_base] = sum[0].round().clamp(0.0, 255.0) as u8;
            out[out_base + 1] = sum[1].round().clamp(0.0, 255.0) as u8;
            out[out_base + 2] = sum[2].round().clamp(0.0, 255.0) as u8;
        }
    }

    out
}
