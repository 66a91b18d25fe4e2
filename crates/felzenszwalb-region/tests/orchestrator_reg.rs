//! Full-pipeline orchestrator regression test
//!
//! Locks channel symmetry (spec §8): permuting which byte of each pixel
//! holds the R, G, and B values must not change the final intersected
//! partition, even though the three per-channel label maps differ. The
//! fixture gives R, G, and B distinct patterns (diagonal checkerboard,
//! vertical stripes, horizontal stripes) so a channel swap actually rewrites
//! the pixel buffer instead of being a byte-for-byte no-op.

use felzenszwalb_core::Image;
use felzenszwalb_region::segment_image;
use std::collections::BTreeSet;

fn tri_pattern(size: u32) -> Image {
    let mut data = Vec::with_capacity(3 * (size * size) as usize);
    for y in 0..size {
        for x in 0..size {
            let r = if (x + y) % 2 == 0 { 0 } else { 255 };
            let g = if x % 2 == 0 { 0 } else { 255 };
            let b = if y % 2 == 0 { 0 } else { 255 };
            data.extend_from_slice(&[r, g, b]);
        }
    }
    Image::from_rgb8(size, size, data).unwrap()
}

fn partition(labels: &[u32]) -> Vec<BTreeSet<u32>> {
    let mut groups: std::collections::HashMap<u32, BTreeSet<u32>> = std::collections::HashMap::new();
    for (i, &label) in labels.iter().enumerate() {
        groups.entry(label).or_default().insert(i as u32);
    }
    let mut groups: Vec<_> = groups.into_values().collect();
    groups.sort();
    groups
}

#[test]
fn channel_symmetry_preserves_the_partition() {
    let base = tri_pattern(4);
    let width = base.width();
    let height = base.height();

    let mut swapped_data = Vec::with_capacity(base.as_rgb8().len());
    for i in 0..base.len() {
        let (r, g, b) = base.pixel(i);
        swapped_data.extend_from_slice(&[g, b, r]);
    }
    let swapped = Image::from_rgb8(width, height, swapped_data).unwrap();
    assert_ne!(
        base.as_rgb8(),
        swapped.as_rgb8(),
        "channel swap must actually change the byte buffer"
    );

    let labels_base = segment_image(&base, 0.0).unwrap();
    let labels_swapped = segment_image(&swapped, 0.0).unwrap();

    assert_eq!(partition(&labels_base), partition(&labels_swapped));
}
