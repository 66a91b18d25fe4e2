//! Top-level segmentation entry point
//!
//! Fans the three per-channel segmentations out across independent OS
//! threads, joins them, and intersects the results. Also hosts the
//! post-processing `merge` and `region_size_histogram` primitives, which
//! operate purely on label slices and never re-run the Felzenszwalb
//! predicate.

use crate::error::{RegionError, RegionResult};
use crate::intersect::intersect_channels;
use crate::segment::segment_channel;
use felzenszwalb_core::{Channel, Image};
use std::collections::HashMap;

/// Run the full Felzenszwalb-Huttenlocher pipeline: one `ChannelSegmenter`
/// per color channel, fanned out across three scoped threads, joined, then
/// intersected into a single canonical label map of length `image.len()`.
///
/// # Errors
///
/// Returns [`RegionError::InvalidK`] if `k` is negative, or
/// [`RegionError::WorkerPanicked`] if a channel worker thread panics.
pub fn segment(image: &Image, k: f32) -> RegionResult<Vec<u32>> {
    if k < 0.0 {
        return Err(RegionError::InvalidK(k));
    }

    let (labels_r, labels_g, labels_b) = std::thread::scope(|scope| {
        let r = scope.spawn(|| segment_channel(image, Channel::R, k));
        let g = scope.spawn(|| segment_channel(image, Channel::G, k));
        let b = scope.spawn(|| segment_channel(image, Channel::B, k));

        let r = r.join().map_err(|_| RegionError::WorkerPanicked)?;
        let g = g.join().map_err(|_| RegionError::WorkerPanicked)?;
        let b = b.join().map_err(|_| RegionError::WorkerPanicked)?;
        Ok::<_, RegionError>((r?, g?, b?))
    })?;

    Ok(intersect_channels(
        &labels_r,
        &labels_g,
        &labels_b,
        image.width(),
        image.height(),
    ))
}

/// Coalesce every label in `selected` down to its smallest member, in place.
///
/// A no-op if `selected` names fewer than two distinct labels. Does not
/// re-check spatial connectivity — purely a label-rewriting primitive.
pub fn merge(labels: &mut [u32], selected: &[u32]) {
    let mut distinct: Vec<u32> = selected.to_vec();
    distinct.sort_unstable();
    distinct.dedup();

    if distinct.len() < 2 {
        return;
    }

    let representative = distinct[0];
    let rest: std::collections::HashSet<u32> = distinct[1..].iter().copied().collect();

    for label in labels.iter_mut() {
        if rest.contains(label) {
            *label = representative;
        }
    }
}

/// Count pixels per label, sorted by count descending.
///
/// A side artifact used by the driver layer's region-size report (see the
/// crate's top-level docs for the stable textual format).
pub fn region_size_histogram(labels: &[u32]) -> Vec<(u32, usize)> {
    let mut counts: HashMap<u32, usize> = HashMap::new();
    for &label in labels {
        *counts.entry(label).or_insert(0) += 1;
    }
    let mut histogram: Vec<(u32, usize)> = counts.into_iter().collect();
    histogram.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    histogram
}

/// Remap a canonical (sparse, pixel-index-valued) label map to a dense
/// `[0, R)` range, preserving first-seen order. Not part of the core
/// contract — a convenience for downstream rendering.
pub fn densify(labels: &[u32]) -> Vec<u32> {
    let mut remap: HashMap<u32, u32> = HashMap::new();
    let mut next = 0u32;
    labels
        .iter()
        .map(|&label| {
            *remap.entry(label).or_insert_with(|| {
                let id = next;
                next += 1;
                id
            })
        })
        .collect()
}
