//! Felzenszwalb-Huttenlocher segmentation of a single color channel
//!
//! Sorts the 8-connected edge set of a channel ascending by weight, then
//! runs a Kruskal-style pass that accepts an edge into a merged component
//! whenever its weight doesn't exceed the Felzenszwalb merge threshold.

use crate::edge::build_edges;
use crate::error::{RegionError, RegionResult};
use felzenszwalb_core::{Channel, DisjointSet, Image};

/// Segment one color channel of `image`, returning the canonical label map
/// (`label[i] = find(i)`, the pixel index of i's component root).
///
/// # Errors
///
/// Returns [`RegionError::InvalidK`] if `k` is negative.
pub fn segment_channel(image: &Image, channel: Channel, k: f32) -> RegionResult<Vec<u32>> {
    if k < 0.0 {
        return Err(RegionError::InvalidK(k));
    }

    let n = image.len();
    if n == 0 {
        return Ok(Vec::new());
    }

    let mut edges = build_edges(image, channel);
    edges.sort_by_key(|e| e.weight);

    let width = image.width();
    let mut sets = DisjointSet::new(n);
    let mut size = vec![1u32; n];
    let mut int_diff = vec![0u8; n];

    for edge in &edges {
        let v = edge.v(width);
        let root_u = sets.find(edge.u);
        let root_v = sets.find(v);
        if root_u == root_v {
            continue;
        }

        let threshold_u = int_diff[root_u as usize] as f32 + k / size[root_u as usize] as f32;
        let threshold_v = int_diff[root_v as usize] as f32 + k / size[root_v as usize] as f32;
        let tau = threshold_u.min(threshold_v);

        if (edge.weight as f32) <= tau {
            let merged_diff = edge
                .weight
                .max(int_diff[root_u as usize])
                .max(int_diff[root_v as usize]);
            let merged_size = size[root_u as usize] + size[root_v as usize];

            let new_root = sets.union(root_u, root_v);
            // Written to both pre-union roots: whichever one `union`
            // promoted now holds the correct merged aggregates.
            int_diff[root_u as usize] = merged_diff;
            int_diff[root_v as usize] = merged_diff;
            size[root_u as usize] = merged_size;
            size[root_v as usize] = merged_size;
            debug_assert!(new_root == root_u || new_root == root_v);
        }
    }

    Ok(sets.flatten())
}
