//! Combine three per-channel label maps into one intersected label map
//!
//! Two pixels share a label in the result iff they share a label on every
//! one of the R, G, B per-channel partitions **and** are 8-connected through
//! a path of such pixel pairs. A purely key-based intersection (hashing the
//! `(L_R, L_G, L_B)` triple) would erroneously group spatially disjoint
//! regions that happen to share a triple, so this is implemented as an
//! 8-connected union pass instead.

use felzenszwalb_core::DisjointSet;

/// Intersect three per-channel label maps of a `width`×`height` grid.
///
/// `labels_r`, `labels_g`, `labels_b` must each have length `width * height`.
pub fn intersect_channels(
    labels_r: &[u32],
    labels_g: &[u32],
    labels_b: &[u32],
    width: u32,
    height: u32,
) -> Vec<u32> {
    let n = (width as usize) * (height as usize);
    debug_assert_eq!(labels_r.len(), n);
    debug_assert_eq!(labels_g.len(), n);
    debug_assert_eq!(labels_b.len(), n);

    if n == 0 {
        return Vec::new();
    }

    let mut sets = DisjointSet::new(n);

    // Forward-only directions (right, down, down-right, down-left) combined
    // with the `u < v` ordering they guarantee cover every unordered
    // 8-neighbour pair exactly once, mirroring the edge builder.
    const DELTAS: [(i32, i32); 4] = [(1, 0), (0, 1), (1, 1), (-1, 1)];

    for y in 0..height as i32 {
        for x in 0..width as i32 {
            let u = (y as usize) * (width as usize) + (x as usize);
            for &(dx, dy) in &DELTAS {
                let (nx, ny) = (x + dx, y + dy);
                if nx < 0 || ny < 0 || nx >= width as i32 || ny >= height as i32 {
                    continue;
                }
                let v = (ny as usize) * (width as usize) + (nx as usize);
                if labels_r[u] == labels_r[v] && labels_g[u] == labels_g[v] && labels_b[u] == labels_b[v]
                {
                    sets.union(u as u32, v as u32);
                }
            }
        }
    }

    sets.flatten()
}
