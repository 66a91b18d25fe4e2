//! Union-Find (disjoint set) with path compression and union-by-rank
//!
//! Backs both the per-channel Kruskal-style segmentation and the final
//! channel intersection pass. `size` and `internal difference` bookkeeping
//! are deliberately *not* part of this structure — they live in sibling
//! arrays owned by the caller, indexed by root, so that callers can update
//! them in O(1) without threading extra state through `union`.

/// Union-find over `0..n`, each element initially in its own singleton set.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<u32>,
    rank: Vec<u32>,
}

impl DisjointSet {
    /// Create `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n as u32).collect(),
            rank: vec![0; n],
        }
    }

    /// Number of elements tracked (not the number of distinct sets).
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Representative of `x`'s set, with full path compression.
    ///
    /// # Panics
    ///
    /// Panics if `x` is out of range; callers in this codebase always index
    /// with a pixel id known to be `< n`.
    pub fn find(&mut self, x: u32) -> u32 {
        if self.parent[x as usize] != x {
            let root = self.find(self.parent[x as usize]);
            self.parent[x as usize] = root;
        }
        self.parent[x as usize]
    }

    /// Merge the sets containing `a` and `b` by rank, returning the new root.
    ///
    /// A no-op (returning the shared root) if `a` and `b` are already in the
    /// same set. On a rank tie, `find(a)` becomes the new root and its rank
    /// increments.
    pub fn union(&mut self, a: u32, b: u32) -> u32 {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return root_a;
        }

        let rank_a = self.rank[root_a as usize];
        let rank_b = self.rank[root_b as usize];
        if rank_a < rank_b {
            self.parent[root_a as usize] = root_b;
            root_b
        } else if rank_a > rank_b {
            self.parent[root_b as usize] = root_a;
            root_a
        } else {
            self.parent[root_b as usize] = root_a;
            self.rank[root_a as usize] += 1;
            root_a
        }
    }

    /// Resolve every element to its root, producing the canonical label map.
    ///
    /// Runs in O(n·α(n)) and leaves the structure fully flattened (every
    /// subsequent `find` is O(1)).
    pub fn flatten(&mut self) -> Vec<u32> {
        for i in 0..self.parent.len() as u32 {
            self.find(i);
        }
        self.parent.clone()
    }
}
