//! Merge tree produced by agglomerative clustering.
//!
//! A dendrogram records the nested merge history of bottom-up clustering:
//! which clusters merged, at what distance, and how large the result was.
//! Cutting it at a distance threshold recovers a flat labeling.

/// A dendrogram: the ordered merge history of agglomerative clustering.
///
/// Cluster ids follow the SciPy/MATLAB convention `kodama` shares: leaves
/// are `0..n-1` and the i-th merge creates cluster id `n+i`. Merges must be
/// recorded in non-decreasing distance order (average linkage is monotone,
/// so `kodama`'s step order satisfies this).
#[derive(Debug, Clone)]
pub struct Dendrogram {
    merges: Vec<Merge>,
    n_items: usize,
}

/// A single merge step.
#[derive(Debug, Clone, Copy)]
pub struct Merge {
    /// First cluster being merged.
    pub cluster_a: usize,
    /// Second cluster being merged.
    pub cluster_b: usize,
    /// Dissimilarity at which the merge occurred.
    pub distance: f64,
    /// Size of the resulting cluster.
    pub size: usize,
}

impl Dendrogram {
    /// Create an empty dendrogram over `n_items` leaves.
    pub fn new(n_items: usize) -> Self {
        Self {
            merges: Vec::with_capacity(n_items.saturating_sub(1)),
            n_items,
        }
    }

    /// Record a merge step.
    pub fn add_merge(&mut self, cluster_a: usize, cluster_b: usize, distance: f64, size: usize) {
        self.merges.push(Merge {
            cluster_a,
            cluster_b,
            distance,
            size,
        });
    }

    /// Distance of the merge step `max_clusters` steps before the final
    /// single-cluster merge, or 0.0 when fewer steps exist.
    ///
    /// Cutting inclusively at this distance leaves at most `max_clusters`
    /// labels; with fewer merges than `max_clusters` every item keeps its
    /// own label, except exact duplicates which merge at distance zero.
    /// `max_clusters` must be at least 1.
    pub fn threshold_for_max_clusters(&self, max_clusters: usize) -> f64 {
        debug_assert!(max_clusters >= 1);
        if self.merges.len() >= max_clusters {
            self.merges[self.merges.len() - max_clusters].distance
        } else {
            0.0
        }
    }

    /// Cluster assignments after applying every merge with
    /// `distance <= threshold`.
    ///
    /// The cut is inclusive, matching SciPy's
    /// `fcluster(criterion='distance')`: clusters sharing a merge at the
    /// threshold distance itself stay together. Labels are renumbered to
    /// `0..k` by first occurrence in item order.
    pub fn cut_at_distance(&self, threshold: f64) -> Vec<usize> {
        // Parent pointers over the id space: leaves, then one id per merge.
        // A merge step only ever references leaves or earlier merges, so
        // every referenced id is already final when it is linked.
        let mut parent: Vec<usize> = (0..self.n_items + self.merges.len()).collect();
        for (step, merge) in self.merges.iter().enumerate() {
            if merge.distance > threshold {
                break;
            }
            let merged_id = self.n_items + step;
            parent[merge.cluster_a] = merged_id;
            parent[merge.cluster_b] = merged_id;
        }

        let mut raw = Vec::with_capacity(self.n_items);
        for item in 0..self.n_items {
            let mut id = item;
            while parent[id] != id {
                id = parent[id];
            }
            raw.push(id);
        }

        // First-seen renumbering keeps label order aligned with row order.
        let mut seen: Vec<usize> = Vec::new();
        raw.into_iter()
            .map(|id| match seen.iter().position(|&s| s == id) {
                Some(label) => label,
                None => {
                    seen.push(id);
                    seen.len() - 1
                }
            })
            .collect()
    }

    /// Number of leaves.
    pub fn n_items(&self) -> usize {
        self.n_items
    }

    /// Number of merges recorded.
    pub fn n_merges(&self) -> usize {
        self.merges.len()
    }

    /// Iterate over merge steps.
    pub fn merges(&self) -> impl Iterator<Item = &Merge> {
        self.merges.iter()
    }
}
