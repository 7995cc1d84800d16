//! Sense clustering over bag-of-substitutes vectors.
//!
//! The clustering here is specialized, not general purpose: the inputs
//! are sparse high-dimensional presence vectors of substitute words, and
//! the pipeline always runs hierarchical linkage followed by a fixed
//! merge heuristic for low-support senses.
//!
//! Why hierarchical rather than a partitional method: the number of
//! senses a word has is unknown up front. Cutting a dendrogram at a
//! distance threshold bounds the sense count without fixing it, and the
//! follow-up merge pass removes the spurious tail the cut leaves behind.
//!
//! [`BowHierarchicalLinkage`] is the only shipped algorithm; [`make`]
//! resolves it by name for callers wiring configuration from strings.

mod dendrogram;
mod hierarchical;
mod merge;
mod traits;

pub use dendrogram::{Dendrogram, Merge};
pub use hierarchical::{BowHierarchicalLinkage, Linkage, Metric};
pub use merge::{merge_small_senses, sense_centroids, MergeOutcome};
pub use traits::SenseClustering;

/// Resolve a clustering algorithm by name.
///
/// Only `"bow hierarchical"` (case-insensitive) is known.
pub fn make(alg_name: &str) -> Option<Box<dyn SenseClustering>> {
    match alg_name.to_lowercase().as_str() {
        "bow hierarchical" => Some(Box::new(BowHierarchicalLinkage::new())),
        _ => None,
    }
}
