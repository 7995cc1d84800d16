//! # polysemy
//!
//! Substitute-based word sense induction: cluster occurrences of a target
//! word into senses from the substitute tokens a masked language model
//! predicts for each occurrence.
//!
//! The pipeline is bag-of-substitutes vectorization (presence + TF-IDF),
//! average-linkage hierarchical clustering over cosine distances, a merge
//! pass absorbing low-support senses, and a final document-id → sense-id
//! map. Every call is deterministic and side-effect free; model
//! inference, batching, and file I/O live upstream of this crate.
//!
//! ```rust
//! use polysemy::{cluster, BowHierarchicalLinkage, RepInstance, RepInstances};
//!
//! let instances: RepInstances = vec![
//!     RepInstance::new(0, vec!["dog".into(), "cat".into()], vec![0.5, 0.3]).unwrap(),
//!     RepInstance::new(1, vec!["dog".into(), "pet".into()], vec![0.6, 0.2]).unwrap(),
//!     RepInstance::new(2, vec!["bank".into(), "shore".into()], vec![0.4, 0.4]).unwrap(),
//! ]
//! .into();
//!
//! let config = BowHierarchicalLinkage::new().with_min_sense_instances(0);
//! let senses = cluster(&instances, &config).unwrap();
//! assert_eq!(senses.len(), 3);
//! ```

pub mod cluster;
pub mod display;
pub mod distance;
/// Error types used across `polysemy`.
pub mod error;
pub mod instance;
pub mod senses;
pub mod vectorize;

#[cfg(test)]
mod pipeline_tests;

pub use cluster::{
    make, BowHierarchicalLinkage, Dendrogram, Linkage, Merge, MergeOutcome, Metric,
    SenseClustering,
};
pub use display::{display, group_by_sense, representative_samples, DisplayRecord, DisplayRecords};
pub use distance::{cdist_cosine, cosine_distance, pdist_cosine};
pub use error::{Error, Result};
pub use instance::{DocId, RepInstance, RepInstances};
pub use senses::{assign_senses, n_senses, SenseMap};
pub use vectorize::{vectorize, BowFeatures};

/// Cluster a collection into a sense map with the given configuration.
///
/// Convenience wrapper over [`SenseClustering::fit_predict`].
pub fn cluster(instances: &RepInstances, config: &BowHierarchicalLinkage) -> Result<SenseMap> {
    config.fit_predict(instances)
}
