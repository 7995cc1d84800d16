//! Clustering traits.

use crate::error::Result;
use crate::instance::RepInstances;
use crate::senses::SenseMap;

/// Trait for sense-induction clustering algorithms.
pub trait SenseClustering {
    /// Cluster the collection and return the document-id → sense-id map.
    ///
    /// Either a complete, internally consistent map comes back or an
    /// error; there are no partial results. Deterministic for identical
    /// inputs.
    fn fit_predict(&self, instances: &RepInstances) -> Result<SenseMap>;
}
