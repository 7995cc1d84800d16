//! Bag-of-substitutes hierarchical sense induction.
//!
//! Occurrences of an ambiguous word are clustered into senses from the
//! substitute words a masked language model predicts for each occurrence:
//! two occurrences that accept the same substitutes likely share a
//! meaning.
//!
//! # The Pipeline
//!
//! 1. **Vectorize**: one presence row per occurrence over the shared
//!    substitute vocabulary, TF-IDF reweighted by default.
//! 2. **Link**: condensed pairwise cosine distances feed an agglomerative
//!    linkage (average by default).
//! 3. **Cut**: the dendrogram is cut at the distance of the merge step
//!    `max_number_senses` steps from the root, yielding between 1 and
//!    `max_number_senses` initial senses.
//! 4. **Absorb**: senses with fewer than `min_sense_instances` members
//!    fold into their nearest big sense by centroid distance.
//! 5. **Map**: surviving senses are renumbered densely and assigned back
//!    to document ids.
//!
//! # Linkage Methods
//!
//! | Linkage | Formula | Effect |
//! |---------|---------|--------|
//! | Single | min(d(a,b)) for a∈A, b∈B | Chaining; elongated clusters |
//! | Complete | max(d(a,b)) | Compact, spherical clusters |
//! | Average | mean(d(a,b)) | Balanced compromise (the default) |
//! | Ward | Δ variance | Minimizes within-cluster variance |
//!
//! # Complexity
//!
//! O(n²) time and memory in the number of occurrences per word (condensed
//! distance matrix + linkage). Parallelize across words at the call site;
//! each `fit_predict` is independent and side-effect free.
//!
//! # References
//!
//! - Amrami & Goldberg (2019). "Towards Better Substitution-Based Word
//!   Sense Induction"
//! - Eyal et al. (2022). "Large Scale Substitution-based Word Sense
//!   Induction"

use kodama::{linkage as kodama_linkage, Method as KodamaMethod};
use log::debug;

use super::dendrogram::Dendrogram;
use super::merge::merge_small_senses;
use super::traits::SenseClustering;
use crate::distance::pdist_cosine;
use crate::error::{Error, Result};
use crate::instance::RepInstances;
use crate::senses::{assign_senses, SenseMap};
use crate::vectorize::{vectorize, BowFeatures};

/// Linkage method for the agglomerative step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Linkage {
    /// Single linkage: minimum distance between clusters.
    Single,
    /// Complete linkage: maximum distance between clusters.
    Complete,
    /// Average linkage: mean distance between clusters.
    Average,
    /// Ward's method: minimize within-cluster variance.
    Ward,
}

/// Distance metric over feature rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Metric {
    /// `1 - cosine_similarity`; the only metric the pipeline ships.
    #[default]
    Cosine,
}

/// Hierarchical sense induction over bag-of-substitutes vectors.
///
/// Defaults: TF-IDF on, cosine distance, average linkage, at most 7
/// senses from the cut, senses with fewer than 2 instances absorbed.
#[derive(Debug, Clone)]
pub struct BowHierarchicalLinkage {
    use_tfidf: bool,
    metric: Metric,
    linkage: Linkage,
    max_number_senses: usize,
    min_sense_instances: usize,
}

impl Default for BowHierarchicalLinkage {
    fn default() -> Self {
        Self {
            use_tfidf: true,
            metric: Metric::Cosine,
            linkage: Linkage::Average,
            max_number_senses: 7,
            min_sense_instances: 2,
        }
    }
}

impl BowHierarchicalLinkage {
    /// Create a clusterer with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle TF-IDF reweighting of the presence matrix.
    pub fn with_tfidf(mut self, use_tfidf: bool) -> Self {
        self.use_tfidf = use_tfidf;
        self
    }

    /// Set the distance metric.
    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    /// Set the linkage method.
    pub fn with_linkage(mut self, linkage: Linkage) -> Self {
        self.linkage = linkage;
        self
    }

    /// Bound the number of senses the dendrogram cut may produce.
    pub fn with_max_number_senses(mut self, max_number_senses: usize) -> Self {
        self.max_number_senses = max_number_senses;
        self
    }

    /// Set the support threshold below which a sense is absorbed.
    ///
    /// Zero disables the merge pass: initial labels pass through
    /// unchanged.
    pub fn with_min_sense_instances(mut self, min_sense_instances: usize) -> Self {
        self.min_sense_instances = min_sense_instances;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.max_number_senses < 1 {
            return Err(Error::InvalidParameter {
                name: "max_number_senses",
                message: "must be at least 1",
            });
        }
        Ok(())
    }

    /// Initial row-aligned labels from the dendrogram cut, plus the label
    /// count.
    fn initial_labels(&self, features: &BowFeatures) -> Result<(Vec<usize>, usize)> {
        let n = features.matrix.nrows();
        if n == 1 {
            // One occurrence: nothing to link.
            return Ok((vec![0], 1));
        }

        let mut condensed = match self.metric {
            Metric::Cosine => pdist_cosine(&features.matrix)?,
        };
        let method = match self.linkage {
            Linkage::Single => KodamaMethod::Single,
            Linkage::Complete => KodamaMethod::Complete,
            Linkage::Average => KodamaMethod::Average,
            Linkage::Ward => KodamaMethod::Ward,
        };
        let steps = kodama_linkage(&mut condensed, n, method);

        let mut dendrogram = Dendrogram::new(n);
        for step in steps.steps() {
            dendrogram.add_merge(step.cluster1, step.cluster2, step.dissimilarity, step.size);
        }

        let threshold = dendrogram.threshold_for_max_clusters(self.max_number_senses);
        let labels = dendrogram.cut_at_distance(threshold);
        let n_senses = labels.iter().copied().max().map_or(0, |top| top + 1);
        Ok((labels, n_senses))
    }
}

impl SenseClustering for BowHierarchicalLinkage {
    fn fit_predict(&self, instances: &RepInstances) -> Result<SenseMap> {
        self.validate()?;
        let features = vectorize(instances, self.use_tfidf)?;
        let (labels, n_senses) = self.initial_labels(&features)?;
        debug!(
            "initial cut: {} senses over {} instances",
            n_senses,
            labels.len()
        );

        let final_labels = if self.min_sense_instances > 0 {
            let outcome =
                merge_small_senses(&features.matrix, &labels, n_senses, self.min_sense_instances)?;
            debug!("absorbed small senses: {} -> {}", n_senses, outcome.n_senses);
            outcome.labels
        } else {
            labels
        };

        Ok(assign_senses(&features.doc_ids, &final_labels))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::RepInstance;
    use crate::senses::n_senses;

    fn instance(doc_id: u64, reps: &[&str]) -> RepInstance {
        let probs = vec![0.2; reps.len()];
        RepInstance::new(doc_id, reps.iter().map(|r| r.to_string()).collect(), probs).unwrap()
    }

    fn two_meanings() -> RepInstances {
        vec![
            instance(0, &["dog", "puppy"]),
            instance(1, &["dog", "puppy"]),
            instance(2, &["dog", "puppy"]),
            instance(3, &["bank", "money"]),
            instance(4, &["bank", "money"]),
            instance(5, &["bank", "money"]),
        ]
        .into()
    }

    #[test]
    fn test_two_substitute_groups_cluster_apart() {
        let clusterer = BowHierarchicalLinkage::new();
        let senses = clusterer.fit_predict(&two_meanings()).unwrap();
        assert_eq!(n_senses(&senses), 2);
        assert_eq!(senses[&0], senses[&1]);
        assert_eq!(senses[&1], senses[&2]);
        assert_eq!(senses[&3], senses[&4]);
        assert_eq!(senses[&4], senses[&5]);
        assert_ne!(senses[&0], senses[&3]);
    }

    #[test]
    fn test_max_senses_zero_rejected() {
        let clusterer = BowHierarchicalLinkage::new().with_max_number_senses(0);
        assert_eq!(
            clusterer.fit_predict(&two_meanings()),
            Err(Error::InvalidParameter {
                name: "max_number_senses",
                message: "must be at least 1",
            })
        );
    }

    #[test]
    fn test_max_one_sense_collapses_everything() {
        let clusterer = BowHierarchicalLinkage::new().with_max_number_senses(1);
        let senses = clusterer.fit_predict(&two_meanings()).unwrap();
        assert_eq!(n_senses(&senses), 1);
        assert!(senses.values().all(|&s| s == 0));
    }

    #[test]
    fn test_single_instance_maps_to_sense_zero() {
        let instances: RepInstances = vec![instance(42, &["dog"])].into();
        let senses = BowHierarchicalLinkage::new()
            .fit_predict(&instances)
            .unwrap();
        assert_eq!(senses.len(), 1);
        assert_eq!(senses[&42], 0);
    }

    #[test]
    fn test_plain_presence_mode() {
        let clusterer = BowHierarchicalLinkage::new().with_tfidf(false);
        let senses = clusterer.fit_predict(&two_meanings()).unwrap();
        assert_eq!(n_senses(&senses), 2);
    }

    #[test]
    fn test_complete_linkage_on_separated_groups() {
        let clusterer = BowHierarchicalLinkage::new().with_linkage(Linkage::Complete);
        let senses = clusterer.fit_predict(&two_meanings()).unwrap();
        assert_eq!(n_senses(&senses), 2);
    }
}
