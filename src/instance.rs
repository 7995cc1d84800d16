//! The data model: representative instances of a target word.
//!
//! One [`RepInstance`] is a single occurrence of the target word in a
//! corpus, carrying the substitute tokens a masked language model predicted
//! for that occurrence and their probabilities. A [`RepInstances`]
//! collection holds every occurrence being clustered in one run.

use crate::error::{Error, Result};

/// Identifier of the document (or corpus position) an instance came from.
pub type DocId = u64;

/// One occurrence of the target word, as its substitute predictions.
///
/// Immutable once constructed; the pipeline only reads it. The
/// probabilities are carried for callers (ranking, display); clustering
/// uses token presence only.
#[derive(Debug, Clone, PartialEq)]
pub struct RepInstance {
    doc_id: DocId,
    reps: Vec<String>,
    probs: Vec<f32>,
}

impl RepInstance {
    /// Create an instance from aligned substitute tokens and probabilities.
    ///
    /// Fails with [`Error::DimensionMismatch`] when the two sequences
    /// disagree in length.
    pub fn new(doc_id: DocId, reps: Vec<String>, probs: Vec<f32>) -> Result<Self> {
        if reps.len() != probs.len() {
            return Err(Error::DimensionMismatch {
                expected: reps.len(),
                found: probs.len(),
            });
        }
        Ok(Self {
            doc_id,
            reps,
            probs,
        })
    }

    /// Document id this occurrence came from.
    pub fn doc_id(&self) -> DocId {
        self.doc_id
    }

    /// Substitute tokens, in prediction order.
    pub fn reps(&self) -> &[String] {
        &self.reps
    }

    /// Probabilities aligned 1:1 with [`reps`](Self::reps).
    pub fn probs(&self) -> &[f32] {
        &self.probs
    }
}

/// Ordered collection of representative instances.
///
/// Duplicate doc ids are not rejected; when the final sense map is
/// assembled the last occurrence wins.
#[derive(Debug, Clone, Default)]
pub struct RepInstances {
    data: Vec<RepInstance>,
}

impl RepInstances {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an instance.
    pub fn push(&mut self, instance: RepInstance) {
        self.data.push(instance);
    }

    /// Number of instances.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate over instances in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &RepInstance> {
        self.data.iter()
    }
}

impl From<Vec<RepInstance>> for RepInstances {
    fn from(data: Vec<RepInstance>) -> Self {
        Self { data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_accessors() {
        let instance = RepInstance::new(7, vec!["dog".into(), "cat".into()], vec![0.6, 0.4]).unwrap();
        assert_eq!(instance.doc_id(), 7);
        assert_eq!(instance.reps(), ["dog", "cat"]);
        assert_eq!(instance.probs(), [0.6, 0.4]);
    }

    #[test]
    fn test_misaligned_probs_rejected() {
        let result = RepInstance::new(0, vec!["dog".into()], vec![0.5, 0.5]);
        assert_eq!(
            result,
            Err(Error::DimensionMismatch {
                expected: 1,
                found: 2
            })
        );
    }

    #[test]
    fn test_collection_from_vec() {
        let instances: RepInstances = vec![
            RepInstance::new(0, vec!["a".into()], vec![1.0]).unwrap(),
            RepInstance::new(1, vec!["b".into()], vec![1.0]).unwrap(),
        ]
        .into();
        assert_eq!(instances.len(), 2);
        assert!(!instances.is_empty());
        let ids: Vec<_> = instances.iter().map(|i| i.doc_id()).collect();
        assert_eq!(ids, [0, 1]);
    }
}
