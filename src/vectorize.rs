//! Bag-of-substitutes vectorization.
//!
//! Each instance becomes one row over a shared vocabulary built from the
//! union of all substitute tokens in the collection. A token contributes
//! 1.0 when present, regardless of its predicted probability; duplicates
//! within one instance collapse to a single presence entry.
//!
//! With TF-IDF enabled (the default) columns are reweighted by smoothed
//! inverse document frequency:
//!
//! ```text
//! idf(t) = ln((1 + n) / (1 + df(t))) + 1
//! ```
//!
//! Rows are left unnormalized, so a presence entry becomes exactly
//! `idf(t)`. Since `idf >= 1`, a row is all-zero iff the instance has no
//! substitutes, and that case is rejected up front.

use std::collections::{BTreeMap, BTreeSet};

use log::debug;
use ndarray::Array2;

use crate::error::{Error, Result};
use crate::instance::{DocId, RepInstances};

/// Feature matrix over the collection's substitute vocabulary.
///
/// Ephemeral: rebuilt on every call. Rows align with `doc_ids`, columns
/// with `vocabulary`.
#[derive(Debug, Clone, PartialEq)]
pub struct BowFeatures {
    /// `(n_instances, vocab_size)` feature matrix.
    pub matrix: Array2<f64>,
    /// Row-aligned document ids.
    pub doc_ids: Vec<DocId>,
    /// Column-aligned vocabulary, sorted.
    pub vocabulary: Vec<String>,
}

/// Vectorize a collection into a [`BowFeatures`] matrix.
///
/// # Errors
///
/// - [`Error::EmptyInput`] when the collection is empty.
/// - [`Error::EmptyInstance`] when an instance has no substitute tokens
///   (its row would be all-zero, leaving cosine distance undefined).
pub fn vectorize(instances: &RepInstances, use_tfidf: bool) -> Result<BowFeatures> {
    if instances.is_empty() {
        return Err(Error::EmptyInput);
    }

    // Column index of a token is its rank in the sorted vocabulary.
    let mut vocab = BTreeSet::new();
    for instance in instances.iter() {
        if instance.reps().is_empty() {
            return Err(Error::EmptyInstance {
                doc_id: instance.doc_id(),
            });
        }
        for rep in instance.reps() {
            vocab.insert(rep.as_str());
        }
    }
    let columns: BTreeMap<&str, usize> = vocab
        .iter()
        .enumerate()
        .map(|(col, &token)| (token, col))
        .collect();

    let n = instances.len();
    let mut matrix = Array2::zeros((n, columns.len()));
    let mut doc_ids = Vec::with_capacity(n);
    for (row, instance) in instances.iter().enumerate() {
        doc_ids.push(instance.doc_id());
        for rep in instance.reps() {
            matrix[[row, columns[rep.as_str()]]] = 1.0;
        }
    }

    if use_tfidf {
        apply_tfidf(&mut matrix);
    }

    debug!(
        "vectorized {} instances over {} substitute types",
        n,
        columns.len()
    );

    Ok(BowFeatures {
        matrix,
        doc_ids,
        vocabulary: vocab.into_iter().map(str::to_owned).collect(),
    })
}

/// Reweight columns by smoothed idf, leaving rows unnormalized.
fn apply_tfidf(matrix: &mut Array2<f64>) {
    let n = matrix.nrows() as f64;
    for mut col in matrix.columns_mut() {
        let df = col.iter().filter(|&&x| x > 0.0).count() as f64;
        let idf = ((1.0 + n) / (1.0 + df)).ln() + 1.0;
        col.mapv_inplace(|x| x * idf);
    }
}
