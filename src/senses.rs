//! Final sense assignment.

use std::collections::{BTreeMap, BTreeSet};

use crate::instance::DocId;

/// Final document-id → sense-id mapping.
///
/// Keys cover every input instance; values are contiguous integers
/// starting at zero.
pub type SenseMap = BTreeMap<DocId, usize>;

/// Combine row-aligned doc ids and final labels into a [`SenseMap`].
///
/// With duplicate doc ids the last occurrence wins.
pub fn assign_senses(doc_ids: &[DocId], labels: &[usize]) -> SenseMap {
    doc_ids.iter().copied().zip(labels.iter().copied()).collect()
}

/// Number of distinct senses in a map.
pub fn n_senses(senses: &SenseMap) -> usize {
    let distinct: BTreeSet<usize> = senses.values().copied().collect();
    distinct.len()
}
