//! Absorbing small senses into their nearest large neighbor.
//!
//! The initial dendrogram cut routinely produces low-support senses
//! (often singletons) that are noise rather than distinct meanings. Each
//! sense below the support threshold is reassigned to the nearest sense
//! that meets it, measured by cosine distance between sense centroids. A
//! big sense keeps its members: it is its own nearest big sense at
//! distance zero. Surviving sense ids are then renumbered densely in
//! first-seen order.

use log::debug;
use ndarray::Array2;

use crate::distance::cdist_cosine;
use crate::error::Result;

/// Result of the small-sense merge pass.
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    /// `remapping[original_label] == final_label`.
    pub remapping: Vec<usize>,
    /// Row-aligned labels after remapping.
    pub labels: Vec<usize>,
    /// Number of surviving senses.
    pub n_senses: usize,
}

/// Per-sense centroids: arithmetic mean of member rows.
///
/// Every label in `0..n_senses` must occur in `labels` (the dendrogram
/// cut guarantees this), so no centroid is a mean over zero rows.
pub fn sense_centroids(matrix: &Array2<f64>, labels: &[usize], n_senses: usize) -> Array2<f64> {
    let d = matrix.ncols();
    let mut centroids = Array2::zeros((n_senses, d));
    let mut counts = vec![0usize; n_senses];

    for (row, &label) in labels.iter().enumerate() {
        counts[label] += 1;
        for col in 0..d {
            centroids[[label, col]] += matrix[[row, col]];
        }
    }
    for (label, &count) in counts.iter().enumerate() {
        if count > 0 {
            for col in 0..d {
                centroids[[label, col]] /= count as f64;
            }
        }
    }
    centroids
}

/// Absorb senses with fewer than `min_sense_instances` members into their
/// nearest big sense.
///
/// Each sense walks the centroid distance matrix row in ascending
/// `(distance, label)` order and maps to the first big sense found; ties
/// resolve toward the smaller label. When *no* sense meets the threshold,
/// the largest sense (ties toward the smaller label) is promoted and
/// everything collapses into it.
pub fn merge_small_senses(
    matrix: &Array2<f64>,
    labels: &[usize],
    n_senses: usize,
    min_sense_instances: usize,
) -> Result<MergeOutcome> {
    let mut counts = vec![0usize; n_senses];
    for &label in labels {
        counts[label] += 1;
    }

    let mut big: Vec<bool> = counts.iter().map(|&c| c >= min_sense_instances).collect();
    if !big.iter().any(|&b| b) {
        let mut largest = 0;
        for (label, &count) in counts.iter().enumerate() {
            if count > counts[largest] {
                largest = label;
            }
        }
        debug!("no sense has {min_sense_instances}+ instances; promoting sense {largest}");
        big[largest] = true;
    }

    let centroids = sense_centroids(matrix, labels, n_senses);
    let distances = cdist_cosine(&centroids, &centroids)?;

    let mut targets = Vec::with_capacity(n_senses);
    for sense in 0..n_senses {
        let row = distances.row(sense);
        let mut order: Vec<usize> = (0..n_senses).collect();
        order.sort_by(|&a, &b| row[a].total_cmp(&row[b]).then(a.cmp(&b)));
        let target = order.into_iter().find(|&c| big[c]).unwrap_or(sense);
        targets.push(target);
    }

    // Dense renumbering in first-seen order over ascending original labels.
    let mut final_ids: Vec<usize> = Vec::new();
    let remapping: Vec<usize> = targets
        .iter()
        .map(|&target| match final_ids.iter().position(|&id| id == target) {
            Some(label) => label,
            None => {
                final_ids.push(target);
                final_ids.len() - 1
            }
        })
        .collect();

    let labels = labels.iter().map(|&label| remapping[label]).collect();
    Ok(MergeOutcome {
        n_senses: final_ids.len(),
        remapping,
        labels,
    })
}
