//! Cosine distances over feature rows and centroids.
//!
//! Cosine distance is `1 - cosine_similarity`. [`pdist_cosine`] produces
//! the condensed upper-triangle form the linkage consumes; [`cdist_cosine`]
//! the full rectangular matrix used when absorbing small senses.
//!
//! Both are O(n² · d), the dominant cost of the pipeline for large
//! instance counts.

use ndarray::{Array2, ArrayView1};

use crate::error::{Error, Result};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Cosine distance between two rows.
///
/// Bit-identical rows are at distance exactly zero, so duplicate instances
/// always merge at the bottom of the dendrogram. Zero-norm inputs are
/// rejected; the vectorizer guarantees they cannot occur.
pub fn cosine_distance(a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> Result<f64> {
    if a.len() != b.len() {
        return Err(Error::DimensionMismatch {
            expected: a.len(),
            found: b.len(),
        });
    }

    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    if norm_a == 0.0 || norm_b == 0.0 {
        return Err(Error::Other("cosine distance of a zero vector".to_string()));
    }
    if a == b {
        return Ok(0.0);
    }

    let similarity = (dot / (norm_a.sqrt() * norm_b.sqrt())).clamp(-1.0, 1.0);
    Ok(1.0 - similarity)
}

/// Condensed pairwise cosine distances (upper triangle, row-major).
///
/// Length is n-choose-2, ordered `(0,1), (0,2), ..., (n-2,n-1)`: the
/// layout `kodama::linkage` expects.
pub fn pdist_cosine(matrix: &Array2<f64>) -> Result<Vec<f64>> {
    let n = matrix.nrows();
    let mut condensed = Vec::with_capacity(n.saturating_sub(1) * n / 2);

    #[cfg(feature = "parallel")]
    {
        let rows: Vec<Result<Vec<f64>>> = (0..n.saturating_sub(1))
            .into_par_iter()
            .map(|row| {
                ((row + 1)..n)
                    .map(|col| cosine_distance(matrix.row(row), matrix.row(col)))
                    .collect()
            })
            .collect();
        for row in rows {
            condensed.extend(row?);
        }
    }

    #[cfg(not(feature = "parallel"))]
    for row in 0..n.saturating_sub(1) {
        for col in (row + 1)..n {
            condensed.push(cosine_distance(matrix.row(row), matrix.row(col))?);
        }
    }

    Ok(condensed)
}

/// Full rectangular cosine distance matrix between two sets of rows.
pub fn cdist_cosine(a: &Array2<f64>, b: &Array2<f64>) -> Result<Array2<f64>> {
    let mut out = Array2::zeros((a.nrows(), b.nrows()));
    for i in 0..a.nrows() {
        for j in 0..b.nrows() {
            out[[i, j]] = cosine_distance(a.row(i), b.row(j))?;
        }
    }
    Ok(out)
}
