//! Grouping and display aggregation for induced senses.
//!
//! Consumes a sense map plus the original instances and yields one record
//! per top sense: ranked substitute-word counts, a caller-supplied sample
//! payload, and short header lines for rendering. The record stream is a
//! consuming iterator; word counts are computed as records are pulled.

use std::collections::BTreeMap;

use crate::instance::{RepInstance, RepInstances};
use crate::senses::SenseMap;

/// Group instances by their assigned sense.
///
/// Panics when an instance's doc id is missing from the map; the map must
/// come from clustering the same collection.
pub fn group_by_sense<'a>(
    senses: &SenseMap,
    instances: &'a RepInstances,
) -> BTreeMap<usize, Vec<&'a RepInstance>> {
    let mut grouped: BTreeMap<usize, Vec<&RepInstance>> = BTreeMap::new();
    for instance in instances.iter() {
        let sense = senses[&instance.doc_id()];
        grouped.entry(sense).or_default().push(instance);
    }
    grouped
}

/// Keep the first `n` instances of each sense as its sample.
///
/// `n == 0` keeps everything.
pub fn representative_samples<'a>(
    grouped: &BTreeMap<usize, Vec<&'a RepInstance>>,
    n: usize,
) -> BTreeMap<usize, Vec<&'a RepInstance>> {
    grouped
        .iter()
        .map(|(&sense, members)| {
            let take = if n == 0 { members.len() } else { n.min(members.len()) };
            (sense, members[..take].to_vec())
        })
        .collect()
}

/// One record in the display stream.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayRecord<'a, S> {
    /// One of the top senses, largest first.
    Sense {
        /// Short header, e.g. `"Cluster 0"` for the biggest sense.
        header: String,
        /// Member-count line, e.g. `"Found total 4 matches"`.
        found: String,
        /// Substitute tokens ranked by count (descending, ties by token).
        words: Vec<(&'a str, usize)>,
        /// Caller-supplied sample payload for this sense.
        sample: &'a S,
        /// Number of member instances.
        size: usize,
    },
    /// Senses beyond the requested top-N, summarized.
    Hidden {
        /// How many senses were not displayed.
        count: usize,
    },
}

/// Lazy stream of display records; see [`display`].
#[derive(Debug)]
pub struct DisplayRecords<'a, S> {
    /// `(sense, members)`, biggest sense first.
    ordered: Vec<(usize, Vec<&'a RepInstance>)>,
    samples: &'a BTreeMap<usize, S>,
    show_top_n_clusters: usize,
    show_top_n_words_per_cluster: usize,
    next_rank: usize,
    done: bool,
}

impl<'a, S> Iterator for DisplayRecords<'a, S> {
    type Item = DisplayRecord<'a, S>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let rank = self.next_rank;
        if rank < self.show_top_n_clusters && rank < self.ordered.len() {
            self.next_rank += 1;
            let samples = self.samples;
            let (sense, members) = &self.ordered[rank];
            return Some(DisplayRecord::Sense {
                header: format!("Cluster {rank}"),
                found: format!("Found total {} matches", members.len()),
                words: ranked_words(members, self.show_top_n_words_per_cluster),
                sample: &samples[sense],
                size: members.len(),
            });
        }

        self.done = true;
        if self.ordered.len() > self.show_top_n_clusters {
            return Some(DisplayRecord::Hidden {
                count: self.ordered.len() - self.show_top_n_clusters,
            });
        }
        None
    }
}

/// Substitute-word counts across a sense's members, ranked and truncated.
///
/// Duplicate predictions within one instance all count.
fn ranked_words<'a>(members: &[&'a RepInstance], top_n: usize) -> Vec<(&'a str, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for instance in members {
        for rep in instance.reps() {
            *counts.entry(rep.as_str()).or_default() += 1;
        }
    }
    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
    ranked.truncate(top_n);
    ranked
}

/// Build the display stream for a sense map.
///
/// Senses are ordered by descending member count, ties by ascending sense
/// id. The first `show_top_n_clusters` senses each yield a
/// [`DisplayRecord::Sense`] with at most `show_top_n_words_per_cluster`
/// ranked words; a trailing [`DisplayRecord::Hidden`] reports how many
/// senses were cut off, if any.
///
/// `cluster_samples` must carry exactly the sense ids present in
/// `senses`; a mismatch is a caller bug and panics.
pub fn display<'a, S>(
    senses: &SenseMap,
    instances: &'a RepInstances,
    cluster_samples: &'a BTreeMap<usize, S>,
    show_top_n_clusters: usize,
    show_top_n_words_per_cluster: usize,
) -> DisplayRecords<'a, S> {
    let grouped = group_by_sense(senses, instances);
    assert!(
        grouped.keys().eq(cluster_samples.keys()),
        "cluster samples must cover exactly the assigned senses"
    );

    let mut ordered: Vec<(usize, Vec<&RepInstance>)> = grouped.into_iter().collect();
    ordered.sort_by(|a, b| b.1.len().cmp(&a.1.len()).then(a.0.cmp(&b.0)));

    DisplayRecords {
        ordered,
        samples: cluster_samples,
        show_top_n_clusters,
        show_top_n_words_per_cluster,
        next_rank: 0,
        done: false,
    }
}
