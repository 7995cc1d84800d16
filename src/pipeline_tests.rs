#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::collections::BTreeSet;

    use proptest::prelude::*;

    use crate::cluster::{make, BowHierarchicalLinkage, SenseClustering};
    use crate::display::{display, group_by_sense, representative_samples, DisplayRecord};
    use crate::error::Error;
    use crate::instance::{RepInstance, RepInstances};
    use crate::senses::n_senses;

    fn instance(doc_id: u64, reps: &[&str]) -> RepInstance {
        let probs = vec![0.1; reps.len()];
        RepInstance::new(doc_id, reps.iter().map(|r| r.to_string()).collect(), probs).unwrap()
    }

    fn dogs_and_a_cat() -> RepInstances {
        vec![
            instance(0, &["dog"]),
            instance(1, &["dog"]),
            instance(2, &["dog"]),
            instance(3, &["dog"]),
            instance(4, &["cat"]),
        ]
        .into()
    }

    #[test]
    fn singleton_sense_merges_into_the_big_one() {
        // Four identical occurrences plus one outlier below the support
        // threshold: the outlier folds in and one sense remains.
        let senses = crate::cluster(&dogs_and_a_cat(), &BowHierarchicalLinkage::new()).unwrap();
        assert_eq!(senses.len(), 5);
        assert!(senses.values().all(|&s| s == 0));
    }

    #[test]
    fn merge_disabled_keeps_the_outlier_sense() {
        let config = BowHierarchicalLinkage::new().with_min_sense_instances(0);
        let senses = crate::cluster(&dogs_and_a_cat(), &config).unwrap();
        assert_eq!(n_senses(&senses), 2);
        assert_eq!(senses[&0], senses[&3]);
        assert_ne!(senses[&0], senses[&4]);
    }

    #[test]
    fn empty_collection_is_rejected() {
        let instances = RepInstances::new();
        assert_eq!(
            crate::cluster(&instances, &BowHierarchicalLinkage::new()),
            Err(Error::EmptyInput)
        );
    }

    #[test]
    fn instance_without_substitutes_is_rejected() {
        let instances: RepInstances = vec![instance(0, &["dog"]), instance(1, &[])].into();
        assert_eq!(
            crate::cluster(&instances, &BowHierarchicalLinkage::new()),
            Err(Error::EmptyInstance { doc_id: 1 })
        );
    }

    #[test]
    fn reruns_are_identical() {
        let instances: RepInstances = (0..20)
            .map(|i| {
                if i % 3 == 0 {
                    instance(i, &["fish", "trout"])
                } else if i % 3 == 1 {
                    instance(i, &["guitar", "drums"])
                } else {
                    instance(i, &["fish", "guitar"])
                }
            })
            .collect::<Vec<_>>()
            .into();
        let config = BowHierarchicalLinkage::new();
        let first = crate::cluster(&instances, &config).unwrap();
        let second = crate::cluster(&instances, &config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn factory_resolves_the_shipped_algorithm() {
        let clusterer = make("bow hierarchical").unwrap();
        let senses = clusterer.fit_predict(&dogs_and_a_cat()).unwrap();
        assert_eq!(senses.len(), 5);
        assert!(make("agglomerative nonsense").is_none());
    }

    #[test]
    fn display_partitions_every_instance_when_top_n_covers_all() {
        let instances: RepInstances = (0..12)
            .map(|i| {
                if i < 8 {
                    instance(i, &["fish", "trout"])
                } else {
                    instance(i, &["guitar", "drums"])
                }
            })
            .collect::<Vec<_>>()
            .into();
        let senses = crate::cluster(&instances, &BowHierarchicalLinkage::new()).unwrap();

        let grouped = group_by_sense(&senses, &instances);
        let samples = representative_samples(&grouped, 2);
        let records: Vec<_> = display(&senses, &instances, &samples, 10, 3).collect();

        let mut displayed = 0;
        for record in &records {
            match record {
                DisplayRecord::Sense { size, .. } => displayed += size,
                DisplayRecord::Hidden { .. } => panic!("nothing should be hidden"),
            }
        }
        assert_eq!(displayed, instances.len());
    }

    fn arb_instances() -> impl Strategy<Value = RepInstances> {
        proptest::collection::vec(proptest::collection::vec(0usize..8, 1..5), 1..24).prop_map(
            |docs| {
                docs.into_iter()
                    .enumerate()
                    .map(|(i, tokens)| {
                        let reps: Vec<String> = tokens.iter().map(|t| format!("w{t}")).collect();
                        let probs = vec![0.5; reps.len()];
                        RepInstance::new(i as u64, reps, probs).unwrap()
                    })
                    .collect::<Vec<_>>()
                    .into()
            },
        )
    }

    proptest! {
        #[test]
        fn every_doc_id_is_mapped_once(instances in arb_instances()) {
            let senses = crate::cluster(&instances, &BowHierarchicalLinkage::new()).unwrap();
            prop_assert_eq!(senses.len(), instances.len());
            for instance in instances.iter() {
                prop_assert!(senses.contains_key(&instance.doc_id()));
            }
        }

        #[test]
        fn sense_ids_are_contiguous_from_zero(instances in arb_instances()) {
            let config = BowHierarchicalLinkage::new().with_min_sense_instances(0);
            let senses = crate::cluster(&instances, &config).unwrap();
            let distinct: BTreeSet<usize> = senses.values().copied().collect();
            let k = distinct.len();
            prop_assert!(distinct.into_iter().eq(0..k));
        }

        #[test]
        fn no_surviving_sense_is_below_the_floor(instances in arb_instances()) {
            let min = 2usize;
            let config = BowHierarchicalLinkage::new().with_min_sense_instances(min);
            let senses = crate::cluster(&instances, &config).unwrap();
            let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
            for &sense in senses.values() {
                *counts.entry(sense).or_default() += 1;
            }
            // A single surviving sense may be the degenerate fallback
            // (every initial sense below the floor collapses into one).
            if counts.len() > 1 {
                for &count in counts.values() {
                    prop_assert!(count >= min);
                }
            }
        }
    }
}
