use polysemy::{
    cluster, display, group_by_sense, representative_samples, BowHierarchicalLinkage,
    DisplayRecord, RepInstance, RepInstances,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Minimal end-to-end: substitute predictions -> senses -> display.
    //
    // Occurrences of "bass": a fish sense and a music sense, plus one
    // low-support occurrence that gets absorbed.
    let raw: Vec<(u64, Vec<&str>)> = vec![
        (0, vec!["fish", "trout", "salmon"]),
        (1, vec!["fish", "trout"]),
        (2, vec!["fish", "salmon"]),
        (3, vec!["guitar", "drums"]),
        (4, vec!["guitar", "drums", "cello"]),
        (5, vec!["synth", "drums"]),
    ];
    let instances: RepInstances = raw
        .into_iter()
        .map(|(doc_id, reps)| {
            let probs = vec![1.0 / reps.len() as f32; reps.len()];
            RepInstance::new(doc_id, reps.into_iter().map(str::to_owned).collect(), probs)
        })
        .collect::<Result<Vec<_>, _>>()?
        .into();

    let config = BowHierarchicalLinkage::new().with_max_number_senses(3);
    let senses = cluster(&instances, &config)?;
    println!("doc -> sense: {senses:?}");

    let grouped = group_by_sense(&senses, &instances);
    let samples = representative_samples(&grouped, 1);
    for record in display(&senses, &instances, &samples, 2, 3) {
        match record {
            DisplayRecord::Sense {
                header,
                found,
                words,
                ..
            } => println!("{header}: {found}; top words {words:?}"),
            DisplayRecord::Hidden { count } => println!("({count} more senses not shown)"),
        }
    }

    Ok(())
}
