//! Synthetic melt data for the demo window.

use melt_chart::input::{ExperimentRecord, OneOrMany, ProteinRecord};
use melt_core::{ExperimentId, Sample};

/// Sigmoid melt curve: fully folded below the melting point, unfolding above.
fn melt_reads(tm: f64, steepness: f64) -> Vec<Sample> {
    (37..=65)
        .map(|t| {
            let t = t as f64;
            Sample::new(t, 1.0 / (1.0 + ((t - tm) / steepness).exp()))
        })
        .collect()
}

pub fn demo_proteins() -> Vec<ProteinRecord> {
    let specs = [
        ("P04637", 1_i64, 48.0, 2.0),
        ("P04637", 2, 51.5, 2.6),
        ("P38398", 1, 44.0, 1.6),
        ("Q9Y6K9", 1, 56.0, 3.2),
    ];
    let mut proteins: Vec<ProteinRecord> = Vec::new();
    for (uniprot_id, experiment, tm, k) in specs {
        let record = ExperimentRecord {
            experiment: ExperimentId::Num(experiment),
            reads: Some(melt_reads(tm, k)),
            stroke_color_id: None,
        };
        match proteins.iter_mut().find(|p| p.uniprot_id == uniprot_id) {
            Some(protein) => {
                if let Some(OneOrMany::Many(experiments)) = &mut protein.experiments {
                    experiments.push(record);
                }
            }
            None => proteins.push(ProteinRecord {
                uniprot_id: uniprot_id.to_string(),
                experiments: Some(OneOrMany::Many(vec![record])),
            }),
        }
    }
    proteins
}
