//! Input records and the normalization boundary.
//!
//! Callers hand the chart either one protein record or a sequence of them;
//! the shape is resolved once here, not re-checked downstream. Malformed
//! records fail fast with the offending protein id in the error.

use melt_core::{ExperimentId, MeltError, MeltResult, Sample, ensure_finite};
use serde::{Deserialize, Serialize};

/// A single value or a sequence of values, accepted interchangeably at the
/// API boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::One(v) => vec![v],
            Self::Many(v) => v,
        }
    }
}

impl<T> From<T> for OneOrMany<T> {
    fn from(v: T) -> Self {
        Self::One(v)
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(v: Vec<T>) -> Self {
        Self::Many(v)
    }
}

/// One protein's melt experiments as reported by the data source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProteinRecord {
    #[serde(rename = "uniprotId")]
    pub uniprot_id: String,
    /// Absent experiments are a data fault, reported against the protein id.
    pub experiments: Option<OneOrMany<ExperimentRecord>>,
}

/// One experiment's readings within a protein record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentRecord {
    pub experiment: ExperimentId,
    pub reads: Option<Vec<Sample>>,
    /// Optional color seed overriding the hashed curve-id color.
    #[serde(rename = "strokeColorId")]
    pub stroke_color_id: Option<String>,
}

/// A validated, flattened experiment ready for store insertion.
#[derive(Debug, Clone)]
pub struct NormalizedExperiment {
    pub protein_id: String,
    pub experiment_id: ExperimentId,
    pub samples: Vec<Sample>,
    pub color_seed: Option<String>,
}

/// Flatten and validate caller input into per-experiment records.
///
/// Fails on the first protein missing its experiment list, the first
/// experiment missing its reads, or the first non-finite reading.
pub fn normalize(input: OneOrMany<ProteinRecord>) -> MeltResult<Vec<NormalizedExperiment>> {
    let mut out = Vec::new();
    for protein in input.into_vec() {
        let experiments = protein
            .experiments
            .ok_or_else(|| MeltError::MalformedRecord {
                protein_id: protein.uniprot_id.clone(),
                what: "missing experiments",
            })?;
        for experiment in experiments.into_vec() {
            let samples = experiment.reads.ok_or_else(|| MeltError::MalformedRecord {
                protein_id: protein.uniprot_id.clone(),
                what: "experiment missing reads",
            })?;
            for sample in &samples {
                ensure_finite(sample.t, "sample temperature")?;
                ensure_finite(sample.r, "sample ratio")?;
            }
            out.push(NormalizedExperiment {
                protein_id: protein.uniprot_id.clone(),
                experiment_id: experiment.experiment,
                samples,
                color_seed: experiment.stroke_color_id,
            });
        }
    }
    Ok(out)
}
