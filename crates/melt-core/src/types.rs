//! Curve data types.

use core::fmt;
use serde::{Deserialize, Serialize};

use crate::color::Hsl;

/// Protein/experiment token reserved for the synthetic aggregate curve.
pub const AVERAGE_TOKEN: &str = "average";

/// One thermal-melt reading: temperature against non-denatured ratio.
///
/// Samples arrive ordered by ascending `t`; the library never sorts them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Temperature in degrees Celsius.
    pub t: f64,
    /// Response ratio, typically in [0, 1].
    pub r: f64,
}

impl Sample {
    pub fn new(t: f64, r: f64) -> Self {
        Self { t, r }
    }
}

/// Experiment identifier as reported by the data source.
///
/// Sources label experiments either numerically or with a free-form string;
/// both spell the same way into the composite curve id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExperimentId {
    Num(i64),
    Text(String),
}

impl ExperimentId {
    /// True for the empty-string label, which carries no identity.
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(s) if s.is_empty())
    }
}

impl fmt::Display for ExperimentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for ExperimentId {
    fn from(n: i64) -> Self {
        Self::Num(n)
    }
}

impl From<&str> for ExperimentId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// Composite curve identity: `{proteinId}-E{experimentId}`.
///
/// Unique within a store; also the color-hash seed for unstyled curves.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurveId(String);

impl CurveId {
    pub fn compose(protein_id: &str, experiment_id: &ExperimentId) -> Self {
        Self(format!("{protein_id}-E{experiment_id}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One experiment's ordered melt readings plus its display color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    pub protein_id: String,
    pub experiment_id: ExperimentId,
    pub samples: Vec<Sample>,
    pub stroke_color: Hsl,
}

impl Curve {
    pub fn id(&self) -> CurveId {
        CurveId::compose(&self.protein_id, &self.experiment_id)
    }

    /// Synthetic aggregate curve over the reserved `average` identity.
    pub fn average(samples: Vec<Sample>, stroke_color: Hsl) -> Self {
        Self {
            protein_id: AVERAGE_TOKEN.to_string(),
            experiment_id: ExperimentId::Text(AVERAGE_TOKEN.to_string()),
            samples,
            stroke_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curve_id_composes_protein_and_experiment() {
        let id = CurveId::compose("P12345", &ExperimentId::Num(3));
        assert_eq!(id.as_str(), "P12345-E3");

        let id = CurveId::compose("P12345", &ExperimentId::from("ctrl"));
        assert_eq!(id.as_str(), "P12345-Ectrl");
    }

    #[test]
    fn experiment_id_deserializes_number_or_string() {
        let n: ExperimentId = serde_json::from_str("7").unwrap();
        assert_eq!(n, ExperimentId::Num(7));

        let s: ExperimentId = serde_json::from_str("\"7b\"").unwrap();
        assert_eq!(s, ExperimentId::from("7b"));
    }

    #[test]
    fn blank_experiment_label_detected() {
        assert!(ExperimentId::from("").is_blank());
        assert!(!ExperimentId::Num(0).is_blank());
        assert!(!ExperimentId::from("0").is_blank());
    }
}
