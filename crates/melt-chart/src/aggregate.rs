//! Aggregate ("average") curve computation.

use std::collections::BTreeMap;

use melt_core::{Curve, Hsl, Sample, TempKey};

/// Stroke color of the aggregate overlay.
pub const OVERLAY_COLOR: Hsl = Hsl::new(0.0, 1.0, 0.5);

/// Average all curves' responses grouped by exact temperature.
///
/// Temperatures group only when they compare bitwise equal ([`TempKey`]);
/// there is no tolerance bucketing. Samples come out ordered by ascending
/// temperature. An empty input yields a curve with no samples, which
/// renders as nothing.
pub fn compute_average<'a>(curves: impl IntoIterator<Item = &'a Curve>) -> Curve {
    let mut groups: BTreeMap<TempKey, Vec<f64>> = BTreeMap::new();
    for curve in curves {
        for sample in &curve.samples {
            groups.entry(TempKey(sample.t)).or_default().push(sample.r);
        }
    }
    let samples = groups
        .into_iter()
        .map(|(TempKey(t), rs)| Sample::new(t, rs.iter().sum::<f64>() / rs.len() as f64))
        .collect();
    Curve::average(samples, OVERLAY_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use melt_core::{AVERAGE_TOKEN, ExperimentId, FALLBACK_COLOR};
    use proptest::prelude::*;

    fn curve(reads: &[(f64, f64)]) -> Curve {
        Curve {
            protein_id: "P".to_string(),
            experiment_id: ExperimentId::Num(1),
            samples: reads.iter().map(|&(t, r)| Sample::new(t, r)).collect(),
            stroke_color: FALLBACK_COLOR,
        }
    }

    #[test]
    fn shared_temperature_averages() {
        let a = curve(&[(40.0, 0.2)]);
        let b = curve(&[(40.0, 0.8)]);
        let avg = compute_average([&a, &b]);
        assert_eq!(avg.samples, vec![Sample::new(40.0, 0.5)]);
        assert_eq!(avg.protein_id, AVERAGE_TOKEN);
    }

    #[test]
    fn disjoint_temperatures_keep_their_own_mean() {
        let a = curve(&[(40.0, 0.2), (50.0, 0.6)]);
        let b = curve(&[(45.0, 1.0)]);
        let avg = compute_average([&a, &b]);
        assert_eq!(
            avg.samples,
            vec![
                Sample::new(40.0, 0.2),
                Sample::new(45.0, 1.0),
                Sample::new(50.0, 0.6),
            ]
        );
    }

    #[test]
    fn near_equal_temperatures_stay_separate_groups() {
        let a = curve(&[(40.0, 0.0)]);
        let b = curve(&[(40.0000001, 1.0)]);
        let avg = compute_average([&a, &b]);
        assert_eq!(avg.samples.len(), 2);
    }

    #[test]
    fn empty_input_yields_no_samples() {
        let none: [&Curve; 0] = [];
        let avg = compute_average(none);
        assert!(avg.samples.is_empty());
    }

    #[test]
    fn output_is_ordered_ascending() {
        let a = curve(&[(60.0, 0.1), (40.0, 0.9), (50.0, 0.5)]);
        let avg = compute_average([&a]);
        let temps: Vec<f64> = avg.samples.iter().map(|s| s.t).collect();
        assert_eq!(temps, vec![40.0, 50.0, 60.0]);
    }

    proptest! {
        #[test]
        fn mean_bounded_by_observed_ratios(
            reads in proptest::collection::vec((30.0f64..90.0, 0.0f64..1.0), 1..40)
        ) {
            let a = curve(&reads);
            let lo = reads.iter().map(|r| r.1).fold(f64::INFINITY, f64::min);
            let hi = reads.iter().map(|r| r.1).fold(f64::NEG_INFINITY, f64::max);
            for s in compute_average([&a]).samples {
                prop_assert!(s.r >= lo - 1e-12 && s.r <= hi + 1e-12);
            }
        }
    }
}
