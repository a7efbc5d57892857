//! Sample-to-path smoothing.

use serde::{Deserialize, Serialize};

/// Interpolation applied between projected samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Smoothing {
    /// Straight segments through every sample.
    Linear,
    /// Uniform cubic B-spline through duplicated endpoints, approximating the
    /// classic basis-spline chart smoothing.
    #[default]
    Basis,
}

/// Evaluation density per spline segment.
const BASIS_STEPS: usize = 8;

/// Expand projected sample positions into drawable path points.
///
/// The output point count is a pure function of the input count, so two
/// geometries for the same curve under different domains stay pointwise
/// comparable for animation.
pub fn path_points(projected: &[[f64; 2]], smoothing: Smoothing) -> Vec<[f64; 2]> {
    match smoothing {
        Smoothing::Linear => projected.to_vec(),
        Smoothing::Basis => basis_spline(projected),
    }
}

fn basis_spline(points: &[[f64; 2]]) -> Vec<[f64; 2]> {
    if points.len() < 3 {
        return points.to_vec();
    }

    // Duplicating each endpoint twice gives the spline triple knots there,
    // so the path interpolates the first and last sample exactly.
    let mut control = Vec::with_capacity(points.len() + 4);
    control.push(points[0]);
    control.push(points[0]);
    control.extend_from_slice(points);
    control.push(points[points.len() - 1]);
    control.push(points[points.len() - 1]);

    let mut out = Vec::with_capacity((control.len() - 3) * BASIS_STEPS + 1);
    for window in control.windows(4) {
        for step in 0..BASIS_STEPS {
            let t = step as f64 / BASIS_STEPS as f64;
            out.push(basis_point(window, t));
        }
    }
    out.push(points[points.len() - 1]);
    out
}

/// Cubic B-spline basis evaluation over one 4-point window.
fn basis_point(w: &[[f64; 2]], t: f64) -> [f64; 2] {
    let t2 = t * t;
    let t3 = t2 * t;
    let b0 = (1.0 - t).powi(3) / 6.0;
    let b1 = (3.0 * t3 - 6.0 * t2 + 4.0) / 6.0;
    let b2 = (-3.0 * t3 + 3.0 * t2 + 3.0 * t + 1.0) / 6.0;
    let b3 = t3 / 6.0;
    [
        b0 * w[0][0] + b1 * w[1][0] + b2 * w[2][0] + b3 * w[3][0],
        b0 * w[0][1] + b1 * w[1][1] + b2 * w[2][1] + b3 * w[3][1],
    ]
}
