//! Deterministic seed-to-color assignment.
//!
//! Curves are colored by hashing their identity string to a hue, so the same
//! protein/experiment pair gets the same color in every session and in every
//! chart, independent of insertion order. Saturation and lightness are fixed
//! so that hue alone separates curves.

use core::fmt;
use serde::{Deserialize, Serialize};

use crate::types::{CurveId, ExperimentId};

/// Fixed saturation for hashed curve colors.
const HASH_SATURATION: f64 = 1.0;
/// Fixed lightness for hashed curve colors.
const HASH_LIGHTNESS: f64 = 0.40;

/// Steelblue, used when a curve carries no usable identity to hash.
pub const FALLBACK_COLOR: Hsl = Hsl {
    h_deg: 207.0,
    s: 0.44,
    l: 0.49,
};

/// An HSL color. `h_deg` in [0, 360), `s` and `l` in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h_deg: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub const fn new(h_deg: f64, s: f64, l: f64) -> Self {
        Self { h_deg, s, l }
    }

    /// Convert to 8-bit RGB for raster hosts.
    pub fn to_rgb8(self) -> [u8; 3] {
        let c = (1.0 - (2.0 * self.l - 1.0).abs()) * self.s;
        let hp = self.h_deg.rem_euclid(360.0) / 60.0;
        let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
        let (r1, g1, b1) = match hp as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = self.l - c / 2.0;
        let to8 = |v: f64| ((v + m).clamp(0.0, 1.0) * 255.0).round() as u8;
        [to8(r1), to8(g1), to8(b1)]
    }
}

/// Renders the CSS `hsl(H,S%,L%)` form.
impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({},{}%,{}%)",
            self.h_deg.round() as i64,
            (self.s * 100.0).round() as i64,
            (self.l * 100.0).round() as i64
        )
    }
}

/// 32-bit string hash over UTF-16 code units.
///
/// `h = code + ((h << 5) - h)`, folded with wrapping arithmetic at every step.
/// Order-sensitive and collision-tolerant; distinct seeds may collide.
pub fn hash32(seed: &str) -> i32 {
    let mut hash: i32 = 0;
    for code in seed.encode_utf16() {
        hash = (code as i32).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash));
    }
    hash
}

/// Map a seed to a hue angle in [0, 360).
///
/// The raw hash may be negative; `rem_euclid` folds it into the valid range
/// rather than passing a negative hue downstream.
pub fn hue_for(seed: &str) -> f64 {
    hash32(seed).rem_euclid(360) as f64
}

/// Deterministic seed-to-color mapping with fixed saturation/lightness.
pub fn color_for(seed: &str) -> Hsl {
    Hsl::new(hue_for(seed), HASH_SATURATION, HASH_LIGHTNESS)
}

/// Resolve the stroke color for one curve.
///
/// Precedence, highest first:
/// 1. an explicit per-experiment color seed
/// 2. the chart-wide stroke color override
/// 3. hash of the composite curve id
/// 4. [`FALLBACK_COLOR`] when the identity is too weak to hash
pub fn resolve_stroke_color(
    explicit_seed: Option<&str>,
    global_override: Option<Hsl>,
    protein_id: &str,
    experiment_id: &ExperimentId,
) -> Hsl {
    if let Some(seed) = explicit_seed {
        return color_for(seed);
    }
    if let Some(color) = global_override {
        return color;
    }
    if !protein_id.is_empty() && !experiment_id.is_blank() {
        return color_for(CurveId::compose(protein_id, experiment_id).as_str());
    }
    FALLBACK_COLOR
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn hash_matches_reference_values() {
        // Reference values from the classic 31x string hash.
        assert_eq!(hash32(""), 0);
        assert_eq!(hash32("a"), 97);
        assert_eq!(hash32("abc"), 96354);
        assert_eq!(hash32("P12345-E1"), hash32("P12345-E1"));
    }

    #[test]
    fn color_string_is_stable() {
        let a = color_for("P12345-E1");
        let b = color_for("P12345-E1");
        assert_eq!(a.to_string(), b.to_string());
        assert_eq!(a.s, 1.0);
        assert_eq!(a.l, 0.40);
    }

    #[test]
    fn fallback_applies_only_without_identity() {
        let blank = ExperimentId::from("");
        assert_eq!(
            resolve_stroke_color(None, None, "P12345", &blank),
            FALLBACK_COLOR
        );
        assert_eq!(
            resolve_stroke_color(None, None, "", &ExperimentId::Num(1)),
            FALLBACK_COLOR
        );
        // Numeric zero is a real identity, not an absent one.
        assert_ne!(
            resolve_stroke_color(None, None, "P12345", &ExperimentId::Num(0)),
            FALLBACK_COLOR
        );
    }

    #[test]
    fn precedence_explicit_then_global_then_hash() {
        let exp = ExperimentId::Num(1);
        let global = Hsl::new(120.0, 0.5, 0.5);

        let explicit = resolve_stroke_color(Some("batch-7"), Some(global), "P12345", &exp);
        assert_eq!(explicit, color_for("batch-7"));

        let overridden = resolve_stroke_color(None, Some(global), "P12345", &exp);
        assert_eq!(overridden, global);

        let hashed = resolve_stroke_color(None, None, "P12345", &exp);
        assert_eq!(hashed, color_for("P12345-E1"));
    }

    #[test]
    fn display_renders_css_hsl() {
        assert_eq!(Hsl::new(210.0, 1.0, 0.40).to_string(), "hsl(210,100%,40%)");
    }

    #[test]
    fn rgb_conversion_hits_known_points() {
        assert_eq!(Hsl::new(0.0, 1.0, 0.5).to_rgb8(), [255, 0, 0]);
        assert_eq!(Hsl::new(120.0, 1.0, 0.5).to_rgb8(), [0, 255, 0]);
        assert_eq!(Hsl::new(240.0, 1.0, 0.5).to_rgb8(), [0, 0, 255]);
    }

    proptest! {
        #[test]
        fn hue_always_in_range(seed in ".*") {
            let hue = hue_for(&seed);
            prop_assert!((0.0..360.0).contains(&hue));
        }

        #[test]
        fn color_is_deterministic(seed in ".*") {
            prop_assert_eq!(color_for(&seed), color_for(&seed));
        }
    }
}
