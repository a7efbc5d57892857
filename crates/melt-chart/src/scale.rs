//! Linear scales mapping melt data onto surface coordinates.

use melt_core::Sample;

use crate::config::ChartConfig;

/// Fallback x-domain bounds applied on rescale when a bound is absent.
pub const RESCALE_DEFAULT_MIN: f64 = 30.0;
pub const RESCALE_DEFAULT_MAX: f64 = 80.0;

/// A linear domain-to-range mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: [f64; 2],
    range: [f64; 2],
}

impl LinearScale {
    pub fn new(domain: [f64; 2], range: [f64; 2]) -> Self {
        Self { domain, range }
    }

    /// Project a domain value into the range. A degenerate domain maps
    /// everything onto the range start.
    pub fn project(&self, v: f64) -> f64 {
        let span = self.domain[1] - self.domain[0];
        if span == 0.0 {
            return self.range[0];
        }
        let u = (v - self.domain[0]) / span;
        self.range[0] + u * (self.range[1] - self.range[0])
    }

    pub fn set_domain(&mut self, domain: [f64; 2]) {
        self.domain = domain;
    }

    pub fn domain(&self) -> [f64; 2] {
        self.domain
    }

    pub fn range(&self) -> [f64; 2] {
        self.range
    }
}

/// Owns the x (temperature) and y (ratio) scales plus tick generation.
///
/// Purely synchronous: `rescale` swaps the domain immediately and leaves the
/// animated replay to the render pipeline, so geometry computed right after a
/// mutation always reflects the state at schedule time.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleController {
    x: LinearScale,
    y: LinearScale,
    x_ticks: usize,
    y_ticks: usize,
}

impl ScaleController {
    pub fn from_config(cfg: &ChartConfig) -> Self {
        let plot_width = (cfg.width - cfg.margin.left).max(0.0);
        let plot_height = (cfg.height - cfg.margin.top - cfg.margin.bottom).max(0.0);
        Self {
            x: LinearScale::new([cfg.min_temp, cfg.max_temp], [0.0, plot_width]),
            // Pixel y grows downward, so the range is inverted.
            y: LinearScale::new([cfg.min_ratio, cfg.max_ratio], [plot_height, 0.0]),
            x_ticks: cfg.x_ticks,
            y_ticks: cfg.y_ticks,
        }
    }

    /// Project one sample into surface coordinates.
    pub fn project(&self, sample: &Sample) -> [f64; 2] {
        [self.x.project(sample.t), self.y.project(sample.r)]
    }

    /// Update the x-domain only. An absent bound falls back to 30/80; an
    /// explicit bound is kept literally, including zero.
    pub fn rescale(&mut self, min: Option<f64>, max: Option<f64>) {
        self.x.set_domain([
            min.unwrap_or(RESCALE_DEFAULT_MIN),
            max.unwrap_or(RESCALE_DEFAULT_MAX),
        ]);
    }

    /// Evenly spaced tick positions over the x-domain.
    pub fn ticks_x(&self) -> Vec<f64> {
        Self::ticks(self.x.domain(), self.x_ticks)
    }

    /// Evenly spaced tick positions over the y-domain.
    pub fn ticks_y(&self) -> Vec<f64> {
        Self::ticks(self.y.domain(), self.y_ticks)
    }

    fn ticks(domain: [f64; 2], count: usize) -> Vec<f64> {
        if count == 0 {
            return Vec::new();
        }
        let step = (domain[1] - domain[0]) / count as f64;
        (0..=count).map(|i| domain[0] + step * i as f64).collect()
    }

    pub fn x(&self) -> &LinearScale {
        &self.x
    }

    pub fn y(&self) -> &LinearScale {
        &self.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> ScaleController {
        ScaleController::from_config(&ChartConfig {
            width: 125.0,
            height: 130.0,
            ..ChartConfig::default()
        })
    }

    #[test]
    fn projection_maps_domain_onto_pixel_range() {
        let s = controller();
        // width 125 - left margin 25 = 100px of x range
        assert_eq!(s.project(&Sample::new(37.0, 1.1)), [0.0, 0.0]);
        assert_eq!(s.project(&Sample::new(65.0, -0.1)), [100.0, 100.0]);
        let mid = s.project(&Sample::new(51.0, 0.5));
        assert!((mid[0] - 50.0).abs() < 1e-9);
        assert!((mid[1] - 50.0).abs() < 1e-9);
    }

    #[test]
    fn rescale_preserves_explicit_zero() {
        let mut s = controller();
        s.rescale(Some(0.0), Some(100.0));
        assert_eq!(s.x().domain(), [0.0, 100.0]);
    }

    #[test]
    fn rescale_defaults_apply_only_to_absent_bounds() {
        let mut s = controller();
        s.rescale(None, None);
        assert_eq!(s.x().domain(), [30.0, 80.0]);

        s.rescale(Some(42.0), None);
        assert_eq!(s.x().domain(), [42.0, 80.0]);
    }

    #[test]
    fn rescale_leaves_y_untouched() {
        let mut s = controller();
        let y_before = *s.y();
        s.rescale(Some(0.0), Some(100.0));
        assert_eq!(*s.y(), y_before);
    }

    #[test]
    fn ticks_span_domain_inclusively() {
        let s = controller();
        let ticks = s.ticks_y();
        assert_eq!(ticks.len(), 3);
        assert!((ticks[0] - -0.1).abs() < 1e-12);
        assert!((ticks[2] - 1.1).abs() < 1e-12);
    }

    #[test]
    fn degenerate_domain_projects_to_range_start() {
        let s = LinearScale::new([40.0, 40.0], [0.0, 100.0]);
        assert_eq!(s.project(40.0), 0.0);
        assert_eq!(s.project(99.0), 0.0);
    }
}
