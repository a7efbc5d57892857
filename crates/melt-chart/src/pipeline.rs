//! Path geometry generation and synchronized redraw orchestration.

use melt_core::{Curve, Hsl, Sample};
use tracing::debug;

use crate::config::ChartConfig;
use crate::geometry::{Smoothing, path_points};
use crate::scale::ScaleController;
use crate::store::CurveStore;
use crate::surface::{PathId, PathStyle, PlotSurface};
use crate::transition::{OVERLAY_TRANSITION, TransitionSpec};

/// Neutral shade applied to curves while the aggregate overlay is shown.
pub const DIM_COLOR: Hsl = Hsl::new(0.0, 0.0, 0.5);
pub const DIM_OPACITY: f64 = 0.5;

/// Turns stored curves into surface paths.
///
/// Stateless apart from whether the aggregate overlay is currently dimming
/// the chart; geometry is always derived from the store and scale state at
/// call time, never cached across mutations.
#[derive(Debug)]
pub struct RenderPipeline {
    smoothing: Smoothing,
    stroke_width: f64,
    overlay_active: bool,
}

impl RenderPipeline {
    pub fn new(cfg: &ChartConfig) -> Self {
        Self {
            smoothing: cfg.smoothing,
            stroke_width: cfg.stroke_width,
            overlay_active: false,
        }
    }

    pub fn overlay_active(&self) -> bool {
        self.overlay_active
    }

    fn geometry(&self, scales: &ScaleController, samples: &[Sample]) -> Vec<[f64; 2]> {
        let projected: Vec<[f64; 2]> = samples.iter().map(|s| scales.project(s)).collect();
        path_points(&projected, self.smoothing)
    }

    /// Style a curve should currently carry, overlay dimming included.
    fn curve_style(&self, curve: &Curve) -> PathStyle {
        if self.overlay_active {
            PathStyle {
                stroke: DIM_COLOR,
                width: self.stroke_width,
                opacity: DIM_OPACITY,
            }
        } else {
            PathStyle {
                stroke: curve.stroke_color,
                width: self.stroke_width,
                opacity: 1.0,
            }
        }
    }

    /// Draw a newly inserted curve immediately, without animation.
    pub fn draw_new<S: PlotSurface>(
        &self,
        surface: &mut S,
        scales: &ScaleController,
        curve: &Curve,
    ) {
        surface.upsert_path(
            PathId::Curve(curve.id()),
            self.geometry(scales, &curve.samples),
            self.curve_style(curve),
            None,
        );
    }

    /// Replay every stored curve with one shared transition.
    ///
    /// Surface paths without a live store counterpart are left untouched.
    pub fn redraw_all<S: PlotSurface>(
        &self,
        surface: &mut S,
        scales: &ScaleController,
        store: &CurveStore,
        spec: TransitionSpec,
    ) {
        for curve in store.all() {
            surface.upsert_path(
                PathId::Curve(curve.id()),
                self.geometry(scales, &curve.samples),
                self.curve_style(curve),
                Some(spec),
            );
        }
    }

    /// Dim every stored curve and fade the aggregate overlay in.
    ///
    /// The previous overlay path, if any, is replaced rather than stacked.
    pub fn draw_aggregate_overlay<S: PlotSurface>(
        &mut self,
        surface: &mut S,
        scales: &ScaleController,
        store: &CurveStore,
        aggregate: &Curve,
    ) {
        self.overlay_active = true;
        for curve in store.all() {
            surface.restyle_path(
                &PathId::Curve(curve.id()),
                self.curve_style(curve),
                Some(OVERLAY_TRANSITION),
            );
        }
        surface.remove_path(&PathId::Overlay);
        if aggregate.samples.is_empty() {
            debug!("aggregate curve has no samples, overlay not drawn");
            return;
        }
        surface.upsert_path(
            PathId::Overlay,
            self.geometry(scales, &aggregate.samples),
            PathStyle {
                stroke: aggregate.stroke_color,
                width: self.stroke_width,
                opacity: 1.0,
            },
            Some(OVERLAY_TRANSITION),
        );
    }

    /// Remove the overlay and restore every curve's own color and opacity.
    pub fn clear_aggregate_overlay<S: PlotSurface>(&mut self, surface: &mut S, store: &CurveStore) {
        self.overlay_active = false;
        surface.remove_path(&PathId::Overlay);
        for curve in store.all() {
            surface.restyle_path(
                &PathId::Curve(curve.id()),
                self.curve_style(curve),
                Some(OVERLAY_TRANSITION),
            );
        }
    }
}
