//! The chart facade: public add/remove/toggle/rescale operations.

use std::collections::BTreeSet;

use melt_core::{Curve, CurveId, MeltResult, resolve_stroke_color};
use tracing::debug;

use crate::aggregate::compute_average;
use crate::config::ChartConfig;
use crate::input::{OneOrMany, ProteinRecord, normalize};
use crate::pipeline::RenderPipeline;
use crate::scale::ScaleController;
use crate::store::CurveStore;
use crate::surface::{PathId, PlotSurface};
use crate::transition::{AXIS_FADE, RESCALE_TRANSITION};

/// An interactive thermal-melt line chart over one plotting surface.
///
/// Owns its store and scale controller exclusively; chart instances never
/// share either. All operations are synchronous, single-threaded calls.
pub struct MeltChart<S: PlotSurface> {
    config: ChartConfig,
    store: CurveStore,
    scales: ScaleController,
    pipeline: RenderPipeline,
    surface: S,
    axes_visible: bool,
}

impl<S: PlotSurface> MeltChart<S> {
    pub fn new(config: ChartConfig, mut surface: S) -> Self {
        let scales = ScaleController::from_config(&config);
        let store = CurveStore::new(config.limit);
        let pipeline = RenderPipeline::new(&config);
        let axes_visible = config.axes_visible;
        surface.set_axes_opacity(if axes_visible { 1.0 } else { 0.0 }, None);
        Self {
            config,
            store,
            scales,
            pipeline,
            surface,
            axes_visible,
        }
    }

    /// Add one protein record or a sequence of them.
    ///
    /// Each contained experiment becomes a curve, drawn immediately on
    /// insertion. Experiments whose id is already stored, or that would
    /// exceed the configured limit, are skipped silently; malformed records
    /// fail the whole call before anything is inserted from them.
    ///
    /// Returns the ids that were actually inserted.
    pub fn add(&mut self, input: impl Into<OneOrMany<ProteinRecord>>) -> MeltResult<Vec<CurveId>> {
        let experiments = normalize(input.into())?;
        let mut inserted = Vec::new();
        for record in experiments {
            let stroke_color = resolve_stroke_color(
                record.color_seed.as_deref(),
                self.config.stroke_color,
                &record.protein_id,
                &record.experiment_id,
            );
            let curve = Curve {
                protein_id: record.protein_id,
                experiment_id: record.experiment_id,
                samples: record.samples,
                stroke_color,
            };
            let id = curve.id();
            if self.store.insert(curve) {
                if let Some(stored) = self.store.get(&id) {
                    self.pipeline.draw_new(&mut self.surface, &self.scales, stored);
                }
                inserted.push(id);
            }
        }
        Ok(inserted)
    }

    /// Keep only the listed curves, dropping the rest from store and surface.
    ///
    /// Returns the number of curves removed.
    pub fn remove(&mut self, keep: &[CurveId]) -> usize {
        let keep: BTreeSet<CurveId> = keep.iter().cloned().collect();
        let removed = self.store.retain_ids(&keep);
        for id in &removed {
            self.surface.remove_path(&PathId::Curve(id.clone()));
        }
        debug!(removed = removed.len(), "curves removed from store");
        removed.len()
    }

    /// Show or hide the aggregate overlay.
    ///
    /// When turning the overlay on, `precomputed` replaces the internally
    /// computed average; when turning it off the argument is ignored and
    /// every curve's original color and opacity come back.
    pub fn toggle_average(&mut self, precomputed: Option<Curve>) {
        if self.pipeline.overlay_active() {
            self.pipeline
                .clear_aggregate_overlay(&mut self.surface, &self.store);
        } else {
            let aggregate = precomputed.unwrap_or_else(|| compute_average(self.store.all()));
            self.pipeline.draw_aggregate_overlay(
                &mut self.surface,
                &self.scales,
                &self.store,
                &aggregate,
            );
        }
    }

    /// Fade the axes in or out. Domain and range are never touched.
    pub fn toggle_axes(&mut self) {
        self.axes_visible = !self.axes_visible;
        self.surface.set_axes_opacity(
            if self.axes_visible { 1.0 } else { 0.0 },
            Some(AXIS_FADE),
        );
    }

    /// Rescale the x-domain and replay all curve geometry with the shared
    /// rescale transition. `None` bounds fall back to 30/80; explicit zero
    /// bounds are preserved literally.
    pub fn rescale(&mut self, min: Option<f64>, max: Option<f64>) {
        self.scales.rescale(min, max);
        self.pipeline
            .redraw_all(&mut self.surface, &self.scales, &self.store, RESCALE_TRANSITION);
    }

    pub fn axes_visible(&self) -> bool {
        self.axes_visible
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn store(&self) -> &CurveStore {
        &self.store
    }

    pub fn scales(&self) -> &ScaleController {
        &self.scales
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;

    fn protein(body: &str) -> ProteinRecord {
        serde_json::from_str(body).unwrap()
    }

    fn chart() -> MeltChart<RecordingSurface> {
        MeltChart::new(ChartConfig::default(), RecordingSurface::new())
    }

    #[test]
    fn add_draws_each_inserted_curve() {
        let mut chart = chart();
        let ids = chart
            .add(protein(
                r#"{"uniprotId":"P1","experiments":[
                    {"experiment":1,"reads":[{"t":40,"r":0.9},{"t":50,"r":0.5},{"t":60,"r":0.1}]},
                    {"experiment":2,"reads":[{"t":40,"r":0.8},{"t":50,"r":0.4},{"t":60,"r":0.2}]}
                ]}"#,
            ))
            .unwrap();
        assert_eq!(ids.len(), 2);
        assert_eq!(chart.store().len(), 2);
        assert_eq!(chart.surface().len(), 2);
    }

    #[test]
    fn malformed_record_fails_before_insertion() {
        let mut chart = chart();
        let err = chart.add(protein(r#"{"uniprotId":"Pbad"}"#)).unwrap_err();
        assert!(format!("{err}").contains("Pbad"));
        assert!(chart.store().is_empty());
        assert!(chart.surface().is_empty());
    }

    #[test]
    fn axes_double_toggle_restores_opacity() {
        let mut chart = chart();
        assert_eq!(chart.surface().axes_opacity(), 0.0);
        chart.toggle_axes();
        assert_eq!(chart.surface().axes_opacity(), 1.0);
        chart.toggle_axes();
        assert_eq!(chart.surface().axes_opacity(), 0.0);
        assert!(!chart.axes_visible());
    }

    #[test]
    fn remove_prunes_surface_paths() {
        let mut chart = chart();
        let ids = chart
            .add(protein(
                r#"{"uniprotId":"P1","experiments":[
                    {"experiment":1,"reads":[]},
                    {"experiment":2,"reads":[]}
                ]}"#,
            ))
            .unwrap();

        let removed = chart.remove(&ids[..1]);
        assert_eq!(removed, 1);
        assert_eq!(chart.store().len(), 1);
        assert!(chart.surface().path(&PathId::Curve(ids[0].clone())).is_some());
        assert!(chart.surface().path(&PathId::Curve(ids[1].clone())).is_none());
    }
}
