//! melt-chart: interactive thermal-melt curve chart engine.
//!
//! Owns the curve store, scale/domain pipeline, aggregate computation and the
//! render pipeline. Drawing itself happens behind the [`PlotSurface`] seam so
//! the same chart drives a test recorder, a headless export, or a GUI painter.

pub mod aggregate;
pub mod chart;
pub mod config;
pub mod geometry;
pub mod input;
pub mod pipeline;
pub mod scale;
pub mod store;
pub mod surface;
pub mod transition;

pub use aggregate::compute_average;
pub use chart::MeltChart;
pub use config::{ChartConfig, Margins};
pub use geometry::Smoothing;
pub use input::{ExperimentRecord, OneOrMany, ProteinRecord, normalize};
pub use pipeline::RenderPipeline;
pub use scale::{LinearScale, ScaleController};
pub use store::CurveStore;
pub use surface::{PathId, PathStyle, PlotSurface, RecordingSurface};
pub use transition::{Easing, Lerp, Slot, TransitionSpec};
