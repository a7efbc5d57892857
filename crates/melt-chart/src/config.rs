//! Chart construction configuration.

use melt_core::Hsl;
use serde::{Deserialize, Serialize};

use crate::geometry::Smoothing;

/// Pixel margins reserved around the plotting area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 10.0,
            right: 10.0,
            bottom: 20.0,
            left: 25.0,
        }
    }
}

/// Immutable chart configuration, produced once at construction.
///
/// Every field has an explicit default; `Option` fields distinguish "unset"
/// from a deliberate zero or empty value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Plotting area width in pixels.
    pub width: f64,
    /// Plotting area height in pixels.
    pub height: f64,
    pub margin: Margins,
    /// Initial x-domain lower bound in degrees Celsius.
    pub min_temp: f64,
    /// Initial x-domain upper bound in degrees Celsius.
    pub max_temp: f64,
    /// Initial y-domain lower bound (response ratio).
    pub min_ratio: f64,
    /// Initial y-domain upper bound (response ratio).
    pub max_ratio: f64,
    pub x_ticks: usize,
    pub y_ticks: usize,
    /// Whether axes start visible.
    pub axes_visible: bool,
    /// Sample-to-path smoothing applied to every curve.
    pub smoothing: Smoothing,
    /// Chart-wide stroke color override (precedence below per-experiment seeds).
    pub stroke_color: Option<Hsl>,
    pub stroke_width: f64,
    /// Maximum number of stored curves; `None` means unbounded.
    pub limit: Option<usize>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 480.0,
            margin: Margins::default(),
            min_temp: 37.0,
            max_temp: 65.0,
            min_ratio: -0.1,
            max_ratio: 1.1,
            x_ticks: 15,
            y_ticks: 2,
            axes_visible: false,
            smoothing: Smoothing::default(),
            stroke_color: None,
            stroke_width: 2.0,
            limit: None,
        }
    }
}
