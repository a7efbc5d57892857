//! Animated egui-backed plotting surface.
//!
//! Holds one transition slot per animated property (geometry, stroke,
//! opacity, axis opacity) and interpolates them on each frame; a superseding
//! request retargets the slot mid-flight instead of queueing.

use std::collections::HashMap;
use std::time::Instant;

use melt_chart::surface::{PathId, PathStyle, PlotSurface};
use melt_chart::transition::{Slot, TransitionSpec};
use melt_core::Hsl;

pub struct AnimatedPath {
    points: Slot<Vec<[f64; 2]>>,
    stroke: Slot<Hsl>,
    opacity: Slot<f64>,
    width: f64,
}

/// A path resolved at one frame instant.
pub struct FramePath {
    pub points: Vec<[f64; 2]>,
    pub color: Hsl,
    pub opacity: f64,
    pub width: f64,
}

pub struct EguiSurface {
    paths: HashMap<PathId, AnimatedPath>,
    order: Vec<PathId>,
    axes_opacity: Slot<f64>,
}

impl EguiSurface {
    pub fn new() -> Self {
        Self {
            paths: HashMap::new(),
            order: Vec::new(),
            axes_opacity: Slot::new(0.0),
        }
    }

    /// Resolve every path for drawing at `now`, in first-drawn order.
    pub fn frame_paths(&self, now: Instant) -> impl Iterator<Item = FramePath> + '_ {
        self.order.iter().filter_map(move |id| {
            self.paths.get(id).map(|p| FramePath {
                points: p.points.value_at(now),
                color: p.stroke.value_at(now),
                opacity: p.opacity.value_at(now),
                width: p.width,
            })
        })
    }

    pub fn axes_opacity_at(&self, now: Instant) -> f64 {
        self.axes_opacity.value_at(now)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.axes_opacity.is_animating(now)
            || self.paths.values().any(|p| {
                p.points.is_animating(now)
                    || p.stroke.is_animating(now)
                    || p.opacity.is_animating(now)
            })
    }
}

impl PlotSurface for EguiSurface {
    fn upsert_path(
        &mut self,
        id: PathId,
        points: Vec<[f64; 2]>,
        style: PathStyle,
        transition: Option<TransitionSpec>,
    ) {
        let now = Instant::now();
        if let Some(path) = self.paths.get_mut(&id) {
            path.width = style.width;
            match transition {
                Some(spec) => {
                    path.points.transition_to(points, spec, now);
                    path.stroke.transition_to(style.stroke, spec, now);
                    path.opacity.transition_to(style.opacity, spec, now);
                }
                None => {
                    path.points.set(points);
                    path.stroke.set(style.stroke);
                    path.opacity.set(style.opacity);
                }
            }
            return;
        }

        // New path: with a transition it fades in from transparent.
        let mut opacity = match transition {
            Some(_) => Slot::new(0.0),
            None => Slot::new(style.opacity),
        };
        if let Some(spec) = transition {
            opacity.transition_to(style.opacity, spec, now);
        }
        self.order.push(id.clone());
        self.paths.insert(
            id,
            AnimatedPath {
                points: Slot::new(points),
                stroke: Slot::new(style.stroke),
                opacity,
                width: style.width,
            },
        );
    }

    fn restyle_path(&mut self, id: &PathId, style: PathStyle, transition: Option<TransitionSpec>) {
        let now = Instant::now();
        let Some(path) = self.paths.get_mut(id) else {
            return;
        };
        path.width = style.width;
        match transition {
            Some(spec) => {
                path.stroke.transition_to(style.stroke, spec, now);
                path.opacity.transition_to(style.opacity, spec, now);
            }
            None => {
                path.stroke.set(style.stroke);
                path.opacity.set(style.opacity);
            }
        }
    }

    fn remove_path(&mut self, id: &PathId) {
        if self.paths.remove(id).is_some() {
            self.order.retain(|p| p != id);
        }
    }

    fn set_axes_opacity(&mut self, opacity: f64, transition: Option<TransitionSpec>) {
        match transition {
            Some(spec) => self
                .axes_opacity
                .transition_to(opacity, spec, Instant::now()),
            None => self.axes_opacity.set(opacity),
        }
    }
}
