//! The plotting-surface seam.
//!
//! The chart never draws; it describes path geometry and styling to a
//! [`PlotSurface`] collaborator. Hosts decide how to honor transitions: the
//! [`RecordingSurface`] just stores target state (and an op log for tests),
//! while a GUI host animates toward it on its render loop.

use std::collections::HashMap;

use melt_core::{CurveId, Hsl};

use crate::transition::TransitionSpec;

/// Identity of one drawable path on the surface.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathId {
    Curve(CurveId),
    /// The single aggregate overlay slot; replaced, never accumulated.
    Overlay,
}

/// Visual styling of one path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathStyle {
    pub stroke: Hsl,
    pub width: f64,
    pub opacity: f64,
}

/// A 2D plotting surface exposing path-drawing primitives.
///
/// Contract:
/// - `upsert_path` with a transition animates an existing path toward the new
///   geometry/style; a path new to the surface fades in from transparent.
/// - `restyle_path` and `remove_path` on an unknown id are no-ops, not
///   errors (a lookup miss is expected after external pruning).
/// - all calls are synchronous; transitions are fire-and-forget and sampled
///   on the host's own loop.
pub trait PlotSurface {
    fn upsert_path(
        &mut self,
        id: PathId,
        points: Vec<[f64; 2]>,
        style: PathStyle,
        transition: Option<TransitionSpec>,
    );

    fn restyle_path(&mut self, id: &PathId, style: PathStyle, transition: Option<TransitionSpec>);

    fn remove_path(&mut self, id: &PathId);

    fn set_axes_opacity(&mut self, opacity: f64, transition: Option<TransitionSpec>);
}

/// Target state of one recorded path.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedPath {
    pub points: Vec<[f64; 2]>,
    pub style: PathStyle,
}

/// One surface call, kept for test assertions.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    Upsert {
        id: PathId,
        animated: bool,
    },
    Restyle {
        id: PathId,
        animated: bool,
    },
    Remove {
        id: PathId,
    },
    AxesOpacity {
        opacity: f64,
        animated: bool,
    },
}

/// In-memory surface recording target state and the op sequence.
///
/// Backs unit/e2e tests and the CLI geometry export.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    paths: HashMap<PathId, RecordedPath>,
    order: Vec<PathId>,
    axes_opacity: f64,
    ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(&self, id: &PathId) -> Option<&RecordedPath> {
        self.paths.get(id)
    }

    /// Paths in first-drawn order.
    pub fn paths(&self) -> impl Iterator<Item = (&PathId, &RecordedPath)> {
        self.order.iter().filter_map(|id| self.paths.get(id).map(|p| (id, p)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn axes_opacity(&self) -> f64 {
        self.axes_opacity
    }

    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }
}

impl PlotSurface for RecordingSurface {
    fn upsert_path(
        &mut self,
        id: PathId,
        points: Vec<[f64; 2]>,
        style: PathStyle,
        transition: Option<TransitionSpec>,
    ) {
        self.ops.push(SurfaceOp::Upsert {
            id: id.clone(),
            animated: transition.is_some(),
        });
        if !self.paths.contains_key(&id) {
            self.order.push(id.clone());
        }
        self.paths.insert(id, RecordedPath { points, style });
    }

    fn restyle_path(&mut self, id: &PathId, style: PathStyle, transition: Option<TransitionSpec>) {
        let Some(path) = self.paths.get_mut(id) else {
            // Lookup miss: leave untouched.
            return;
        };
        path.style = style;
        self.ops.push(SurfaceOp::Restyle {
            id: id.clone(),
            animated: transition.is_some(),
        });
    }

    fn remove_path(&mut self, id: &PathId) {
        if self.paths.remove(id).is_some() {
            self.order.retain(|p| p != id);
            self.ops.push(SurfaceOp::Remove { id: id.clone() });
        }
    }

    fn set_axes_opacity(&mut self, opacity: f64, transition: Option<TransitionSpec>) {
        self.axes_opacity = opacity;
        self.ops.push(SurfaceOp::AxesOpacity {
            opacity,
            animated: transition.is_some(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use melt_core::{ExperimentId, FALLBACK_COLOR};

    fn style() -> PathStyle {
        PathStyle {
            stroke: FALLBACK_COLOR,
            width: 2.0,
            opacity: 1.0,
        }
    }

    fn id(p: &str) -> PathId {
        PathId::Curve(CurveId::compose(p, &ExperimentId::Num(1)))
    }

    #[test]
    fn upsert_then_restyle_round_trip() {
        let mut s = RecordingSurface::new();
        s.upsert_path(id("P1"), vec![[0.0, 0.0]], style(), None);
        assert_eq!(s.len(), 1);

        let dimmed = PathStyle {
            opacity: 0.5,
            ..style()
        };
        s.restyle_path(&id("P1"), dimmed, None);
        assert_eq!(s.path(&id("P1")).unwrap().style.opacity, 0.5);
    }

    #[test]
    fn restyle_of_unknown_path_is_a_noop() {
        let mut s = RecordingSurface::new();
        s.restyle_path(&id("ghost"), style(), None);
        assert!(s.is_empty());
        assert!(s.ops().is_empty());
    }

    #[test]
    fn remove_drops_path_and_order() {
        let mut s = RecordingSurface::new();
        s.upsert_path(id("P1"), vec![], style(), None);
        s.upsert_path(id("P2"), vec![], style(), None);
        s.remove_path(&id("P1"));
        let order: Vec<_> = s.paths().map(|(id, _)| id.clone()).collect();
        assert_eq!(order, vec![id("P2")]);
    }
}
