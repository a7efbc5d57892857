//! Animated transition model.
//!
//! Every animated visual property owns a single [`Slot`]: a new request for
//! the slot supersedes the pending one (last write wins), starting from the
//! value currently on screen so a mid-flight retarget never snaps or queues.
//! Nothing blocks on a transition; hosts sample `value_at` on their own
//! render loop.

use std::f64::consts::PI;
use std::time::{Duration, Instant};

use melt_core::Hsl;

/// Easing functions over normalized progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// Sinusoidal ease-in-out, the classic d3 `easeSinInOut`.
    SinInOut,
}

impl Easing {
    pub fn apply(self, u: f64) -> f64 {
        let u = u.clamp(0.0, 1.0);
        match self {
            Self::Linear => u,
            Self::SinInOut => (1.0 - (PI * u).cos()) / 2.0,
        }
    }
}

/// Duration plus easing for one animated change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionSpec {
    pub duration: Duration,
    pub easing: Easing,
}

impl TransitionSpec {
    pub const fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }
}

/// Rescale replays and overlay fades share the original 1.5s sin-in-out.
pub const RESCALE_TRANSITION: TransitionSpec =
    TransitionSpec::new(Duration::from_millis(1500), Easing::SinInOut);
pub const OVERLAY_TRANSITION: TransitionSpec =
    TransitionSpec::new(Duration::from_millis(1500), Easing::SinInOut);
/// Axis visibility fades over a fixed second.
pub const AXIS_FADE: TransitionSpec =
    TransitionSpec::new(Duration::from_millis(1000), Easing::Linear);

/// Linear interpolation between two values of a visual property.
pub trait Lerp {
    fn lerp(&self, other: &Self, u: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(&self, other: &Self, u: f64) -> Self {
        self + (other - self) * u
    }
}

impl Lerp for [f64; 2] {
    fn lerp(&self, other: &Self, u: f64) -> Self {
        [self[0].lerp(&other[0], u), self[1].lerp(&other[1], u)]
    }
}

/// Pointwise path interpolation. Paths of differing length snap to the
/// target; rescale replays keep point counts stable so this only happens
/// when the sample data itself changed.
impl Lerp for Vec<[f64; 2]> {
    fn lerp(&self, other: &Self, u: f64) -> Self {
        if self.len() != other.len() {
            return other.clone();
        }
        self.iter()
            .zip(other)
            .map(|(a, b)| a.lerp(b, u))
            .collect()
    }
}

impl Lerp for Hsl {
    fn lerp(&self, other: &Self, u: f64) -> Self {
        Hsl::new(
            self.h_deg.lerp(&other.h_deg, u),
            self.s.lerp(&other.s, u),
            self.l.lerp(&other.l, u),
        )
    }
}

#[derive(Debug, Clone)]
struct Active<T> {
    from: T,
    to: T,
    started: Instant,
    spec: TransitionSpec,
}

/// Single active-transition slot for one visual property.
#[derive(Debug, Clone)]
pub struct Slot<T> {
    target: T,
    active: Option<Active<T>>,
}

impl<T: Lerp + Clone> Slot<T> {
    pub fn new(value: T) -> Self {
        Self {
            target: value,
            active: None,
        }
    }

    /// Jump to a value immediately, cancelling any pending transition.
    pub fn set(&mut self, value: T) {
        self.target = value;
        self.active = None;
    }

    /// Animate toward `target`, superseding any pending transition.
    ///
    /// The new transition starts from the value visible at `now`, so a
    /// retarget mid-flight continues smoothly instead of jumping back to the
    /// stale start.
    pub fn transition_to(&mut self, target: T, spec: TransitionSpec, now: Instant) {
        let from = self.value_at(now);
        self.target = target.clone();
        self.active = Some(Active {
            from,
            to: target,
            started: now,
            spec,
        });
    }

    /// The interpolated value at `now`.
    pub fn value_at(&self, now: Instant) -> T {
        match &self.active {
            None => self.target.clone(),
            Some(active) => {
                let elapsed = now.saturating_duration_since(active.started).as_secs_f64();
                let total = active.spec.duration.as_secs_f64();
                if total <= 0.0 || elapsed >= total {
                    active.to.clone()
                } else {
                    active.from.lerp(&active.to, active.spec.easing.apply(elapsed / total))
                }
            }
        }
    }

    /// The target state, readable immediately after scheduling.
    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        match &self.active {
            None => false,
            Some(active) => now.saturating_duration_since(active.started) < active.spec.duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINEAR_100MS: TransitionSpec =
        TransitionSpec::new(Duration::from_millis(100), Easing::Linear);

    #[test]
    fn easing_endpoints_are_fixed() {
        for easing in [Easing::Linear, Easing::SinInOut] {
            assert!((easing.apply(0.0)).abs() < 1e-12);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-12);
        }
        assert!((Easing::SinInOut.apply(0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn slot_interpolates_and_settles() {
        let t0 = Instant::now();
        let mut slot = Slot::new(0.0);
        slot.transition_to(10.0, LINEAR_100MS, t0);

        assert_eq!(*slot.target(), 10.0);
        let mid = slot.value_at(t0 + Duration::from_millis(50));
        assert!((mid - 5.0).abs() < 1e-9);
        assert_eq!(slot.value_at(t0 + Duration::from_millis(200)), 10.0);
        assert!(!slot.is_animating(t0 + Duration::from_millis(200)));
    }

    #[test]
    fn retarget_supersedes_from_current_value() {
        let t0 = Instant::now();
        let mut slot = Slot::new(0.0);
        slot.transition_to(10.0, LINEAR_100MS, t0);

        // Halfway there, retarget back to zero: last write wins.
        let t_half = t0 + Duration::from_millis(50);
        slot.transition_to(0.0, LINEAR_100MS, t_half);
        assert_eq!(*slot.target(), 0.0);

        let quarter = slot.value_at(t_half + Duration::from_millis(50));
        assert!((quarter - 2.5).abs() < 1e-9);
        assert_eq!(slot.value_at(t_half + Duration::from_millis(100)), 0.0);
    }

    #[test]
    fn path_lerp_is_pointwise_with_snap_on_mismatch() {
        let a = vec![[0.0, 0.0], [10.0, 10.0]];
        let b = vec![[10.0, 0.0], [20.0, 10.0]];
        assert_eq!(a.lerp(&b, 0.5), vec![[5.0, 0.0], [15.0, 10.0]]);

        let shorter = vec![[1.0, 1.0]];
        assert_eq!(a.lerp(&shorter, 0.25), shorter);
    }

    #[test]
    fn set_cancels_pending_transition() {
        let t0 = Instant::now();
        let mut slot = Slot::new(0.0);
        slot.transition_to(10.0, LINEAR_100MS, t0);
        slot.set(3.0);
        assert_eq!(slot.value_at(t0 + Duration::from_millis(10)), 3.0);
        assert!(!slot.is_animating(t0 + Duration::from_millis(10)));
    }
}
