use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::animation::easing::Easing;

/// One timed point-to-point move.
///
/// The start point is implicit: whatever value the animated cell holds when
/// the waypoint becomes current (the previous waypoint's target inside a
/// chain). A zero `duration_ms` jumps straight to `target`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub target: Vec3,
    pub duration_ms: f64,
    /// Dead time before interpolation starts, counted from activation.
    pub delay_ms: f64,
    pub easing: Easing,
}

impl Waypoint {
    #[must_use]
    pub fn new(target: Vec3, duration_ms: f64) -> Self {
        debug_assert!(duration_ms >= 0.0, "negative waypoint duration");
        Self {
            target,
            duration_ms,
            delay_ms: 0.0,
            easing: Easing::Linear,
        }
    }

    /// Discontinuous reposition, applied on the first tick.
    #[must_use]
    pub fn teleport(target: Vec3) -> Self {
        Self::new(target, 0.0)
    }

    #[must_use]
    pub fn with_delay(mut self, delay_ms: f64) -> Self {
        debug_assert!(delay_ms >= 0.0, "negative waypoint delay");
        self.delay_ms = delay_ms;
        self
    }

    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    #[inline]
    #[must_use]
    pub fn is_teleport(&self) -> bool {
        self.duration_ms <= 0.0
    }

    /// Delay plus duration.
    #[inline]
    #[must_use]
    pub fn span_ms(&self) -> f64 {
        self.delay_ms + self.duration_ms
    }

    /// Raw (un-eased) progress `elapsed_ms` after activation, clamped to
    /// `[0, 1]`. `None` while the delay is still running.
    #[must_use]
    pub fn progress(&self, elapsed_ms: f64) -> Option<f64> {
        let local = elapsed_ms - self.delay_ms;
        if local < 0.0 {
            return None;
        }
        if self.is_teleport() {
            return Some(1.0);
        }
        Some((local / self.duration_ms).clamp(0.0, 1.0))
    }
}
