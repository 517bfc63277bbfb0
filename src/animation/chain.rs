use glam::Vec3;
use smallvec::SmallVec;

use crate::animation::tween::Waypoint;
use crate::animation::values::Interpolatable;

/// The position cell a chain writes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationTarget {
    Ball,
    Camera,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainStatus {
    /// Not yet activated by a clock tick.
    Pending,
    Running,
    Complete,
}

/// An ordered list of waypoints executed strictly one after another.
///
/// A cursor marks the current waypoint. Each waypoint's activation time is
/// the exact instant its predecessor reached its target, so the chain's
/// state is a function of elapsed time alone and does not depend on how
/// often it is advanced.
#[derive(Debug, Clone)]
pub struct TrajectoryChain {
    target: AnimationTarget,
    waypoints: SmallVec<[Waypoint; 4]>,
    cursor: usize,
    /// When the current waypoint became current.
    activated_at: Option<f64>,
    /// Value the current waypoint interpolates from, captured lazily.
    from: Option<Vec3>,
}

impl TrajectoryChain {
    #[must_use]
    pub fn new(target: AnimationTarget, waypoints: impl IntoIterator<Item = Waypoint>) -> Self {
        Self {
            target,
            waypoints: waypoints.into_iter().collect(),
            cursor: 0,
            activated_at: None,
            from: None,
        }
    }

    #[must_use]
    pub fn target(&self) -> AnimationTarget {
        self.target
    }

    #[must_use]
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// Index of the waypoint currently being executed.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cursor >= self.waypoints.len()
    }

    /// Sum of every waypoint's delay and duration.
    #[must_use]
    pub fn total_duration_ms(&self) -> f64 {
        self.waypoints.iter().map(Waypoint::span_ms).sum()
    }

    /// Final target, if the chain has any waypoints.
    #[must_use]
    pub fn end_position(&self) -> Option<Vec3> {
        self.waypoints.last().map(|w| w.target)
    }

    /// Whether a clock has activated the chain yet.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.activated_at.is_some()
    }

    /// Activates the first waypoint at `now_ms`.
    pub(crate) fn start(&mut self, now_ms: f64) {
        self.cursor = 0;
        self.activated_at = Some(now_ms);
        self.from = None;
    }

    /// Brings `value` to where the chain should be at `now_ms`, running
    /// through as many waypoints as have finished since the last call.
    pub fn advance(&mut self, now_ms: f64, value: &mut Vec3) -> ChainStatus {
        let Some(mut activated_at) = self.activated_at else {
            return ChainStatus::Pending;
        };

        while let Some(waypoint) = self.waypoints.get(self.cursor).copied() {
            let Some(t) = waypoint.progress(now_ms - activated_at) else {
                // Still inside this waypoint's delay
                return ChainStatus::Running;
            };

            let from = *self.from.get_or_insert(*value);
            let eased = waypoint.easing.apply(t) as f32;
            *value = Vec3::interpolate_linear(from, waypoint.target, eased);

            if t < 1.0 {
                return ChainStatus::Running;
            }

            activated_at += waypoint.span_ms();
            self.activated_at = Some(activated_at);
            self.from = Some(waypoint.target);
            self.cursor += 1;
            log::trace!(
                "{:?} trajectory reached waypoint {} at {:.1} ms",
                self.target,
                self.cursor - 1,
                activated_at
            );
        }

        ChainStatus::Complete
    }
}
