use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::animation::{AnimationClock, AnimationTarget, Easing, TrajectoryChain, TrajectoryHandle, Waypoint};
use crate::court::CourtDimensions;

/// Radius of the ball used to keep it just off walls and floor.
pub const BALL_RADIUS: f32 = 0.03;

/// Idle time before the ball leaves the racket.
pub const SWING_DELAY_MS: f64 = 500.0;
const LEG_MS: f64 = 1000.0;
const SHORT_LEG_MS: f64 = 500.0;

/// The hitting position is `(width - HITTING_INSET) / 2` off the centre
/// line, i.e. in the middle of a regulation service box.
const HITTING_INSET: f32 = 1.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Handedness {
    Forehand,
    Backhand,
}

impl Handedness {
    /// Mirrors every `x` coordinate: forehand shots are played from the
    /// right-hand side of the court.
    #[inline]
    #[must_use]
    pub fn sign(self) -> f32 {
        match self {
            Handedness::Forehand => 1.0,
            Handedness::Backhand => -1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ShotStyle {
    /// Drive parallel to the side wall to the back of the court.
    Straight,
    /// Off the near side wall, crossing diagonally to the front.
    Boast,
}

/// Builds the waypoints of a shot. The first waypoint is always a
/// zero-duration reposition to the hitting position.
#[must_use]
pub fn plan_shot(
    handedness: Handedness,
    style: ShotStyle,
    court: &CourtDimensions,
    ball_radius: f32,
) -> Vec<Waypoint> {
    let s = handedness.sign();
    let (hw, hl) = (court.half_width(), court.half_length());
    let hitting_x = s * (court.width - HITTING_INSET) / 2.0;
    let wall_x = s * (hw - ball_radius);

    match style {
        ShotStyle::Straight => vec![
            Waypoint::teleport(Vec3::new(hitting_x, 1.2, hl - 3.0)),
            // Up the wall to the front
            Waypoint::new(Vec3::new(hitting_x, 1.5, -hl + ball_radius), LEG_MS)
                .with_delay(SWING_DELAY_MS)
                .with_easing(Easing::QuadraticInOut),
            // Back into the corner on the hitting side
            Waypoint::new(Vec3::new(wall_x, ball_radius, hl - ball_radius), LEG_MS)
                .with_easing(Easing::QuadraticInOut),
        ],
        ShotStyle::Boast => vec![
            Waypoint::teleport(Vec3::new(hitting_x, 0.5, hl - 1.0)),
            // Into the near side wall
            Waypoint::new(Vec3::new(wall_x, 1.0, hl - 4.0), LEG_MS)
                .with_delay(SWING_DELAY_MS)
                .with_easing(Easing::QuadraticInOut),
            // Across to the front wall on the far side
            Waypoint::new(Vec3::new(-hitting_x, 0.8, -hl + ball_radius), LEG_MS)
                .with_easing(Easing::QuadraticInOut),
            // Dies in the far-side corner, one metre off the front wall (-z)
            Waypoint::new(Vec3::new(-wall_x, ball_radius, -hl + 1.0), SHORT_LEG_MS)
                .with_easing(Easing::QuadraticInOut),
        ],
    }
}

/// Owns the ball's active trajectory.
///
/// At most one shot runs at a time: a new command cancels the previous chain
/// on the clock before registering its own, so two chains never write the
/// ball position in the same frame.
#[derive(Debug, Clone)]
pub struct ShotSequencer {
    ball_radius: f32,
    active: Option<TrajectoryHandle>,
}

impl Default for ShotSequencer {
    fn default() -> Self {
        Self::new(BALL_RADIUS)
    }
}

impl ShotSequencer {
    #[must_use]
    pub fn new(ball_radius: f32) -> Self {
        Self {
            ball_radius,
            active: None,
        }
    }

    #[must_use]
    pub fn ball_radius(&self) -> f32 {
        self.ball_radius
    }

    /// Handle of the running shot, if it has not finished yet.
    #[must_use]
    pub fn active(&self, clock: &AnimationClock) -> Option<TrajectoryHandle> {
        self.active.filter(|&h| clock.is_active(h))
    }

    /// Replaces any running shot with a new one. Without a handedness
    /// selection nothing is built and the running shot is left alone.
    pub fn start_shot(
        &mut self,
        handedness: Option<Handedness>,
        style: ShotStyle,
        court: &CourtDimensions,
        clock: &mut AnimationClock,
    ) -> Option<TrajectoryHandle> {
        let Some(handedness) = handedness else {
            log::debug!("{style:?} requested without a handedness, ignoring");
            return None;
        };

        self.cancel(clock);

        let chain = TrajectoryChain::new(
            AnimationTarget::Ball,
            plan_shot(handedness, style, court, self.ball_radius),
        );
        log::debug!(
            "Starting {handedness:?} {style:?}: {} waypoints over {} ms",
            chain.waypoints().len(),
            chain.total_duration_ms()
        );

        let handle = clock.add(chain);
        self.active = Some(handle);
        Some(handle)
    }

    /// Stops the running shot where it is. Returns whether anything was
    /// still running.
    pub fn cancel(&mut self, clock: &mut AnimationClock) -> bool {
        self.active.take().is_some_and(|h| clock.cancel(h))
    }
}
