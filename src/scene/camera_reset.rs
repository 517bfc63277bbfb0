use glam::Vec3;

use crate::animation::{
    AnimatedPositions, AnimationClock, AnimationTarget, Easing, TrajectoryChain, TrajectoryHandle,
    Waypoint,
};
use crate::settings::{CAMERA_HOME, CAMERA_RESET_MS, HIDDEN_BALL_POSITION};
use crate::shot::ShotSequencer;

/// Glides the camera back to its home pose and takes the ball out of view.
#[derive(Debug, Clone)]
pub struct CameraResetController {
    home: Vec3,
    duration_ms: f64,
    hidden_ball_position: Vec3,
    active: Option<TrajectoryHandle>,
}

impl Default for CameraResetController {
    fn default() -> Self {
        Self::new(CAMERA_HOME, CAMERA_RESET_MS, HIDDEN_BALL_POSITION)
    }
}

impl CameraResetController {
    #[must_use]
    pub fn new(home: Vec3, duration_ms: f64, hidden_ball_position: Vec3) -> Self {
        Self {
            home,
            duration_ms,
            hidden_ball_position,
            active: None,
        }
    }

    #[must_use]
    pub fn home(&self) -> Vec3 {
        self.home
    }

    /// Handle of the camera glide, while it is still running.
    #[must_use]
    pub fn active(&self, clock: &AnimationClock) -> Option<TrajectoryHandle> {
        self.active.filter(|&h| clock.is_active(h))
    }

    /// Starts the camera glide and parks the ball immediately.
    ///
    /// Parking the ball writes its cell directly, so any running shot is
    /// cancelled first or it would drag the ball back on the next tick. A
    /// reset already in flight is replaced.
    pub fn reset(
        &mut self,
        clock: &mut AnimationClock,
        positions: &mut AnimatedPositions,
        shots: &mut ShotSequencer,
    ) -> TrajectoryHandle {
        shots.cancel(clock);
        positions.ball = self.hidden_ball_position;

        if let Some(previous) = self.active.take() {
            clock.cancel(previous);
        }

        let glide = Waypoint::new(self.home, self.duration_ms).with_easing(Easing::QuadraticInOut);
        let handle = clock.add(TrajectoryChain::new(AnimationTarget::Camera, [glide]));
        log::info!(
            "Camera reset from {} to {} over {} ms",
            positions.camera,
            self.home,
            self.duration_ms
        );

        self.active = Some(handle);
        handle
    }
}
