//! The command/output surface a UI and renderer talk to.

use glam::Vec3;

use crate::animation::{AnimatedPositions, AnimationClock};
use crate::court::{CourtDimensions, CourtLayout, build_court};
use crate::errors::Result;
use crate::scene::camera_reset::CameraResetController;
use crate::settings::CourtSettings;
use crate::shot::{Handedness, ShotSequencer, ShotStyle};

/// Court model plus the animated ball and camera.
///
/// Drive it with one [`update`](Self::update) per rendered frame; read
/// [`ball_position`](Self::ball_position), [`camera_override`](Self::camera_override)
/// and [`layout`](Self::layout) afterwards.
#[derive(Debug)]
pub struct CourtScene {
    settings: CourtSettings,
    layout: CourtLayout,
    clock: AnimationClock,
    positions: AnimatedPositions,
    shots: ShotSequencer,
    camera_reset: CameraResetController,
    camera_override: Option<Vec3>,
}

impl CourtScene {
    pub fn new(settings: CourtSettings) -> Result<Self> {
        settings.validate()?;

        let layout = build_court(&settings.dimensions, settings.show_labels);
        log::debug!(
            "Built court: {} surfaces, {} edges, {} labels",
            layout.surfaces.len(),
            layout.edges.len(),
            layout.labels.len()
        );

        Ok(Self {
            layout,
            clock: AnimationClock::new(),
            positions: AnimatedPositions {
                ball: settings.hidden_ball_position,
                camera: settings.camera_home,
            },
            shots: ShotSequencer::new(settings.ball_radius),
            camera_reset: CameraResetController::new(
                settings.camera_home,
                settings.camera_reset_ms,
                settings.hidden_ball_position,
            ),
            camera_override: None,
            settings,
        })
    }

    // ========================================================================
    // Commands
    // ========================================================================

    /// Cancels any running shot and plays a new one. A missing handedness
    /// is a no-op.
    pub fn start_shot(&mut self, handedness: Option<Handedness>, style: ShotStyle) {
        self.shots
            .start_shot(handedness, style, &self.settings.dimensions, &mut self.clock);
    }

    pub fn reset_camera(&mut self) {
        self.camera_reset
            .reset(&mut self.clock, &mut self.positions, &mut self.shots);
    }

    /// Rebuilds the layout when visibility actually changes.
    pub fn set_labels_visible(&mut self, visible: bool) {
        if self.settings.show_labels == visible {
            return;
        }
        self.settings.show_labels = visible;
        self.layout = build_court(&self.settings.dimensions, visible);
        log::info!("Court labels {}", if visible { "shown" } else { "hidden" });
    }

    /// Records the camera pose chosen by the user's orbit controls, so a
    /// later reset starts from it. Ignored while a reset is in flight.
    pub fn set_camera_position(&mut self, position: Vec3) {
        if self.camera_reset.active(&self.clock).is_none() {
            self.positions.camera = position;
        }
    }

    /// Advances every running trajectory to `now_ms`. Shots and resets
    /// commanded since the previous update begin at `now_ms`.
    pub fn update(&mut self, now_ms: f64) {
        // A glide that lands this frame still owns the camera for this frame
        let gliding = self.camera_reset.active(&self.clock).is_some();
        self.clock.tick(now_ms, &mut self.positions);
        self.camera_override = gliding.then_some(self.positions.camera);
    }

    // ========================================================================
    // Outputs
    // ========================================================================

    #[must_use]
    pub fn ball_position(&self) -> Vec3 {
        self.positions.ball
    }

    /// Camera position, as last written by a reset or reported through
    /// [`set_camera_position`](Self::set_camera_position).
    #[must_use]
    pub fn camera_position(&self) -> Vec3 {
        self.positions.camera
    }

    /// Camera position the renderer must use this frame, present only while
    /// a reset is in flight (including the frame it lands on).
    #[must_use]
    pub fn camera_override(&self) -> Option<Vec3> {
        self.camera_override
    }

    #[must_use]
    pub fn is_shot_running(&self) -> bool {
        self.shots.active(&self.clock).is_some()
    }

    #[must_use]
    pub fn layout(&self) -> &CourtLayout {
        &self.layout
    }

    #[must_use]
    pub fn labels_visible(&self) -> bool {
        self.settings.show_labels
    }

    #[must_use]
    pub fn dimensions(&self) -> &CourtDimensions {
        &self.settings.dimensions
    }

    #[must_use]
    pub fn settings(&self) -> &CourtSettings {
        &self.settings
    }

    #[must_use]
    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }
}
