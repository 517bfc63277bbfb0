//! Court Scene Settings
//!
//! [`CourtSettings`] gathers every tunable the core reads: the court
//! measurements, the ball size, and the camera pose a reset returns to.
//! Defaults describe the regulation singles court.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use squash_court::CourtSettings;
//!
//! // Regulation court, labels hidden
//! let settings = CourtSettings::default();
//!
//! // Partial JSON documents keep defaults for omitted keys
//! let settings = CourtSettings::from_json(r#"{ "show_labels": true }"#)?;
//! ```

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::court::CourtDimensions;
use crate::errors::{Result, SquashError};
use crate::shot::BALL_RADIUS;

/// Canonical camera pose restored by a reset.
pub const CAMERA_HOME: Vec3 = Vec3::new(0.0, 15.0, 15.0);
pub const CAMERA_RESET_MS: f64 = 1000.0;
/// Where the ball is parked when it should not be visible.
pub const HIDDEN_BALL_POSITION: Vec3 = Vec3::new(0.0, 10_000.0, 0.0);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourtSettings {
    pub dimensions: CourtDimensions,
    pub ball_radius: f32,
    pub camera_home: Vec3,
    pub camera_reset_ms: f64,
    pub hidden_ball_position: Vec3,
    pub show_labels: bool,
}

impl Default for CourtSettings {
    fn default() -> Self {
        Self {
            dimensions: CourtDimensions::regulation(),
            ball_radius: BALL_RADIUS,
            camera_home: CAMERA_HOME,
            camera_reset_ms: CAMERA_RESET_MS,
            hidden_ball_position: HIDDEN_BALL_POSITION,
            show_labels: false,
        }
    }
}

impl CourtSettings {
    /// Parses and validates a JSON settings document.
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        self.dimensions.validate()?;

        let smallest_half_extent = self.dimensions.half_width().min(self.dimensions.half_length());
        if !self.ball_radius.is_finite() || self.ball_radius <= 0.0 {
            return Err(SquashError::InvalidSetting {
                field: "ball_radius",
                reason: format!("must be positive (got {})", self.ball_radius),
            });
        }
        if self.ball_radius >= smallest_half_extent {
            return Err(SquashError::InvalidSetting {
                field: "ball_radius",
                reason: format!(
                    "{} does not fit inside the court (half extent {smallest_half_extent})",
                    self.ball_radius
                ),
            });
        }

        if !self.camera_reset_ms.is_finite() || self.camera_reset_ms < 0.0 {
            return Err(SquashError::InvalidSetting {
                field: "camera_reset_ms",
                reason: format!("must be a non-negative duration (got {})", self.camera_reset_ms),
            });
        }
        if !self.camera_home.is_finite() {
            return Err(SquashError::InvalidSetting {
                field: "camera_home",
                reason: "must be finite".to_string(),
            });
        }

        Ok(())
    }
}
