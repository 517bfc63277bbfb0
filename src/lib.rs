//! Squash court model and shot animation.
//!
//! Two pieces carry the domain logic:
//!
//! - [`court`]: a pure builder turning [`CourtDimensions`] into renderable
//!   surface, edge-line and label descriptors
//! - [`shot`] + [`animation`]: scripted drives and boasts played as chains of
//!   eased waypoints, advanced once per frame by an [`AnimationClock`]
//!
//! [`CourtScene`] ties them together behind the commands a UI issues
//! (`start_shot`, `reset_camera`, `set_labels_visible`) and the values a
//! renderer reads each frame.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod animation;
pub mod court;
pub mod errors;
pub mod scene;
pub mod settings;
pub mod shot;
pub mod utils;

pub use animation::{AnimatedPositions, AnimationClock, AnimationTarget, Easing, TrajectoryChain, TrajectoryHandle, Waypoint};
pub use court::{CourtDimensions, CourtLayout, build_court};
pub use errors::{Result, SquashError};
pub use scene::{CameraResetController, CourtScene};
pub use settings::CourtSettings;
pub use shot::{Handedness, ShotSequencer, ShotStyle, plan_shot};
pub use utils::Timer;
