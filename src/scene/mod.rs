//! Scene Module
//!
//! - [`CourtScene`]: commands in, per-frame positions and court layout out
//! - [`CameraResetController`]: returns the camera to its home pose

pub mod camera_reset;
pub mod court_scene;

pub use camera_reset::CameraResetController;
pub use court_scene::CourtScene;
