//! Animation System
//!
//! Keyframe-path animation of 3D positions:
//!
//! - [`Easing`]: normalized-time remapping curves
//! - [`Waypoint`]: one timed move, optionally delayed
//! - [`TrajectoryChain`]: waypoints run in sequence behind an explicit cursor
//! - [`AnimationClock`]: the per-frame driver owning every running chain

pub mod chain;
pub mod clock;
pub mod easing;
pub mod tween;
pub mod values;

pub use chain::{AnimationTarget, ChainStatus, TrajectoryChain};
pub use clock::{AnimatedPositions, AnimationClock, TrajectoryHandle};
pub use easing::{Easing, quadratic_in_out};
pub use tween::Waypoint;
pub use values::Interpolatable;
