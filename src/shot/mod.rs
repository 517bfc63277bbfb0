//! Shot Sequencer
//!
//! Scripted ball paths for straight drives and boasts, mirrored between
//! forehand and backhand.

pub mod sequencer;

pub use sequencer::{BALL_RADIUS, Handedness, ShotSequencer, ShotStyle, SWING_DELAY_MS, plan_shot};
