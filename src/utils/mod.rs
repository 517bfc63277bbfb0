//! Utility Module
//!
//! - [`Timer`]: wall-clock frame timing for driving the animation clock

pub mod time;

pub use time::Timer;
