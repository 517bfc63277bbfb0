#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;

#[cfg(target_arch = "wasm32")]
use web_time::Instant;

/// Wall-clock source for the millisecond timestamps that
/// [`CourtScene::update`](crate::scene::CourtScene::update) takes.
///
/// Timestamps count from the timer's origin and never decrease.
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    origin: Instant,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Milliseconds since the timer was created or last restarted.
    #[must_use]
    pub fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }

    /// Moves the origin to now, so the next timestamp starts again near zero.
    pub fn restart(&mut self) {
        self.origin = Instant::now();
    }
}
