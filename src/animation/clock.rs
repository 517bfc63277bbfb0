use glam::Vec3;
use slotmap::{SlotMap, new_key_type};
use smallvec::SmallVec;

use crate::animation::chain::{AnimationTarget, ChainStatus, TrajectoryChain};

new_key_type! {
    /// Generational handle to a chain registered with an [`AnimationClock`].
    /// A handle stays invalid forever once its chain completes or is
    /// cancelled, even if the slot is reused.
    pub struct TrajectoryHandle;
}

/// The live position cells written by running chains and read by the
/// renderer every frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimatedPositions {
    pub ball: Vec3,
    pub camera: Vec3,
}

impl AnimatedPositions {
    #[must_use]
    pub fn get(&self, target: AnimationTarget) -> Vec3 {
        match target {
            AnimationTarget::Ball => self.ball,
            AnimationTarget::Camera => self.camera,
        }
    }

    pub fn get_mut(&mut self, target: AnimationTarget) -> &mut Vec3 {
        match target {
            AnimationTarget::Ball => &mut self.ball,
            AnimationTarget::Camera => &mut self.camera,
        }
    }
}

/// Single driver that advances every registered chain once per frame.
///
/// The clock never reads wall time itself: callers pass a monotonically
/// non-decreasing timestamp in milliseconds, which makes it equally usable
/// from a real frame callback or a fixed-timestep test harness.
#[derive(Debug, Default)]
pub struct AnimationClock {
    chains: SlotMap<TrajectoryHandle, TrajectoryChain>,
    now_ms: f64,
}

impl AnimationClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Timestamp of the most recent tick.
    #[must_use]
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    /// Registers `chain`. It stays pending until the next
    /// [`tick`](Self::tick), which activates it at that tick's timestamp.
    pub fn add(&mut self, chain: TrajectoryChain) -> TrajectoryHandle {
        let target = chain.target();
        let handle = self.chains.insert(chain);
        log::debug!("Registered {target:?} trajectory {handle:?}");
        handle
    }

    /// Drops a chain before it finishes. Returns `false` if the handle was
    /// already stale.
    pub fn cancel(&mut self, handle: TrajectoryHandle) -> bool {
        let removed = self.chains.remove(handle).is_some();
        if removed {
            log::debug!("Cancelled trajectory {handle:?}");
        }
        removed
    }

    #[must_use]
    pub fn is_active(&self, handle: TrajectoryHandle) -> bool {
        self.chains.contains_key(handle)
    }

    #[must_use]
    pub fn get(&self, handle: TrajectoryHandle) -> Option<&TrajectoryChain> {
        self.chains.get(handle)
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.chains.len()
    }

    /// Advances every chain to `now_ms`, writing into `positions`, and
    /// retires the chains that reached their final waypoint.
    pub fn tick(&mut self, now_ms: f64, positions: &mut AnimatedPositions) {
        if now_ms < self.now_ms {
            log::warn!("Animation clock went backwards ({now_ms} < {}), holding", self.now_ms);
        }
        self.now_ms = self.now_ms.max(now_ms);

        let mut finished: SmallVec<[TrajectoryHandle; 4]> = SmallVec::new();
        for (handle, chain) in &mut self.chains {
            if !chain.is_started() {
                chain.start(self.now_ms);
                log::trace!("{:?} trajectory {handle:?} started at {:.1} ms", chain.target(), self.now_ms);
            }
            let cell = positions.get_mut(chain.target());
            if chain.advance(self.now_ms, cell) == ChainStatus::Complete {
                finished.push(handle);
            }
        }

        for handle in finished {
            if let Some(chain) = self.chains.remove(handle) {
                log::debug!(
                    "{:?} trajectory {handle:?} complete at {:.1} ms",
                    chain.target(),
                    self.now_ms
                );
            }
        }
    }
}
