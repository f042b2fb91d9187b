use std::fmt;
use std::time::Duration;

use crate::foundation::core::Fps;
use crate::timing::clock::{Clock, SystemClock};

/// Frame pacing timer.
///
/// Holds the timestamps of the two most recent [`FrameTimer::update`] calls and the target
/// frame interval derived from the configured [`Fps`]. Invariant: `now() >= prev()`.
pub struct FrameTimer {
    fps: Fps,
    frame: Duration,
    prev: Duration,
    now: Duration,
    clock: Box<dyn Clock>,
}

impl FrameTimer {
    pub fn new(fps: Fps, clock: impl Clock + 'static) -> Self {
        let t = clock.now();
        Self {
            fps,
            frame: fps.frame_interval(),
            prev: t,
            now: t,
            clock: Box::new(clock),
        }
    }

    pub fn with_system_clock(fps: Fps) -> Self {
        Self::new(fps, SystemClock::new())
    }

    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Target frame interval.
    pub fn frame(&self) -> Duration {
        self.frame
    }

    pub fn prev(&self) -> Duration {
        self.prev
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    /// Time between the last two `update` calls.
    pub fn delta(&self) -> Duration {
        self.now - self.prev
    }

    /// Shift the current timestamp into `prev` and sample a fresh one.
    pub fn update(&mut self) {
        self.prev = self.now;
        self.now = self.clock.now().max(self.prev);
    }

    /// Budget left until one frame interval has passed since the last `update`.
    pub fn remaining(&self) -> Duration {
        let passed = self.clock.now().saturating_sub(self.now);
        self.frame.saturating_sub(passed)
    }

    /// Sleep out the rest of the frame budget. Returns how long it slept.
    ///
    /// Does not touch the stored timestamps; repeated calls without an `update` in between
    /// see a shrinking budget and eventually return immediately.
    pub fn tick(&self) -> Duration {
        let ts = self.remaining();
        if ts.is_zero() {
            return Duration::ZERO;
        }
        self.clock.sleep(ts);
        ts
    }
}

impl fmt::Debug for FrameTimer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameTimer")
            .field("fps", &self.fps)
            .field("frame", &self.frame)
            .field("prev", &self.prev)
            .field("now", &self.now)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timing/timer.rs"]
mod tests;
