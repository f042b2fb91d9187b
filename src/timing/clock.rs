use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Monotonic time source plus the delay primitive used for frame pacing.
///
/// Timestamps are durations since an arbitrary, clock-specific origin.
pub trait Clock {
    /// Sample the current timestamp. Never goes backwards.
    fn now(&self) -> Duration;

    /// Suspend the caller for `dur`.
    fn sleep(&self, dur: Duration);
}

/// Wall clock backed by [`Instant`] and [`std::thread::sleep`].
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn sleep(&self, dur: Duration) {
        std::thread::sleep(dur);
    }
}

/// Virtual clock for deterministic runs.
///
/// Clones share the same time, so a test can keep a handle while a timer owns another.
/// `sleep` advances virtual time instead of blocking.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
    slept: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, dur: Duration) {
        self.now.set(self.now.get().saturating_add(dur));
    }

    /// Total time spent in `sleep` so far.
    pub fn slept(&self) -> Duration {
        self.slept.get()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }

    fn sleep(&self, dur: Duration) {
        self.slept.set(self.slept.get().saturating_add(dur));
        self.advance(dur);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timing/clock.rs"]
mod tests;
