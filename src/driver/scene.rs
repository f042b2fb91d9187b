use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::driver::schedule::FrameScheduler;
use crate::driver::settings::SceneSettings;
use crate::foundation::core::FrameIndex;
use crate::foundation::error::FlickerResult;
use crate::render::cpu::CpuSurface;
use crate::render::surface::DrawSurface;
use crate::scene::group::NodeGroup;
use crate::scene::node::{FrameCtx, Step};
use crate::timing::clock::Clock;
use crate::timing::timer::FrameTimer;

/// Outcome of one [`Scene::run_frame`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct FrameReport {
    pub frame: FrameIndex,
    /// Timer delta sampled at the start of this frame.
    pub delta: Duration,
}

/// Why [`Scene::run`] returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    Scheduler,
    MaxFrames,
    Cancelled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct RunStats {
    pub frames: u64,
    /// Timer time between the first and the last frame of the run.
    pub elapsed: Duration,
    pub reason: StopReason,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct RunOpts {
    /// Stop after this many frames. `None` runs until the scheduler or a [`StopHandle`] ends it.
    pub max_frames: Option<u64>,
}

impl RunOpts {
    pub fn frames(n: u64) -> Self {
        Self {
            max_frames: Some(n),
        }
    }
}

/// Cancellation flag shared between a running [`Scene`] and whoever wants it to stop.
///
/// Checked before each frame; a frame already in progress always completes.
#[derive(Clone, Debug, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn stop(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Frame loop driver: owns the surface, the timer and the root group.
pub struct Scene<S> {
    surface: S,
    timer: FrameTimer,
    root: NodeGroup,
    next: FrameIndex,
    stop: StopHandle,
}

impl Scene<CpuSurface> {
    /// CPU raster scene sized and paced from `settings`. Settings are validated first.
    pub fn cpu(settings: &SceneSettings, clock: impl Clock + 'static) -> FlickerResult<Self> {
        settings.validate()?;
        let surface = CpuSurface::new(settings.canvas, settings.background)?;
        Ok(Self::new(surface, FrameTimer::new(settings.fps, clock)))
    }
}

impl<S: DrawSurface> Scene<S> {
    pub fn new(surface: S, timer: FrameTimer) -> Self {
        Self {
            surface,
            timer,
            root: NodeGroup::new(),
            next: FrameIndex(0),
            stop: StopHandle::default(),
        }
    }

    pub fn root(&self) -> &NodeGroup {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut NodeGroup {
        &mut self.root
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn timer(&self) -> &FrameTimer {
        &self.timer
    }

    /// Index the next [`Scene::run_frame`] will use.
    pub fn next_frame(&self) -> FrameIndex {
        self.next
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Clear, save, advance the timer, step the tree, restore.
    pub fn run_frame(&mut self) -> FrameReport {
        let bounds = self.surface.bounds();
        self.surface.clear(bounds);
        self.surface.save();

        self.timer.update();

        let frame = self.next;
        let mut ctx = FrameCtx {
            surface: &mut self.surface,
            timer: &self.timer,
            frame,
        };
        self.root.step(&mut ctx);

        self.surface.restore();
        self.next = frame.next();

        let report = FrameReport {
            frame,
            delta: self.timer.delta(),
        };
        tracing::debug!(
            frame = frame.0,
            delta = ?report.delta,
            "frame stepped"
        );
        report
    }

    /// Run frames until the scheduler breaks, `opts.max_frames` is hit or the stop handle fires.
    #[tracing::instrument(skip(self, scheduler))]
    pub fn run(
        &mut self,
        scheduler: &mut impl FrameScheduler<S>,
        opts: RunOpts,
    ) -> FlickerResult<RunStats> {
        let mut frames = 0u64;
        let mut started_at = None;

        let looped = self.run_loop(scheduler, opts, &mut frames, &mut started_at);
        let finished = scheduler.finish();
        let reason = looped?;
        finished?;

        let elapsed = started_at
            .map(|t0| self.timer.now().saturating_sub(t0))
            .unwrap_or_default();
        tracing::info!(frames, ?reason, "frame loop stopped");

        Ok(RunStats {
            frames,
            elapsed,
            reason,
        })
    }

    fn run_loop(
        &mut self,
        scheduler: &mut impl FrameScheduler<S>,
        opts: RunOpts,
        frames: &mut u64,
        started_at: &mut Option<Duration>,
    ) -> FlickerResult<StopReason> {
        loop {
            if self.stop.is_stopped() {
                return Ok(StopReason::Cancelled);
            }
            if opts.max_frames.is_some_and(|max| *frames >= max) {
                return Ok(StopReason::MaxFrames);
            }

            let report = self.run_frame();
            *frames += 1;
            if started_at.is_none() {
                *started_at = Some(self.timer.now());
            }

            if scheduler
                .schedule(&report, &mut self.surface, &self.timer)?
                .is_break()
            {
                return Ok(StopReason::Scheduler);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/driver/scene.rs"]
mod tests;
