use std::ops::ControlFlow;

use crate::driver::scene::FrameReport;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::error::FlickerResult;
use crate::render::surface::{DrawSurface, Readback};
use crate::timing::timer::FrameTimer;

/// The "wait for the next frame" step of the loop.
///
/// Called once after every completed frame. Returning `ControlFlow::Break` ends the run.
/// Any `FnMut(&FrameReport, &mut S, &FrameTimer) -> FlickerResult<ControlFlow<()>>` works too.
pub trait FrameScheduler<S: ?Sized> {
    fn schedule(
        &mut self,
        report: &FrameReport,
        surface: &mut S,
        timer: &FrameTimer,
    ) -> FlickerResult<ControlFlow<()>>;

    /// Called once when the loop exits, whatever the reason.
    fn finish(&mut self) -> FlickerResult<()> {
        Ok(())
    }
}

impl<S, F> FrameScheduler<S> for F
where
    S: ?Sized,
    F: FnMut(&FrameReport, &mut S, &FrameTimer) -> FlickerResult<ControlFlow<()>>,
{
    fn schedule(
        &mut self,
        report: &FrameReport,
        surface: &mut S,
        timer: &FrameTimer,
    ) -> FlickerResult<ControlFlow<()>> {
        self(report, surface, timer)
    }
}

/// Sleeps out the remaining frame budget via [`FrameTimer::tick`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Paced;

impl<S: ?Sized> FrameScheduler<S> for Paced {
    fn schedule(
        &mut self,
        _report: &FrameReport,
        _surface: &mut S,
        timer: &FrameTimer,
    ) -> FlickerResult<ControlFlow<()>> {
        timer.tick();
        Ok(ControlFlow::Continue(()))
    }
}

/// Starts the next frame right away.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unpaced;

impl<S: ?Sized> FrameScheduler<S> for Unpaced {
    fn schedule(
        &mut self,
        _report: &FrameReport,
        _surface: &mut S,
        _timer: &FrameTimer,
    ) -> FlickerResult<ControlFlow<()>> {
        Ok(ControlFlow::Continue(()))
    }
}

/// Reads every finished frame back and pushes it into a [`FrameSink`].
#[derive(Debug)]
pub struct SinkScheduler<K> {
    sink: K,
    paced: bool,
    started: bool,
}

impl<K: FrameSink> SinkScheduler<K> {
    pub fn new(sink: K) -> Self {
        Self {
            sink,
            paced: false,
            started: false,
        }
    }

    /// Also sleep out the frame budget after each push.
    pub fn paced(mut self, paced: bool) -> Self {
        self.paced = paced;
        self
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    pub fn into_sink(self) -> K {
        self.sink
    }
}

impl<S, K> FrameScheduler<S> for SinkScheduler<K>
where
    S: DrawSurface + Readback + ?Sized,
    K: FrameSink,
{
    fn schedule(
        &mut self,
        report: &FrameReport,
        surface: &mut S,
        timer: &FrameTimer,
    ) -> FlickerResult<ControlFlow<()>> {
        if !self.started {
            self.sink.begin(SinkConfig {
                width: surface.width(),
                height: surface.height(),
                fps: timer.fps(),
            })?;
            self.started = true;
        }

        let frame = surface.readback()?;
        self.sink.push_frame(report.frame, &frame)?;

        if self.paced {
            timer.tick();
        }
        Ok(ControlFlow::Continue(()))
    }

    fn finish(&mut self) -> FlickerResult<()> {
        if self.started {
            self.started = false;
            self.sink.end()?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/driver/schedule.rs"]
mod tests;
