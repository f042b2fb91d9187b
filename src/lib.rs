//! Flicker is a small fixed-rate frame scheduler for 2D raster animation.
//!
//! A [`Scene`] owns one drawing surface, a [`FrameTimer`] and a root [`NodeGroup`]. Each frame
//! runs the same sequence:
//!
//! 1. **Clear** the surface and save its drawing state
//! 2. **Advance** the timer (`FrameTimer::update`)
//! 3. **Step** the node tree, depth-first, children in insertion order
//! 4. **Restore** the drawing state
//! 5. **Schedule** the next frame through a [`FrameScheduler`] (pace, capture, or stop)
//!
//! Motion is per frame, not per second: a node moves by its velocity once per step no matter
//! how long the frame took. [`FrameCtx::delta`] is available to nodes that want otherwise.
//!
//! The loop is single-threaded. A child finishes its whole step (including nested groups)
//! before its next sibling starts, so draw order is deterministic.
#![forbid(unsafe_code)]

mod driver;
mod encode;
mod foundation;
mod render;
mod scene;
mod timing;

pub use driver::scene::{FrameReport, RunOpts, RunStats, Scene, StopHandle, StopReason};
pub use driver::schedule::{FrameScheduler, Paced, SinkScheduler, Unpaced};
pub use driver::settings::{ENV_FPS, ENV_HEIGHT, ENV_WIDTH, SceneSettings};
pub use encode::sink::{FrameSink, InMemorySink, PngSequenceSink, SinkConfig, write_png};
pub use foundation::core::{Canvas, Fps, FrameIndex, Point, Rect, Rgba8, Size, Vec2};
pub use foundation::error::{FlickerError, FlickerResult};
pub use render::cpu::CpuSurface;
pub use render::recording::{DrawCmd, RecordingSurface};
pub use render::surface::{DrawSurface, FrameRGBA, Readback};
pub use scene::bouncer::Bouncer;
pub use scene::demo::{bouncing_pixel, pixel};
pub use scene::group::NodeGroup;
pub use scene::node::{Body, FrameCtx, Step};
pub use timing::clock::{Clock, ManualClock, SystemClock};
pub use timing::timer::FrameTimer;
