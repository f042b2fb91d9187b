use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{FlickerError, FlickerResult};
use crate::render::surface::FrameRGBA;

/// Configuration provided to a [`FrameSink`] before the first frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkConfig {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Target frame rate of the producing loop.
    pub fps: Fps,
}

/// Sink contract for consuming rendered frames in loop order.
///
/// Ordering contract: `push_frame` is called in strictly increasing `FrameIndex` order.
pub trait FrameSink {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> FlickerResult<()>;
    /// Push one frame in strictly increasing order.
    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> FlickerResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> FlickerResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameIndex, FrameRGBA)>,
    ended: bool,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    pub fn frames(&self) -> &[(FrameIndex, FrameRGBA)] {
        &self.frames
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> FlickerResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.ended = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> FlickerResult<()> {
        check_order(self.frames.last().map(|(i, _)| *i), idx)?;
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> FlickerResult<()> {
        self.ended = true;
        Ok(())
    }
}

/// Writes each frame as `<prefix>_<index>.png` into a directory.
#[derive(Debug)]
pub struct PngSequenceSink {
    dir: PathBuf,
    prefix: String,
    cfg: Option<SinkConfig>,
    last: Option<FrameIndex>,
    written: Vec<PathBuf>,
}

impl PngSequenceSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            prefix: "frame".to_owned(),
            cfg: None,
            last: None,
            written: Vec::new(),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn path_for(&self, idx: FrameIndex) -> PathBuf {
        self.dir.join(format!("{}_{:05}.png", self.prefix, idx.0))
    }

    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl FrameSink for PngSequenceSink {
    fn begin(&mut self, cfg: SinkConfig) -> FlickerResult<()> {
        ensure_dir(&self.dir)?;
        self.cfg = Some(cfg);
        self.last = None;
        self.written.clear();
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> FlickerResult<()> {
        let cfg = self
            .cfg
            .ok_or_else(|| FlickerError::encode("push_frame called before begin"))?;
        if frame.width != cfg.width || frame.height != cfg.height {
            return Err(FlickerError::encode(format!(
                "frame is {}x{}, sink expects {}x{}",
                frame.width, frame.height, cfg.width, cfg.height
            )));
        }
        check_order(self.last, idx)?;

        let path = self.path_for(idx);
        write_png(&path, frame)?;
        self.last = Some(idx);
        self.written.push(path);
        Ok(())
    }

    fn end(&mut self) -> FlickerResult<()> {
        tracing::debug!(frames = self.written.len(), dir = %self.dir.display(), "png sequence done");
        Ok(())
    }
}

/// Encode one frame as a straight-alpha PNG.
pub fn write_png(path: &Path, frame: &FrameRGBA) -> FlickerResult<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    image::save_buffer_with_format(
        path,
        &frame.to_straight_rgba8(),
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

fn ensure_dir(dir: &Path) -> FlickerResult<()> {
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    std::fs::create_dir_all(dir)
        .with_context(|| format!("create output dir '{}'", dir.display()))?;
    Ok(())
}

fn check_order(last: Option<FrameIndex>, idx: FrameIndex) -> FlickerResult<()> {
    match last {
        Some(prev) if idx <= prev => Err(FlickerError::encode(format!(
            "frame {} pushed after frame {}",
            idx.0, prev.0
        ))),
        _ => Ok(()),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
