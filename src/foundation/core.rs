use std::time::Duration;

use crate::foundation::error::{FlickerError, FlickerResult};

pub use kurbo::{Point, Rect, Size, Vec2};

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

impl FrameIndex {
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

/// Target update rate as a rational `num / den` frames per second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    pub num: u32,
    pub den: u32, // must be > 0
}

impl Fps {
    pub fn new(num: u32, den: u32) -> FlickerResult<Self> {
        if den == 0 {
            return Err(FlickerError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(FlickerError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    pub fn whole(fps: u32) -> FlickerResult<Self> {
        Self::new(fps, 1)
    }

    /// Frame interval in whole milliseconds, truncated (60 fps gives 16 ms).
    ///
    /// A zero `num` (only reachable through the public fields or deserialization) yields a zero
    /// interval, i.e. no pacing.
    pub fn frame_interval(self) -> Duration {
        (1000 * u64::from(self.den))
            .checked_div(u64::from(self.num))
            .map_or(Duration::ZERO, Duration::from_millis)
    }
}

impl Default for Fps {
    fn default() -> Self {
        Self { num: 60, den: 1 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> FlickerResult<Self> {
        if width == 0 || height == 0 {
            return Err(FlickerError::validation(format!(
                "canvas must be non-empty, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    pub fn size(self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }

    pub fn bounds(self) -> Rect {
        Rect::from_origin_size(Point::ORIGIN, self.size())
    }
}

/// Straight (non-premultiplied) RGBA8 fill color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_premul(self) -> [u8; 4] {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        [
            premul(self.r, self.a),
            premul(self.g, self.a),
            premul(self.b, self.a),
            self.a,
        ]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
