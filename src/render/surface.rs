use crate::foundation::core::{Rect, Rgba8};
use crate::foundation::error::FlickerResult;

/// A rendered frame as RGBA8 pixels.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Copy of the pixels with alpha un-premultiplied, ready for image encoders.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        if !self.premultiplied {
            return self.data.clone();
        }
        let mut out = self.data.clone();
        for px in out.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            if a == 0 || a == 255 {
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        out
    }
}

/// Drawing capability handed to nodes while they step.
///
/// Calls paint in order; later fills occlude earlier ones where they overlap.
pub trait DrawSurface {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Erase `region` back to the surface background.
    fn clear(&mut self, region: Rect);

    /// Push the current drawing state (fill style).
    fn save(&mut self);

    /// Pop the state pushed by the matching `save`. Unbalanced calls are ignored.
    fn restore(&mut self);

    fn set_fill(&mut self, color: Rgba8);

    fn fill(&self) -> Rgba8;

    fn fill_rect(&mut self, rect: Rect);

    /// Whole-surface rectangle.
    fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width()), f64::from(self.height()))
    }
}

/// Surfaces whose pixels can be read back after a frame.
pub trait Readback {
    fn readback(&mut self) -> FlickerResult<FrameRGBA>;
}

/// True when `outer` fully contains `inner`.
pub(crate) fn covers(outer: Rect, inner: Rect) -> bool {
    outer.x0 <= inner.x0 && outer.y0 <= inner.y0 && outer.x1 >= inner.x1 && outer.y1 >= inner.y1
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
