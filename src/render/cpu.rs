use crate::foundation::core::{Canvas, Rect, Rgba8};
use crate::foundation::error::{FlickerError, FlickerResult};
use crate::render::surface::{DrawSurface, FrameRGBA, Readback, covers};

/// CPU raster surface powered by `vello_cpu`.
///
/// Fills are kept as an ordered list of axis-aligned rects and rasterized on
/// [`Readback::readback`]. A clear cuts its region out of every rect painted so far and then
/// lays the background over it, so cleared pixels are exactly the background color whatever
/// its alpha.
pub struct CpuSurface {
    canvas: Canvas,
    background: Rgba8,
    fill: Rgba8,
    stack: Vec<Rgba8>,
    ops: Vec<(Rect, Rgba8)>,
    ctx: vello_cpu::RenderContext,
}

impl CpuSurface {
    /// Fails when either side of the canvas does not fit the rasterizer's `u16` limit.
    pub fn new(canvas: Canvas, background: Rgba8) -> FlickerResult<Self> {
        let (w, h) = surface_dims(canvas)?;
        let mut surface = Self {
            canvas,
            background,
            fill: Rgba8::BLACK,
            stack: Vec::new(),
            ops: Vec::new(),
            ctx: vello_cpu::RenderContext::new(w, h),
        };
        surface.paint_background(canvas.bounds());
        Ok(surface)
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn background(&self) -> Rgba8 {
        self.background
    }

    fn paint(&mut self, rect: Rect, color: Rgba8) {
        let rect = rect.abs();
        if color.a > 0 && rect.area() > 0.0 {
            self.ops.push((rect, color));
        }
    }

    fn paint_background(&mut self, rect: Rect) {
        self.paint(rect, self.background);
    }
}

impl DrawSurface for CpuSurface {
    fn width(&self) -> u32 {
        self.canvas.width
    }

    fn height(&self) -> u32 {
        self.canvas.height
    }

    fn clear(&mut self, region: Rect) {
        let bounds = self.bounds();
        let region = region.intersect(bounds);
        if covers(region, bounds) {
            self.ops.clear();
        } else {
            self.ops = std::mem::take(&mut self.ops)
                .into_iter()
                .flat_map(|(rect, color)| {
                    subtract(rect, region)
                        .into_iter()
                        .flatten()
                        .map(move |piece| (piece, color))
                })
                .collect();
        }
        self.paint_background(region);
    }

    fn save(&mut self) {
        self.stack.push(self.fill);
    }

    fn restore(&mut self) {
        if let Some(fill) = self.stack.pop() {
            self.fill = fill;
        }
    }

    fn set_fill(&mut self, color: Rgba8) {
        self.fill = color;
    }

    fn fill(&self) -> Rgba8 {
        self.fill
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.paint(rect, self.fill);
    }
}

impl Readback for CpuSurface {
    fn readback(&mut self) -> FlickerResult<FrameRGBA> {
        let (w, h) = surface_dims(self.canvas)?;
        self.ctx.reset();
        for (rect, color) in &self.ops {
            self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                color.r, color.g, color.b, color.a,
            ));
            self.ctx
                .fill_rect(&vello_cpu::kurbo::Rect::new(rect.x0, rect.y0, rect.x1, rect.y1));
        }

        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);

        Ok(FrameRGBA {
            width: self.canvas.width,
            height: self.canvas.height,
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

/// `rect` minus `hole`, as up to four non-overlapping pieces (top, bottom, left, right).
fn subtract(rect: Rect, hole: Rect) -> [Option<Rect>; 4] {
    let cut = rect.intersect(hole);
    if cut.area() <= 0.0 {
        return [Some(rect), None, None, None];
    }
    let pieces = [
        Rect::new(rect.x0, rect.y0, rect.x1, cut.y0),
        Rect::new(rect.x0, cut.y1, rect.x1, rect.y1),
        Rect::new(rect.x0, cut.y0, cut.x0, cut.y1),
        Rect::new(cut.x1, cut.y0, rect.x1, cut.y1),
    ];
    pieces.map(|piece| (piece.area() > 0.0).then_some(piece))
}

fn surface_dims(canvas: Canvas) -> FlickerResult<(u16, u16)> {
    let w: u16 = canvas
        .width
        .try_into()
        .map_err(|_| FlickerError::surface("surface width exceeds u16"))?;
    let h: u16 = canvas
        .height
        .try_into()
        .map_err(|_| FlickerError::surface("surface height exceeds u16"))?;
    Ok((w, h))
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
