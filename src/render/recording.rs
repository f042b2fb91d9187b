use crate::foundation::core::{Canvas, Rect, Rgba8};
use crate::render::surface::{DrawSurface, covers};

/// One call made against a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    Clear(Rect),
    Save,
    Restore,
    FillRect { rect: Rect, color: Rgba8 },
}

/// Surface that paints nothing and logs every draw call in order.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    canvas: Canvas,
    fill: Rgba8,
    stack: Vec<Rgba8>,
    cmds: Vec<DrawCmd>,
}

impl RecordingSurface {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            fill: Rgba8::BLACK,
            stack: Vec::new(),
            cmds: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCmd] {
        &self.cmds
    }

    /// Rects filled since the last full clear, in paint order.
    pub fn fills_since_clear(&self) -> Vec<Rect> {
        let full = self.bounds();
        let start = self
            .cmds
            .iter()
            .rposition(|c| matches!(c, DrawCmd::Clear(r) if covers(*r, full)))
            .map_or(0, |i| i + 1);
        self.cmds[start..]
            .iter()
            .filter_map(|c| match c {
                DrawCmd::FillRect { rect, .. } => Some(*rect),
                _ => None,
            })
            .collect()
    }

    pub fn save_depth(&self) -> usize {
        self.stack.len()
    }
}

impl DrawSurface for RecordingSurface {
    fn width(&self) -> u32 {
        self.canvas.width
    }

    fn height(&self) -> u32 {
        self.canvas.height
    }

    fn clear(&mut self, region: Rect) {
        self.cmds.push(DrawCmd::Clear(region));
    }

    fn save(&mut self) {
        self.stack.push(self.fill);
        self.cmds.push(DrawCmd::Save);
    }

    fn restore(&mut self) {
        if let Some(fill) = self.stack.pop() {
            self.fill = fill;
            self.cmds.push(DrawCmd::Restore);
        }
    }

    fn set_fill(&mut self, color: Rgba8) {
        self.fill = color;
    }

    fn fill(&self) -> Rgba8 {
        self.fill
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.cmds.push(DrawCmd::FillRect {
            rect,
            color: self.fill,
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/recording.rs"]
mod tests;
