use std::time::Duration;

use crate::foundation::core::{FrameIndex, Point, Rect, Size, Vec2};
use crate::render::surface::DrawSurface;
use crate::timing::timer::FrameTimer;

/// Per-frame context handed down the node tree.
pub struct FrameCtx<'a> {
    pub surface: &'a mut dyn DrawSurface,
    pub timer: &'a FrameTimer,
    pub frame: FrameIndex,
}

impl FrameCtx<'_> {
    /// Real time elapsed between this frame's timer update and the previous one.
    pub fn delta(&self) -> Duration {
        self.timer.delta()
    }

    pub fn bounds(&self) -> Size {
        self.surface.bounds().size()
    }
}

/// Anything the frame loop can advance by one step.
///
/// Implementors override velocity first (if they react to their surroundings), then apply the
/// base motion with [`Body::advance`], then draw.
pub trait Step {
    fn step(&mut self, ctx: &mut FrameCtx<'_>);

    fn body(&self) -> &Body;

    fn body_mut(&mut self) -> &mut Body;

    /// Owned child nodes, in update order.
    fn children(&self) -> &[Box<dyn Step>] {
        &[]
    }
}

/// Positioned, sized, moving entity. The base node of the scene tree.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    pub pos: Point,
    pub size: Size,
    pub vel: Vec2,
}

impl Default for Body {
    fn default() -> Self {
        Self {
            pos: Point::ORIGIN,
            size: Size::new(1.0, 1.0),
            vel: Vec2::ZERO,
        }
    }
}

impl Body {
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            pos: Point::new(x, y),
            ..Self::default()
        }
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.size = Size::new(width, height);
        self
    }

    pub fn with_velocity(mut self, vx: f64, vy: f64) -> Self {
        self.vel = Vec2::new(vx, vy);
        self
    }

    /// One step of motion: position += velocity.
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.pos, self.size)
    }
}

impl Step for Body {
    fn step(&mut self, _ctx: &mut FrameCtx<'_>) {
        self.advance();
    }

    fn body(&self) -> &Body {
        self
    }

    fn body_mut(&mut self) -> &mut Body {
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/node.rs"]
mod tests;
