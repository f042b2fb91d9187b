use crate::foundation::core::{Rgba8, Size};
use crate::scene::node::{Body, FrameCtx, Step};

/// A filled rectangle that reflects off the edges of `bounds`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bouncer {
    pub body: Body,
    pub bounds: Size,
    pub color: Rgba8,
}

impl Bouncer {
    pub fn new(body: Body, bounds: Size) -> Self {
        Self {
            body,
            bounds,
            color: Rgba8::BLACK,
        }
    }

    pub fn with_color(mut self, color: Rgba8) -> Self {
        self.color = color;
        self
    }

    /// Point velocity back inside `[0, width] x [0, height]`.
    ///
    /// Per axis the lower bound wins: a position past both edges only takes the lower branch.
    pub fn reflect(&mut self) {
        let Body { pos, vel, .. } = &mut self.body;

        if pos.x < 0.0 {
            vel.x = vel.x.abs();
        } else if pos.x > self.bounds.width {
            vel.x = -vel.x.abs();
        }

        if pos.y < 0.0 {
            vel.y = vel.y.abs();
        } else if pos.y > self.bounds.height {
            vel.y = -vel.y.abs();
        }
    }
}

impl Step for Bouncer {
    fn step(&mut self, ctx: &mut FrameCtx<'_>) {
        self.reflect();
        self.body.advance();

        ctx.surface.set_fill(self.color);
        ctx.surface.fill_rect(self.body.rect());
    }

    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/bouncer.rs"]
mod tests;
