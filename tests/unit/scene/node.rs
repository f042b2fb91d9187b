use super::*;
use crate::foundation::core::{Canvas, Fps};
use crate::render::recording::RecordingSurface;
use crate::timing::clock::ManualClock;

#[test]
fn default_body_is_unit_sized_and_still() {
    let b = Body::default();
    assert_eq!(b.pos, Point::ORIGIN);
    assert_eq!(b.size, Size::new(1.0, 1.0));
    assert_eq!(b.vel, Vec2::ZERO);
}

#[test]
fn step_adds_velocity_regardless_of_context() {
    let timer = FrameTimer::new(Fps::default(), ManualClock::new());
    let mut small = RecordingSurface::new(Canvas::new(1, 1).unwrap());
    let mut large = RecordingSurface::new(Canvas::new(500, 500).unwrap());

    let mut a = Body::at(10.0, -2.0).with_velocity(3.5, -1.0);
    let mut b = a;

    a.step(&mut FrameCtx {
        surface: &mut small,
        timer: &timer,
        frame: FrameIndex(0),
    });
    b.step(&mut FrameCtx {
        surface: &mut large,
        timer: &timer,
        frame: FrameIndex(99),
    });

    assert_eq!(a.pos, Point::new(13.5, -3.0));
    assert_eq!(a, b);
    assert!(small.commands().is_empty());
}

#[test]
fn advance_accumulates() {
    let mut b = Body::default().with_velocity(2.0, 3.0);
    for _ in 0..4 {
        b.advance();
    }
    assert_eq!(b.pos, Point::new(8.0, 12.0));
}

#[test]
fn rect_spans_size_from_position() {
    let b = Body::at(1.0, 2.0).with_size(4.0, 5.0);
    assert_eq!(b.rect(), Rect::new(1.0, 2.0, 5.0, 7.0));
}

#[test]
fn ctx_exposes_surface_bounds_and_delta() {
    let clock = ManualClock::new();
    let mut timer = FrameTimer::new(Fps::default(), clock.clone());
    clock.advance(Duration::from_millis(9));
    timer.update();
    let mut s = RecordingSurface::new(Canvas::new(300, 200).unwrap());
    let ctx = FrameCtx {
        surface: &mut s,
        timer: &timer,
        frame: FrameIndex(0),
    };
    assert_eq!(ctx.bounds(), Size::new(300.0, 200.0));
    assert_eq!(ctx.delta(), Duration::from_millis(9));
}
