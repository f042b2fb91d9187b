use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::foundation::core::{Canvas, Fps, FrameIndex, Point, Rect};
use crate::render::recording::{DrawCmd, RecordingSurface};
use crate::timing::clock::ManualClock;
use crate::timing::timer::FrameTimer;

type Log = Rc<RefCell<Vec<&'static str>>>;

struct Tracer {
    name: &'static str,
    log: Log,
    body: Body,
}

impl Tracer {
    fn new(name: &'static str, log: &Log) -> Self {
        Self {
            name,
            log: Rc::clone(log),
            body: Body::default().with_velocity(1.0, 0.0),
        }
    }
}

impl Step for Tracer {
    fn step(&mut self, ctx: &mut FrameCtx<'_>) {
        self.log.borrow_mut().push(self.name);
        self.body.advance();
        ctx.surface.fill_rect(self.body.rect());
    }

    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }
}

fn step_group(group: &mut NodeGroup) -> RecordingSurface {
    let timer = FrameTimer::new(Fps::default(), ManualClock::new());
    let mut surface = RecordingSurface::new(Canvas::new(10, 10).unwrap());
    group.step(&mut FrameCtx {
        surface: &mut surface,
        timer: &timer,
        frame: FrameIndex(0),
    });
    surface
}

#[test]
fn children_step_in_insertion_order() {
    let log = Log::default();
    let mut g = NodeGroup::new()
        .with_child(Tracer::new("a", &log))
        .with_child(Tracer::new("b", &log))
        .with_child(Tracer::new("c", &log));
    step_group(&mut g);
    assert_eq!(*log.borrow(), ["a", "b", "c"]);
}

#[test]
fn nested_groups_finish_before_next_sibling() {
    let log = Log::default();
    let inner = NodeGroup::new()
        .with_child(Tracer::new("b1", &log))
        .with_child(Tracer::new("b2", &log));
    let mut g = NodeGroup::new()
        .with_child(Tracer::new("a", &log))
        .with_child(inner)
        .with_child(Tracer::new("c", &log));
    step_group(&mut g);
    assert_eq!(*log.borrow(), ["a", "b1", "b2", "c"]);
}

#[test]
fn draws_follow_child_order() {
    let log = Log::default();
    let mut g = NodeGroup::new();
    g.push(Tracer::new("a", &log));
    g.insert(0, Tracer::new("z", &log));
    let surface = step_group(&mut g);
    assert_eq!(*log.borrow(), ["z", "a"]);
    assert_eq!(surface.commands().len(), 2);
    assert!(matches!(surface.commands()[0], DrawCmd::FillRect { .. }));
}

#[test]
fn group_body_stays_put() {
    let mut g = NodeGroup::new();
    g.body = Body::at(5.0, 5.0).with_velocity(3.0, 3.0);
    g.push(Body::default().with_velocity(1.0, 1.0));
    step_group(&mut g);
    assert_eq!(g.body.pos, Point::new(5.0, 5.0));
    assert_eq!(g.children()[0].body().pos, Point::new(1.0, 1.0));
}

#[test]
fn duplicates_are_stepped_each_time() {
    let log = Log::default();
    let mut g = NodeGroup::new();
    g.push(Tracer::new("dup", &log));
    g.push(Tracer::new("dup", &log));
    step_group(&mut g);
    assert_eq!(*log.borrow(), ["dup", "dup"]);
}

#[test]
fn remove_and_clear_edit_the_sequence() {
    let log = Log::default();
    let mut g = NodeGroup::new()
        .with_child(Tracer::new("a", &log))
        .with_child(Tracer::new("b", &log));
    assert!(g.remove(5).is_none());
    let removed = g.remove(0).unwrap();
    assert_eq!(removed.body().rect(), Rect::new(0.0, 0.0, 1.0, 1.0));
    step_group(&mut g);
    assert_eq!(*log.borrow(), ["b"]);

    g.clear();
    assert!(g.is_empty());
    assert_eq!(g.len(), 0);
}

#[test]
fn empty_group_is_a_no_op() {
    let mut g = NodeGroup::new();
    let surface = step_group(&mut g);
    assert!(surface.commands().is_empty());
}

#[test]
fn children_mut_reaches_each_child_in_order() {
    let log = Log::default();
    let mut g = NodeGroup::new()
        .with_child(Tracer::new("a", &log))
        .with_child(Tracer::new("b", &log));
    for (i, child) in g.children_mut().iter_mut().enumerate() {
        child.body_mut().pos = Point::new(i as f64 * 5.0, 0.0);
    }
    assert_eq!(g.children()[1].body().pos, Point::new(5.0, 0.0));

    step_group(&mut g);
    assert_eq!(g.children()[0].body().pos, Point::new(1.0, 0.0));
    assert_eq!(g.children()[1].body().pos, Point::new(6.0, 0.0));
}
