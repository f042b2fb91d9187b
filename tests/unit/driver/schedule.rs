use std::time::Duration;

use super::*;
use crate::driver::scene::{RunOpts, Scene, StopReason};
use crate::driver::settings::SceneSettings;
use crate::encode::sink::InMemorySink;
use crate::foundation::core::{Canvas, Fps, FrameIndex, Rgba8};
use crate::render::cpu::CpuSurface;
use crate::render::recording::RecordingSurface;
use crate::scene::demo;
use crate::timing::clock::ManualClock;

fn report(frame: u64) -> FrameReport {
    FrameReport {
        frame: FrameIndex(frame),
        delta: Duration::ZERO,
    }
}

#[test]
fn unpaced_never_sleeps() {
    let clock = ManualClock::new();
    let timer = FrameTimer::new(Fps::default(), clock.clone());
    let mut surface = RecordingSurface::new(Canvas::new(4, 4).unwrap());
    let flow = Unpaced
        .schedule(&report(0), &mut surface, &timer)
        .unwrap();
    assert!(flow.is_continue());
    assert_eq!(clock.slept(), Duration::ZERO);
}

#[test]
fn paced_sleeps_the_remaining_budget() {
    let clock = ManualClock::new();
    let timer = FrameTimer::new(Fps::whole(50).unwrap(), clock.clone());
    clock.advance(Duration::from_millis(5));
    let mut surface = RecordingSurface::new(Canvas::new(4, 4).unwrap());
    Paced.schedule(&report(0), &mut surface, &timer).unwrap();
    assert_eq!(clock.slept(), Duration::from_millis(15));
}

#[test]
fn sink_scheduler_captures_every_frame() {
    let settings = SceneSettings {
        canvas: Canvas::new(40, 30).unwrap(),
        ..SceneSettings::default()
    };
    let canvas = settings.canvas;
    let mut scene = Scene::cpu(&settings, ManualClock::new()).unwrap();
    scene.root_mut().push(demo::bouncing_pixel(canvas));

    let mut scheduler = SinkScheduler::new(InMemorySink::new());
    let stats = scene.run(&mut scheduler, RunOpts::frames(3)).unwrap();
    assert_eq!(stats.reason, StopReason::MaxFrames);

    let sink = scheduler.into_sink();
    assert!(sink.is_ended());
    let cfg = sink.config().unwrap();
    assert_eq!((cfg.width, cfg.height), (40, 30));
    assert_eq!(cfg.fps, Fps::default());

    let frames = sink.frames();
    assert_eq!(frames.len(), 3);
    assert_eq!(frames[2].0, FrameIndex(2));
    // After three steps the 4x4 pixel sits at (12, 18).
    let last = &frames[2].1;
    assert_eq!(last.pixel(13, 19), Some([0, 0, 0, 255]));
    assert_eq!(last.pixel(1, 1), Some([255, 255, 255, 255]));
}

#[test]
fn paced_sink_scheduler_ticks_after_push() {
    let clock = ManualClock::new();
    let mut scene = Scene::new(
        CpuSurface::new(Canvas::new(8, 8).unwrap(), Rgba8::WHITE).unwrap(),
        FrameTimer::new(Fps::default(), clock.clone()),
    );
    let mut scheduler = SinkScheduler::new(InMemorySink::new()).paced(true);
    scene.run(&mut scheduler, RunOpts::frames(2)).unwrap();
    assert_eq!(clock.slept(), Duration::from_millis(32));
    assert_eq!(scheduler.sink().frames().len(), 2);
}

#[test]
fn finish_without_frames_does_not_end_the_sink() {
    let mut scheduler = SinkScheduler::new(InMemorySink::new());
    FrameScheduler::<CpuSurface>::finish(&mut scheduler).unwrap();
    assert!(!scheduler.sink().is_ended());
}
