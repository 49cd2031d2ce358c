use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossbeam_channel::bounded;

use driftscope::anim::controller::FrameController;
use driftscope::anim::frame::{Frame, RunState};
use driftscope::core::generate::{generate, reference_periods, GenParams};

fn sample_set() -> Arc<driftscope::core::generate::SampleSet> {
    let params = GenParams {
        sample_count: 40,
        trend_strength: 0.5,
        volatility: 1.0,
        seed: 42,
    };
    Arc::new(generate(&params, &reference_periods()).expect("valid params"))
}

#[test]
fn emits_every_period_in_order_and_completes() {
    let samples = sample_set();
    let (lo, hi) = samples.value_range().expect("non-empty set");
    let mut controller = FrameController::new(Arc::clone(&samples));
    assert_eq!(controller.state(), RunState::Idle);

    controller.start();
    assert_eq!(controller.state(), RunState::Running);

    let mut frames = Vec::new();
    while let Some(frame) = controller.next_frame().expect("run must not fail") {
        frames.push(frame);
    }

    assert_eq!(frames.len(), 6);
    assert_eq!(controller.state(), RunState::Completed);
    assert_eq!(controller.progress(), 1.0);

    for (i, frame) in frames.iter().enumerate() {
        assert_eq!(frame.period, 2010 + i as i32);
        assert_eq!(frame.progress, (i + 1) as f64 / 6.0);
        assert_eq!(frame.status, format!("Showing year: {}", frame.period));
        assert_eq!(frame.sample_count, 40);
        // Axis scaling is fixed once per run, shared by every frame.
        assert_eq!(frame.x_range, (lo - 5.0, hi + 5.0));
    }
}

#[test]
fn finished_controller_stays_quiet_until_restarted() {
    let mut controller = FrameController::new(sample_set());
    controller.start();
    while controller.next_frame().expect("run must not fail").is_some() {}
    assert_eq!(controller.state(), RunState::Completed);

    // Terminal state: no more frames without a new start request.
    assert!(controller.next_frame().expect("no-op").is_none());
    assert_eq!(controller.state(), RunState::Completed);

    controller.start();
    assert_eq!(controller.state(), RunState::Running);
    assert_eq!(controller.position(), 0);
    let first = controller
        .next_frame()
        .expect("run must not fail")
        .expect("restart emits from the first period");
    assert_eq!(first.period, 2010);
}

#[test]
fn paced_run_delivers_all_frames_over_the_channel() {
    let mut controller = FrameController::new(sample_set());
    let (tx, rx) = bounded::<Frame>(1);

    let worker = thread::spawn(move || controller.run_paced(Duration::ZERO, &tx));

    let frames: Vec<Frame> = rx.iter().collect();
    let terminal = worker
        .join()
        .expect("worker must not panic")
        .expect("run must not fail");

    assert_eq!(terminal, RunState::Completed);
    assert_eq!(frames.len(), 6);
    let periods: Vec<i32> = frames.iter().map(|f| f.period).collect();
    assert_eq!(periods, [2010, 2011, 2012, 2013, 2014, 2015]);
}
