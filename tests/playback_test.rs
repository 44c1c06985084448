// tests/playback_test.rs
use brownian_play::playback::{
    CallbackQueue, FixedInterval, Phase, PlaybackConfig, PlaybackController, PlaybackState,
    TickSource,
};
use brownian_play::render::{AxisRange, DrawCall, Layers, RecordingSurface, Renderer};
use brownian_play::rng::{self, Scripted};
use brownian_play::{Sample, SimulationParameters};
use std::time::{Duration, Instant};

fn every_frame(
    steps: usize,
    seed: u64,
) -> PlaybackController<rng::BoxMuller<rand::rngs::StdRng>, FixedInterval> {
    let params = SimulationParameters::new(0.1, 1.0, steps, 5.0);
    PlaybackController::with_sources(params, rng::seeded(seed), FixedInterval::every_frame())
        .expect("valid parameters")
}

#[test]
fn test_n_ticks_reveal_min_of_one_plus_n_and_length() {
    for &ticks in &[0usize, 1, 5, 20, 21, 50] {
        let mut player = every_frame(20, 3);
        let now = Instant::now();
        player.start();
        for _ in 0..ticks {
            player.update(now);
        }
        assert_eq!(player.revealed_count(), (1 + ticks).min(21), "after {} ticks", ticks);
        assert_eq!(player.is_running(), 1 + ticks < 21);
        assert_eq!(player.revealed().len(), player.revealed_count());
    }
}

#[test]
fn test_finished_run_schedules_nothing() {
    let mut player = every_frame(5, 1);
    let now = Instant::now();
    player.start();
    while player.is_running() {
        player.update(now);
    }
    assert_eq!(player.phase(), Phase::Finished);
    assert_eq!(player.pending_tick(), None);
    assert!(!player.ticks().is_armed());
    assert!(!player.start());
    assert_eq!(player.current(), *player.path().last().unwrap());
}

#[test]
fn test_pause_right_after_start_reveals_nothing() {
    let mut player = every_frame(10, 2);
    let now = Instant::now();
    player.start();
    player.pause();
    for _ in 0..5 {
        assert_eq!(player.update(now), None);
    }
    assert_eq!(player.state(), PlaybackState { revealed_count: 1, running: false });
}

#[test]
fn test_pause_with_unwithdrawable_host_callbacks() {
    let params = SimulationParameters::default();
    let mut player =
        PlaybackController::with_sources(params, rng::seeded(8), CallbackQueue::new()).unwrap();
    let now = Instant::now();
    player.start();
    player.pause();
    // The host still delivers the cancelled callback.
    assert_eq!(player.update(now), None);
    assert_eq!(player.revealed_count(), 1);
}

#[test]
fn test_reset_restores_initial_state_with_fresh_path() {
    let mut player = every_frame(100, 4);
    let dt = 5.0 / 100.0;
    let now = Instant::now();
    let mut previous: Vec<f64> = player.path().values().collect();

    for cycle in 0..3 {
        player.start();
        for _ in 0..30 + cycle * 20 {
            player.update(now);
        }
        player.reset();

        assert_eq!(player.state(), PlaybackState { revealed_count: 1, running: false });
        assert_eq!(player.phase(), Phase::Stopped);

        let path = player.path();
        assert_eq!(path.len(), 101);
        assert_eq!(path[0], Sample::ORIGIN);
        for (i, sample) in path.samples().iter().enumerate() {
            assert_eq!(sample.time, i as f64 * dt, "cycle {} sample {}", cycle, i);
        }
        assert_eq!(player.value_range(), AxisRange::for_path(path));

        let values: Vec<f64> = path.values().collect();
        assert_ne!(previous, values);
        previous = values;

        // Ticks armed before the reset must not leak into the new run.
        assert_eq!(player.update(now), None);
        assert_eq!(player.revealed_count(), 1);
    }
}

#[test]
fn test_parameter_change_resets() {
    let mut player = every_frame(10, 5);
    let now = Instant::now();
    player.start();
    player.update(now);
    player
        .set_params(SimulationParameters::new(0.0, 2.0, 40, 1.0))
        .unwrap();
    assert_eq!(player.progress(), (1, 41));
    assert!(!player.is_running());
}

#[test]
fn test_ambient_controller_from_config() {
    let config = PlaybackConfig::from_millis(10);
    let mut player = PlaybackController::new(SimulationParameters::default(), &config).unwrap();
    let t0 = Instant::now();
    player.start();
    assert_eq!(player.update(t0), None);
    assert!(player.update(t0 + Duration::from_millis(10)).is_some());
    assert_eq!(player.revealed_count(), 2);
    assert!(PlaybackController::new(SimulationParameters::new(0.0, 1.0, 0, 1.0), &config).is_err());
}

#[test]
fn test_range_scenarios() {
    // Single step with Z = 3 and σ√Δt = 1 gives max |X| = 3.
    let params = SimulationParameters::new(0.0, 1.0, 1, 1.0);
    let mut player = PlaybackController::with_sources(
        params,
        Scripted::new(vec![3.0, -0.1]),
        FixedInterval::every_frame(),
    )
    .unwrap();
    assert!((player.value_range().half_extent() - 3.6).abs() < 1e-12);

    player.reset();
    assert_eq!(player.path().max_abs_value(), 0.1);
    assert_eq!(player.value_range().half_extent(), 0.5);
    assert_eq!(AxisRange::from_max_abs(0.1), player.value_range());
}

#[test]
fn test_axis_does_not_rescale_during_playback() {
    let mut player = every_frame(200, 6);
    let renderer = Renderer {
        layers: Layers::LABELS,
        ..Renderer::default()
    };
    let mut surface = RecordingSurface::new(800.0, 400.0);
    renderer.draw_controller(&mut surface, &player);
    let before = surface.take_calls();

    let now = Instant::now();
    player.start();
    for _ in 0..150 {
        player.update(now);
    }
    renderer.draw_controller(&mut surface, &player);
    assert_eq!(before, surface.calls());
}

#[test]
fn test_render_follows_revealed_prefix() {
    let mut player = every_frame(50, 7);
    let renderer = Renderer::default();
    let mut surface = RecordingSurface::new(800.0, 400.0);
    let now = Instant::now();
    player.start();
    for _ in 0..9 {
        player.update(now);
    }
    renderer.draw_controller(&mut surface, &player);
    let points = surface
        .calls()
        .iter()
        .find_map(|c| match c {
            DrawCall::Polyline { points, .. } => Some(points.len()),
            _ => None,
        })
        .expect("path layer drawn");
    assert_eq!(points, 10);
}

#[test]
fn test_custom_tick_source() {
    /// Fires every second poll.
    struct EveryOther {
        armed: Option<brownian_play::playback::TickId>,
        skip: bool,
    }

    impl TickSource for EveryOther {
        fn arm(&mut self, id: brownian_play::playback::TickId, _since: Option<Instant>) {
            self.armed = Some(id);
        }
        fn disarm(&mut self) {
            self.armed = None;
        }
        fn poll(&mut self, _now: Instant) -> Option<brownian_play::playback::TickId> {
            self.skip = !self.skip;
            if self.skip {
                None
            } else {
                self.armed.take()
            }
        }
    }

    let mut player = PlaybackController::with_sources(
        SimulationParameters::default(),
        rng::seeded(1),
        EveryOther { armed: None, skip: false },
    )
    .unwrap();
    let now = Instant::now();
    player.start();
    for _ in 0..10 {
        player.update(now);
    }
    assert_eq!(player.revealed_count(), 6);
}
