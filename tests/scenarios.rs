use std::f64::consts::FRAC_PI_2;
use std::time::Duration;

use gpui_shotplot::{
    AnimationStatus, FrameOutcome, FunctionTable, PlotConfig, PlotError, PlotState, Plotter,
    Point, PointSequence, RenderCommand, RenderList, SampleMode, StrokeCache, SurfaceSize, Theme,
    Transform, Viewport, render,
};

const FRAME_64: Duration = Duration::from_micros(15_625);
const FRAME_60: Duration = Duration::from_micros(16_667);

fn plotter(width: f32, height: f32) -> Plotter {
    let mut plotter = Plotter::default();
    assert!(plotter.resize(SurfaceSize::new(width, height, 1.0), Duration::ZERO));
    plotter
}

fn run_to_end(plotter: &mut Plotter, mut now: Duration, frame: Duration) -> Duration {
    while plotter.is_animating() {
        now += frame;
        plotter.advance(now);
    }
    now
}

#[test]
fn pixel_roundtrip_for_many_sizes() {
    for (width, height) in [(800.0, 400.0), (333.0, 217.0), (1920.0, 1080.0), (64.0, 48.0)] {
        let transform = Transform::new(Viewport::default(), width, height).expect("transform");
        for i in 0..=80 {
            let x = -20.0 + f64::from(i) * 0.5;
            let point = Point::new(x, x / 2.0);
            let back = transform.to_data(transform.to_pixel(point));
            assert!((back.x - point.x).abs() < 1e-3);
            assert!((back.y - point.y).abs() < 1e-3);
        }
    }
}

#[test]
fn constant_zero_is_one_horizontal_line_at_axis_zero() {
    let table = FunctionTable::standard();
    for (width, height) in [(800.0, 400.0), (333.0, 217.0), (1920.0, 1080.0), (50.0, 30.0)] {
        let mut plotter = plotter(width, height);
        plotter.set_function("0", &table).expect("zero plots");
        let zero_y = plotter.transform().expect("attached").axis_zero().y;
        let lines: Vec<_> = plotter.render_list().polylines().collect();
        assert_eq!(lines.len(), 1, "{width}x{height}");
        assert!(lines[0].len() > 1);
        assert!(lines[0].iter().all(|point| point.y == zero_y));
    }
}

#[test]
fn tangent_never_connects_across_an_asymptote() {
    let mut plotter = plotter(800.0, 400.0);
    plotter
        .set_function("tan(x)", &FunctionTable::standard())
        .expect("tan plots");
    assert!(plotter.sequence().segment_count() > 1);
    for segment in plotter.sequence().segments() {
        let first = segment[0].x;
        let last = segment[segment.len() - 1].x;
        let spans_asymptote = (-13..13)
            .map(|k| (2 * k + 1) as f64 * FRAC_PI_2)
            .any(|asymptote| first < asymptote && asymptote < last);
        assert!(!spans_asymptote, "segment {first}..{last}");
    }
}

#[test]
fn point_count_grows_while_running_and_freezes_after() {
    let mut plotter = plotter(800.0, 400.0);
    plotter
        .set_function("sin(x)", &FunctionTable::standard())
        .expect("sin plots");
    plotter.shoot(Duration::ZERO).expect("sweep starts");

    let mut now = Duration::ZERO;
    let mut last = 0;
    for _ in 0..30 {
        now += FRAME_60;
        assert_eq!(plotter.advance(now), FrameOutcome::Continue);
        assert!(plotter.sequence().len() >= last);
        last = plotter.sequence().len();
    }
    plotter.cancel();
    assert_eq!(plotter.status(), AnimationStatus::Cancelled);
    now += FRAME_60;
    assert_eq!(plotter.advance(now), FrameOutcome::Stale);
    assert_eq!(plotter.sequence().len(), last);

    plotter.shoot(now).expect("sweep restarts");
    let end = run_to_end(&mut plotter, now, FRAME_60);
    let frozen = plotter.sequence().len();
    assert_eq!(plotter.status(), AnimationStatus::Completed);
    assert_eq!(plotter.advance(end + FRAME_60), FrameOutcome::Stale);
    assert_eq!(plotter.sequence().len(), frozen);
}

#[test]
fn redrawing_the_same_sequence_is_idempotent() {
    let transform = Transform::new(Viewport::default(), 640.0, 480.0).expect("transform");
    let mut sequence = PointSequence::new();
    for i in 0..50 {
        let x = -5.0 + f64::from(i) * 0.2;
        sequence.push_point(Point::new(x, x.sin())).unwrap();
        if i == 25 {
            sequence.push_break();
        }
    }
    let theme = Theme::default();
    let mut cache = StrokeCache::new();

    let mut first = RenderList::new();
    render::draw_axes(&transform, &theme, &mut first);
    render::draw_points(&sequence, &mut cache, &transform, &theme, &mut first);

    let mut second = RenderList::new();
    render::draw_axes(&transform, &theme, &mut second);
    render::draw_points(&sequence, &mut cache, &transform, &theme, &mut second);

    let mut fresh = RenderList::new();
    render::draw_axes(&transform, &theme, &mut fresh);
    render::draw_points(&sequence, &mut StrokeCache::new(), &transform, &theme, &mut fresh);

    assert_eq!(first, second);
    assert_eq!(first, fresh);
    assert_eq!(first.polylines().count(), 2);
}

#[test]
fn resize_mid_sweep_resumes_without_a_jump() {
    let table = FunctionTable::standard();
    let mut plotter = plotter(800.0, 400.0);
    plotter.set_function("sin(x)", &table).expect("sin plots");
    let first_token = plotter.shoot(Duration::ZERO).expect("sweep starts");

    let mut now = Duration::ZERO;
    for _ in 0..100 {
        now += FRAME_60;
        plotter.advance(now);
    }
    let before = plotter.sequence().len();
    let resume_x = plotter.sequence().resume_x().expect("sweep in flight");

    assert!(plotter.resize(SurfaceSize::new(1200.0, 600.0, 2.0), now));
    assert_eq!(plotter.sequence().len(), before);
    let resumed_token = plotter.active_token().expect("sweep resumed");
    assert_ne!(first_token, resumed_token);
    assert_eq!(plotter.frame(first_token, now + FRAME_60), FrameOutcome::Stale);

    now += FRAME_60;
    assert_eq!(plotter.advance(now), FrameOutcome::Continue);
    assert_eq!(plotter.sequence().points()[before].x, resume_x);

    run_to_end(&mut plotter, now, FRAME_60);
    let sequence = plotter.sequence();
    assert_eq!(sequence.segment_count(), 1);
    for pair in sequence.points().windows(2) {
        let gap = pair[1].x - pair[0].x;
        assert!(gap > 0.0 && gap < 0.2, "gap {gap} at x = {}", pair[0].x);
    }

    let lines: Vec<_> = plotter.render_list().polylines().collect();
    assert_eq!(lines.len(), 1);
    for pair in lines[0].windows(2) {
        assert!((pair[1].x - pair[0].x).abs() < 6.0);
        assert!((pair[1].y - pair[0].y).abs() < 6.0);
    }
}

#[test]
fn sine_static_draw_is_unbroken() {
    let mut plotter = plotter(800.0, 400.0);
    plotter
        .set_function("sin(x)", &FunctionTable::standard())
        .expect("sin plots");
    assert_eq!(plotter.state(), PlotState::Ready);
    assert_eq!(plotter.sequence().segment_count(), 1);
    assert_eq!(plotter.sequence().points()[0], Point::new(-20.0, (-20.0_f64).sin()));
}

#[test]
fn reciprocal_fails_the_probe_and_draws_no_curve() {
    let mut plotter = plotter(800.0, 400.0);
    let err = plotter
        .set_function("1/x", &FunctionTable::standard())
        .unwrap_err();
    assert!(matches!(err, PlotError::Evaluation(_)));
    assert_eq!(plotter.render_list().polylines().count(), 0);
    let text = plotter.render_list().commands().iter().find_map(|command| match command {
        RenderCommand::Text { text, .. } => Some(text.clone()),
        _ => None,
    });
    assert_eq!(text.as_deref(), Some(err.to_string().as_str()));
}

#[test]
fn sweep_at_200_px_per_second_over_800_px_takes_four_seconds() {
    let mut plotter = plotter(800.0, 400.0);
    plotter.set_speed(200.0);
    plotter
        .set_function("sin(x)", &FunctionTable::standard())
        .expect("sin plots");
    plotter.shoot(Duration::ZERO).expect("sweep starts");

    let mut now = Duration::ZERO;
    loop {
        now += FRAME_64;
        match plotter.advance(now) {
            FrameOutcome::Continue => {}
            FrameOutcome::Completed => break,
            FrameOutcome::Stale => panic!("sweep lost its session"),
        }
    }
    assert_eq!(now, Duration::from_secs(4));
}

#[test]
fn continuous_mode_uses_the_fine_minimum_step() {
    let config = PlotConfig::default()
        .with_sample_mode(SampleMode::Continuous)
        .with_speed(0.0);
    let mut plotter = Plotter::new(config);
    plotter.resize(SurfaceSize::new(800.0, 400.0, 1.0), Duration::ZERO);
    plotter
        .set_function("x", &FunctionTable::standard())
        .expect("x plots");
    // y = x is visible for x in (-10, 10].
    assert_eq!(plotter.sequence().segment_count(), 1);
    assert!((3999..=4001).contains(&plotter.sequence().len()));

    plotter.shoot(Duration::ZERO).expect("sweep starts");
    plotter.advance(FRAME_60);
    plotter.advance(FRAME_60 * 2);
    let points = plotter.sequence().points();
    assert_eq!(points.len(), 0);
    let resume = plotter.sequence().resume_x().expect("sweep in flight");
    assert!((resume - (-20.0 + 2.0 * 0.005)).abs() < 1e-12);
}
