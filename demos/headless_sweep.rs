use std::time::Duration;

use gpui_shotplot::{FrameOutcome, FunctionTable, PlotConfig, Plotter, SurfaceSize};

fn main() {
    let function = std::env::args().nth(1).unwrap_or_else(|| "sin(x)".to_string());
    let speed: f64 = std::env::var("SPEED")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(200.0);

    let table = FunctionTable::standard();
    let mut plotter = Plotter::new(PlotConfig::default().with_speed(speed));
    plotter.resize(SurfaceSize::new(800.0, 400.0, 1.0), Duration::ZERO);

    if let Err(err) = plotter.set_function(&function, &table) {
        eprintln!("{err}");
        std::process::exit(1);
    }
    println!(
        "static draw of `{function}`: {} points in {} strokes",
        plotter.sequence().len(),
        plotter.sequence().segment_count()
    );

    let frame = Duration::from_micros(16_667);
    let mut now = Duration::ZERO;
    let Some(mut token) = plotter.shoot(now) else {
        return;
    };
    let mut frames = 0_u32;
    loop {
        now += frame;
        frames += 1;
        if frames == 60 {
            plotter.resize(SurfaceSize::new(1200.0, 600.0, 2.0), now);
            if let Some(resumed) = plotter.active_token() {
                token = resumed;
            }
        }
        match plotter.frame(token, now) {
            FrameOutcome::Continue => {}
            FrameOutcome::Completed | FrameOutcome::Stale => break,
        }
    }

    println!(
        "sweep finished after {frames} frames ({:.2}s): {} points in {} strokes",
        now.as_secs_f64(),
        plotter.sequence().len(),
        plotter.sequence().segment_count()
    );
}
