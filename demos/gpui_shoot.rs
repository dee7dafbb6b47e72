use std::time::Duration;

use gpui::{
    AppContext, Application, AsyncWindowContext, Bounds, Timer, WindowBounds, WindowOptions, px,
    size,
};

use gpui_shotplot::{Controls, FunctionTable, GpuiShotView, PlotConfig, Plotter, Theme};

const FUNCTIONS: [&str; 4] = ["sin(x)", "x^3/40", "tan(x)", "sqrt(x)"];

fn main() {
    Application::new().run(|cx| {
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                None,
                size(px(900.0), px(500.0)),
                cx,
            ))),
            ..Default::default()
        };

        cx.open_window(options, |window, cx| {
            let plotter = Plotter::new(PlotConfig::default().with_theme(Theme::dark()));
            let view = GpuiShotView::new(plotter, FunctionTable::standard());
            let handle = view.plotter_handle();
            let view_handle = cx.new(|_| view);

            let view_for_task = view_handle.clone();
            window
                .spawn(cx, move |cx: &mut AsyncWindowContext| {
                    let mut cx = cx.clone();
                    async move {
                        let mut controls = Controls {
                            function: FUNCTIONS[0].to_string(),
                            shoot_trigger: 0,
                            speed_px_per_sec: 250.0,
                        };
                        // The first sync only records the counter.
                        handle.sync_controls(&controls);
                        let mut round = 0_usize;
                        loop {
                            controls.function = FUNCTIONS[round % FUNCTIONS.len()].to_string();
                            controls.shoot_trigger += 1;
                            handle.sync_controls(&controls);
                            cx.update(|_, cx| {
                                view_for_task.update(cx, |_view, view_cx| view_cx.notify());
                            })
                            .ok();
                            round += 1;
                            Timer::after(Duration::from_secs(5)).await;
                        }
                    }
                })
                .detach();

            view_handle
        })
        .unwrap();
    });
}
