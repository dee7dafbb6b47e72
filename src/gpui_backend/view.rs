use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use gpui::prelude::*;
use gpui::{Window, canvas, div};

use crate::animation::{FrameOutcome, SessionToken};
use crate::eval::Compiler;
use crate::plot::{Controls, Plotter};
use crate::surface::SurfaceSize;

use super::paint::{PaintFrame, paint_frame, to_hsla};

type SharedCompiler = Arc<dyn Compiler + Send + Sync>;

/// A GPUI view that renders a [`Plotter`] and animates its sweeps.
///
/// Every paint measures the canvas, resyncs the plotter on size changes and,
/// while a sweep is running, advances it by one frame and requests the next.
#[derive(Clone)]
pub struct GpuiShotView {
    plotter: Arc<RwLock<Plotter>>,
    compiler: SharedCompiler,
    epoch: Instant,
}

impl GpuiShotView {
    /// Create a view for `plotter`, compiling function text with `compiler`.
    pub fn new(plotter: Plotter, compiler: impl Compiler + Send + Sync + 'static) -> Self {
        Self {
            plotter: Arc::new(RwLock::new(plotter)),
            compiler: Arc::new(compiler),
            epoch: Instant::now(),
        }
    }

    /// Get a handle for driving the underlying plotter from the host.
    pub fn plotter_handle(&self) -> PlotterHandle {
        PlotterHandle {
            plotter: Arc::clone(&self.plotter),
            compiler: Arc::clone(&self.compiler),
            epoch: self.epoch,
        }
    }
}

impl Render for GpuiShotView {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let plotter = Arc::clone(&self.plotter);
        let epoch = self.epoch;
        let background = plotter
            .read()
            .expect("plotter lock")
            .config()
            .theme
            .background;

        div().size_full().bg(to_hsla(background)).child(
            canvas(
                move |bounds, window, _| {
                    let now = epoch.elapsed();
                    let mut plotter = plotter.write().expect("plotter lock");
                    let size = SurfaceSize::new(
                        f32::from(bounds.size.width),
                        f32::from(bounds.size.height),
                        window.scale_factor(),
                    );
                    plotter.resize(size, now);
                    if plotter.is_animating() && plotter.advance(now) == FrameOutcome::Continue {
                        window.request_animation_frame();
                    }
                    PaintFrame {
                        bounds,
                        render: plotter.render_list().clone(),
                    }
                },
                move |_, frame, window, cx| {
                    paint_frame(&frame, window, cx);
                },
            )
            .size_full(),
        )
    }
}

/// A handle for driving a [`Plotter`] held inside a `GpuiShotView`.
///
/// The handle clones cheaply. After changing the plotter, notify the view so
/// it repaints and picks up a started sweep.
#[derive(Clone)]
pub struct PlotterHandle {
    plotter: Arc<RwLock<Plotter>>,
    compiler: SharedCompiler,
    epoch: Instant,
}

impl PlotterHandle {
    /// Apply the host's control values.
    pub fn sync_controls(&self, controls: &Controls) -> Option<SessionToken> {
        let now = self.now();
        let mut plotter = self.plotter.write().expect("plotter lock");
        plotter.sync_controls(controls, self.compiler.as_ref(), now)
    }

    /// Start a new sweep.
    pub fn shoot(&self) -> Option<SessionToken> {
        let now = self.now();
        self.plotter.write().expect("plotter lock").shoot(now)
    }

    /// Read the plotter state.
    ///
    /// The plotter is locked for the duration of the callback.
    pub fn read<R>(&self, f: impl FnOnce(&Plotter) -> R) -> R {
        let plotter = self.plotter.read().expect("plotter lock");
        f(&plotter)
    }

    /// Mutate the plotter state.
    ///
    /// The plotter is locked for the duration of the callback.
    pub fn write<R>(&self, f: impl FnOnce(&mut Plotter) -> R) -> R {
        let mut plotter = self.plotter.write().expect("plotter lock");
        f(&mut plotter)
    }

    fn now(&self) -> Duration {
        self.epoch.elapsed()
    }
}
