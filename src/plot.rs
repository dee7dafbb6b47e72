//! Plot session entry point.
//!
//! A [`Plotter`] owns everything one plotted function needs: the compiled
//! evaluator, the point sequence, the animation state machine and the
//! coordinate transform for the current surface size. Hosts feed it function
//! text, shoot signals, frame timestamps and resize events, and paint the
//! [`RenderList`] it keeps up to date.

use std::time::Duration;

use log::{debug, warn};

use crate::animation::{AnimationStatus, Animator, FrameOutcome, FrameParams, SessionToken};
use crate::config::PlotConfig;
use crate::error::PlotError;
use crate::eval::{BoxedEvaluator, Compiler};
use crate::geom::ScreenRect;
use crate::render::{
    RenderCommand, RenderList, StrokeCache, draw_axes, draw_error, draw_points,
};
use crate::sample::{probe, sample_range};
use crate::sequence::PointSequence;
use crate::surface::SurfaceSize;
use crate::transform::Transform;

/// Values collected by the host's controls.
#[derive(Debug, Clone, PartialEq)]
pub struct Controls {
    /// Function text, for example `"sin(x)"`.
    pub function: String,
    /// Counter bumped by the host every time the user asks for a new sweep.
    pub shoot_trigger: u64,
    /// Sweep speed in pixels per second.
    pub speed_px_per_sec: f64,
}

/// Where the current plot attempt stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotState {
    /// No function was supplied yet.
    Empty,
    /// The function compiled and passed the probe.
    Ready,
    /// The function failed to compile or failed the probe.
    Failed,
}

/// One plotted function on one surface.
pub struct Plotter {
    config: PlotConfig,
    function: Option<String>,
    evaluator: Option<BoxedEvaluator>,
    error: Option<PlotError>,
    sequence: PointSequence,
    animator: Animator,
    speed_px_per_sec: f64,
    surface: Option<SurfaceSize>,
    transform: Option<Transform>,
    cache: StrokeCache,
    render: RenderList,
    last_trigger: Option<u64>,
    pending_full_draw: bool,
}

impl Plotter {
    /// Create a plotter with the given configuration.
    pub fn new(config: PlotConfig) -> Self {
        let speed_px_per_sec = config.speed_px_per_sec;
        Self {
            config,
            function: None,
            evaluator: None,
            error: None,
            sequence: PointSequence::new(),
            animator: Animator::new(),
            speed_px_per_sec,
            surface: None,
            transform: None,
            cache: StrokeCache::new(),
            render: RenderList::new(),
            last_trigger: None,
            pending_full_draw: false,
        }
    }

    /// Access the configuration.
    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    /// Current function text.
    pub fn function(&self) -> Option<&str> {
        self.function.as_deref()
    }

    /// Current plot state.
    pub fn state(&self) -> PlotState {
        match (&self.error, &self.evaluator) {
            (Some(_), _) => PlotState::Failed,
            (None, Some(_)) => PlotState::Ready,
            (None, None) => PlotState::Empty,
        }
    }

    /// The error replacing the plot, if any.
    pub fn error(&self) -> Option<&PlotError> {
        self.error.as_ref()
    }

    /// Points drawn so far.
    pub fn sequence(&self) -> &PointSequence {
        &self.sequence
    }

    /// Animation status.
    pub fn status(&self) -> AnimationStatus {
        self.animator.status()
    }

    /// Whether a sweep is in flight.
    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    /// Token of the running sweep.
    pub fn active_token(&self) -> Option<SessionToken> {
        self.animator.active_token()
    }

    /// Transform for the current surface, once attached.
    pub fn transform(&self) -> Option<&Transform> {
        self.transform.as_ref()
    }

    /// Current surface size, once attached.
    pub fn surface(&self) -> Option<SurfaceSize> {
        self.surface
    }

    /// Sweep speed in pixels per second.
    pub fn speed(&self) -> f64 {
        self.speed_px_per_sec
    }

    /// Set the sweep speed. Applies to the running sweep from its next frame.
    pub fn set_speed(&mut self, speed_px_per_sec: f64) {
        if speed_px_per_sec.is_finite() {
            self.speed_px_per_sec = speed_px_per_sec.max(0.0);
        }
    }

    /// The latest frame description.
    pub fn render_list(&self) -> &RenderList {
        &self.render
    }

    /// Replace the plotted function.
    ///
    /// Any sweep is cancelled and drawn points are dropped. The new function
    /// is compiled and probed once; on success the whole domain is drawn at
    /// once, on failure the error replaces the plot until the next change.
    pub fn set_function<C>(&mut self, source: &str, compiler: &C) -> Result<(), PlotError>
    where
        C: Compiler + ?Sized,
    {
        self.animator.reset();
        self.sequence.clear();
        self.evaluator = None;
        self.error = None;
        self.pending_full_draw = false;
        self.function = Some(source.to_string());

        let result = compiler
            .compile(source)
            .map_err(PlotError::from)
            .and_then(|evaluator| {
                probe(&*evaluator, self.config.probe_x)?;
                Ok(evaluator)
            });

        match result {
            Ok(evaluator) => {
                debug!("plotting `{source}`");
                self.evaluator = Some(evaluator);
                self.pending_full_draw = true;
                self.full_draw();
                self.redraw();
                Ok(())
            }
            Err(err) => {
                warn!("cannot plot `{source}`: {err}");
                self.error = Some(err.clone());
                self.redraw();
                Err(err)
            }
        }
    }

    /// Start a new sweep from the left edge of the domain.
    ///
    /// Returns the token the host passes to [`Plotter::frame`], or `None`
    /// when there is no usable function.
    pub fn shoot(&mut self, now: Duration) -> Option<SessionToken> {
        if self.evaluator.is_none() {
            debug!("shoot ignored: no usable function");
            return None;
        }
        self.sequence.clear();
        self.pending_full_draw = false;
        let token = self.animator.start(self.config.viewport.x.min, now);
        self.redraw();
        Some(token)
    }

    /// Stop the running sweep, keeping what was drawn.
    pub fn cancel(&mut self) {
        self.animator.cancel();
    }

    /// Advance the sweep identified by `token` to frame time `now`.
    pub fn frame(&mut self, token: SessionToken, now: Duration) -> FrameOutcome {
        let (Some(evaluator), Some(transform)) = (self.evaluator.as_ref(), self.transform.as_ref())
        else {
            return FrameOutcome::Stale;
        };
        let params = FrameParams {
            evaluator: &**evaluator,
            transform,
            min_step: self.config.sample_mode.step(),
            speed_px_per_sec: self.speed_px_per_sec,
        };
        let outcome = self.animator.frame(token, now, params, &mut self.sequence);
        if outcome != FrameOutcome::Stale {
            self.redraw();
        }
        outcome
    }

    /// Advance whichever sweep is running.
    pub fn advance(&mut self, now: Duration) -> FrameOutcome {
        match self.animator.active_token() {
            Some(token) => self.frame(token, now),
            None => FrameOutcome::Stale,
        }
    }

    /// React to a new surface size.
    ///
    /// Rescales the transform and redraws the existing points. A running
    /// sweep restarts from where it stopped without dropping points. Returns
    /// `false` when the size is empty or unchanged.
    pub fn resize(&mut self, size: SurfaceSize, now: Duration) -> bool {
        if size.is_empty() || !size.differs_from(self.surface) {
            return false;
        }
        let was_running = self.animator.is_running();
        self.animator.cancel();

        self.surface = Some(size);
        self.transform = Transform::new(self.config.viewport, size.width, size.height);
        self.cache.invalidate();
        debug!(
            "surface resized to {}x{} @{}x",
            size.width, size.height, size.scale_factor
        );

        if self.pending_full_draw {
            self.full_draw();
        }
        if was_running {
            let resume_x = self
                .sequence
                .resume_x()
                .or_else(|| self.animator.current_x())
                .unwrap_or(self.config.viewport.x.min);
            debug!("resuming sweep at x = {resume_x}");
            self.animator.start(resume_x, now);
        }
        self.redraw();
        true
    }

    /// Apply the host's control values.
    ///
    /// Changed function text is recompiled, speed is applied as is, and any
    /// change of the shoot counter starts a new sweep. The first call only
    /// records the counter. Returns the token of a sweep started here.
    pub fn sync_controls<C>(
        &mut self,
        controls: &Controls,
        compiler: &C,
        now: Duration,
    ) -> Option<SessionToken>
    where
        C: Compiler + ?Sized,
    {
        if self.function.as_deref() != Some(controls.function.as_str()) {
            // The error is kept in the plot state and rendered.
            let _ = self.set_function(&controls.function, compiler);
        }
        self.set_speed(controls.speed_px_per_sec);

        let previous = self.last_trigger.replace(controls.shoot_trigger);
        match previous {
            Some(previous) if previous != controls.shoot_trigger => self.shoot(now),
            _ => None,
        }
    }

    fn full_draw(&mut self) {
        let (Some(evaluator), Some(transform)) = (self.evaluator.as_ref(), self.transform.as_ref())
        else {
            return;
        };
        self.sequence.clear();
        let step = self.config.sample_mode.step();
        let appended = sample_range(&**evaluator, transform, step, &mut self.sequence);
        self.pending_full_draw = false;
        debug!(
            "full draw: {appended} points in {} strokes",
            self.sequence.segment_count()
        );
    }

    fn redraw(&mut self) {
        self.render.clear();
        let theme = &self.config.theme;
        if let Some(error) = &self.error {
            let surface = self
                .surface
                .map(|size| ScreenRect::from_size(size.width, size.height))
                .unwrap_or_else(|| ScreenRect::from_size(0.0, 0.0));
            draw_error(&error.to_string(), surface, theme, &mut self.render);
            return;
        }
        let Some(transform) = self.transform.as_ref() else {
            return;
        };
        self.render.push(RenderCommand::Clear(theme.background));
        draw_axes(transform, theme, &mut self.render);
        draw_points(
            &self.sequence,
            &mut self.cache,
            transform,
            theme,
            &mut self.render,
        );
    }
}

impl Default for Plotter {
    fn default() -> Self {
        Self::new(PlotConfig::default())
    }
}

impl std::fmt::Debug for Plotter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Plotter")
            .field("function", &self.function)
            .field("state", &self.state())
            .field("status", &self.status())
            .field("points", &self.sequence.len())
            .field("surface", &self.surface)
            .finish()
    }
}
