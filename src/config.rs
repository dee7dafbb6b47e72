//! Plot configuration and the fixed plotting constants.

use crate::style::Theme;
use crate::view::Viewport;

/// Left edge of the plotted domain.
pub const X_MIN: f64 = -20.0;
/// Right edge of the plotted domain.
pub const X_MAX: f64 = 20.0;
/// Bottom edge of the plotted range.
pub const Y_MIN: f64 = -10.0;
/// Top edge of the plotted range.
pub const Y_MAX: f64 = 10.0;

/// X step used by [`SampleMode::FullDraw`].
pub const FULL_DRAW_STEP: f64 = 0.1;
/// X step used by [`SampleMode::Continuous`].
pub const CONTINUOUS_STEP: f64 = 0.005;

/// X position a function is validated at before it is drawn.
pub const PROBE_X: f64 = 0.0;

/// Default sweep speed in logical pixels per second.
pub const DEFAULT_SPEED_PX_PER_SEC: f64 = 200.0;

/// Sampling resolution along X.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SampleMode {
    /// Coarse sampling for the static full-range draw.
    #[default]
    FullDraw,
    /// Fine sampling for smooth curves.
    Continuous,
}

impl SampleMode {
    /// X distance between consecutive samples.
    ///
    /// This is also the smallest step an animation frame may advance by.
    pub fn step(self) -> f64 {
        match self {
            Self::FullDraw => FULL_DRAW_STEP,
            Self::Continuous => CONTINUOUS_STEP,
        }
    }
}

/// Configuration for a [`Plotter`](crate::plot::Plotter).
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Mathematical window mapped onto the surface.
    pub viewport: Viewport,
    /// Sampling resolution.
    pub sample_mode: SampleMode,
    /// Initial sweep speed in pixels per second.
    pub speed_px_per_sec: f64,
    /// X position of the validation probe.
    pub probe_x: f64,
    /// Colors and stroke widths.
    pub theme: Theme,
}

impl PlotConfig {
    /// Set the sampling resolution.
    pub fn with_sample_mode(mut self, mode: SampleMode) -> Self {
        self.sample_mode = mode;
        self
    }

    /// Set the initial sweep speed.
    pub fn with_speed(mut self, speed_px_per_sec: f64) -> Self {
        self.speed_px_per_sec = speed_px_per_sec;
        self
    }

    /// Set the theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            sample_mode: SampleMode::default(),
            speed_px_per_sec: DEFAULT_SPEED_PX_PER_SEC,
            probe_x: PROBE_X,
            theme: Theme::default(),
        }
    }
}
