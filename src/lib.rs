//! gpui_shotplot plots a function y = f(x) over a fixed window and animates
//! the curve being drawn from left to right.
//! The engine is backend-agnostic; the optional `gpui` feature paints it.

#![forbid(unsafe_code)]

pub mod animation;
pub mod config;
pub mod error;
pub mod eval;
pub mod geom;
#[cfg(feature = "gpui")]
pub mod gpui_backend;
pub mod plot;
pub mod render;
pub mod sample;
pub mod sequence;
pub mod style;
pub mod surface;
pub mod transform;
pub mod view;

pub use animation::{AnimationStatus, Animator, FrameOutcome, FrameParams, SessionToken};
pub use config::{PlotConfig, SampleMode};
pub use error::{AppendError, EvalError, ParseError, PlotError};
pub use eval::{BoxedEvaluator, Compiler, Evaluator, FnEvaluator, FunctionTable};
pub use geom::{Point, ScreenPoint, ScreenRect};
#[cfg(feature = "gpui")]
pub use gpui_backend::{GpuiShotView, PlotterHandle};
pub use plot::{Controls, PlotState, Plotter};
pub use render::{
    Color, LineSegment, LineStyle, RenderCommand, RenderList, StrokeCache, TextStyle,
};
pub use sample::{Sample, classify, probe, sample_range};
pub use sequence::PointSequence;
pub use style::Theme;
pub use surface::SurfaceSize;
pub use transform::Transform;
pub use view::{Range, Viewport};
