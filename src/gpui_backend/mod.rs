//! GPUI integration for gpui_shotplot.
//!
//! This module provides a GPUI view that renders a
//! [`Plotter`](crate::plot::Plotter), keeps it in sync with the size of its
//! canvas, and drives running sweeps one animation frame at a time.

mod paint;
mod view;

pub use view::{GpuiShotView, PlotterHandle};
