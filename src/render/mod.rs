//! Rendering primitives.
//!
//! These types are backend-agnostic: the renderer describes a frame as a
//! [`RenderList`] and a backend (such as the GPUI backend) paints it.

mod stroke;

pub use stroke::{RenderCacheKey, StrokeCache};

use std::sync::Arc;

use crate::geom::{ScreenPoint, ScreenRect};
use crate::sequence::PointSequence;
use crate::style::Theme;
use crate::transform::Transform;

/// RGBA color in linear space.
///
/// All components are expected to be in the 0.0..=1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Create a new color.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from 8-bit channels.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
    }

    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
}

/// Line stroke styling.
///
/// The width is expressed in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f32,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

/// Text styling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Text color.
    pub color: Color,
    /// Font size in pixels.
    pub size: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            size: 12.0,
        }
    }
}

/// A line segment in screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    /// Segment start.
    pub start: ScreenPoint,
    /// Segment end.
    pub end: ScreenPoint,
}

impl LineSegment {
    /// Create a new line segment.
    pub fn new(start: ScreenPoint, end: ScreenPoint) -> Self {
        Self { start, end }
    }
}

/// A single drawing instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Fill the whole surface.
    Clear(Color),
    /// Draw independent line segments.
    LineSegments {
        /// Segments to draw.
        segments: Vec<LineSegment>,
        /// Styling for the segments.
        style: LineStyle,
    },
    /// Draw one connected stroke through the points, in order.
    Polyline {
        /// Stroke vertices, shared with the stroke cache.
        points: Arc<[ScreenPoint]>,
        /// Stroke styling.
        style: LineStyle,
    },
    /// Draw a line of text centered on `center`.
    Text {
        /// Center of the laid-out text.
        center: ScreenPoint,
        /// Text content.
        text: String,
        /// Text styling.
        style: TextStyle,
    },
}

/// Aggregated render commands for one frame.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RenderList {
    commands: Vec<RenderCommand>,
}

impl RenderList {
    /// Create an empty render list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a render command.
    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    /// Drop all commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Access all render commands.
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Polylines in the list, in drawing order.
    pub fn polylines(&self) -> impl Iterator<Item = &[ScreenPoint]> {
        self.commands.iter().filter_map(|command| match command {
            RenderCommand::Polyline { points, .. } => Some(&points[..]),
            _ => None,
        })
    }
}

/// Draw the two reference axes through the data origin.
pub fn draw_axes(transform: &Transform, theme: &Theme, out: &mut RenderList) {
    let zero = transform.axis_zero();
    let width = transform.width();
    let height = transform.height();
    out.push(RenderCommand::LineSegments {
        segments: vec![
            LineSegment::new(ScreenPoint::new(0.0, zero.y), ScreenPoint::new(width, zero.y)),
            LineSegment::new(ScreenPoint::new(zero.x, 0.0), ScreenPoint::new(zero.x, height)),
        ],
        style: theme.axis,
    });
}

/// Draw every stroke of `sequence` as its own polyline.
///
/// Points are projected through `cache`, which only touches points appended
/// since the previous call unless the transform or the sequence was reset.
pub fn draw_points(
    sequence: &PointSequence,
    cache: &mut StrokeCache,
    transform: &Transform,
    theme: &Theme,
    out: &mut RenderList,
) {
    cache.update(sequence, transform);
    for stroke in cache.strokes() {
        out.push(RenderCommand::Polyline {
            points: Arc::clone(stroke),
            style: theme.curve,
        });
    }
}

/// Replace the frame with a centered message.
pub fn draw_error(message: &str, surface: ScreenRect, theme: &Theme, out: &mut RenderList) {
    out.clear();
    out.push(RenderCommand::Clear(theme.background));
    out.push(RenderCommand::Text {
        center: surface.center(),
        text: message.to_string(),
        style: theme.error_text,
    });
}
