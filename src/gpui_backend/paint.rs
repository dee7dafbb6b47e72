use gpui::{
    App, BorderStyle, Bounds, Corners, Edges, PathBuilder, Pixels, TextRun, Window, font, point,
    px, quad,
};

use crate::geom::ScreenPoint;
use crate::render::{Color, LineSegment, LineStyle, RenderCommand, RenderList, TextStyle};

/// A frame ready to paint at a canvas position.
#[derive(Debug, Clone)]
pub(crate) struct PaintFrame {
    pub(crate) bounds: Bounds<Pixels>,
    pub(crate) render: RenderList,
}

pub(crate) fn paint_frame(frame: &PaintFrame, window: &mut Window, cx: &mut App) {
    let origin = ScreenPoint::new(
        f32::from(frame.bounds.origin.x),
        f32::from(frame.bounds.origin.y),
    );
    for command in frame.render.commands() {
        match command {
            RenderCommand::Clear(color) => {
                window.paint_quad(quad(
                    frame.bounds,
                    Corners::all(px(0.0)),
                    to_rgba(*color),
                    Edges::all(px(0.0)),
                    to_rgba(*color),
                    BorderStyle::default(),
                ));
            }
            RenderCommand::LineSegments { segments, style } => {
                paint_lines(window, origin, segments, *style);
            }
            RenderCommand::Polyline { points, style } => {
                paint_polyline(window, origin, points, *style);
            }
            RenderCommand::Text {
                center,
                text,
                style,
            } => {
                paint_text(window, cx, offset(origin, *center), text, style);
            }
        }
    }
}

fn paint_lines(
    window: &mut Window,
    origin: ScreenPoint,
    segments: &[LineSegment],
    style: LineStyle,
) {
    if segments.is_empty() {
        return;
    }
    let mut builder = PathBuilder::stroke(px(style.width.max(0.5)));
    for segment in segments {
        builder.move_to(to_point(offset(origin, segment.start)));
        builder.line_to(to_point(offset(origin, segment.end)));
    }
    if let Ok(path) = builder.build() {
        window.paint_path(path, to_rgba(style.color));
    }
}

fn paint_polyline(
    window: &mut Window,
    origin: ScreenPoint,
    points: &[ScreenPoint],
    style: LineStyle,
) {
    let [first, rest @ ..] = points else {
        return;
    };
    if rest.is_empty() {
        return;
    }
    let mut builder = PathBuilder::stroke(px(style.width.max(0.5)));
    builder.move_to(to_point(offset(origin, *first)));
    for pt in rest {
        builder.line_to(to_point(offset(origin, *pt)));
    }
    if let Ok(path) = builder.build() {
        window.paint_path(path, to_rgba(style.color));
    }
}

fn paint_text(
    window: &mut Window,
    cx: &mut App,
    center: ScreenPoint,
    text: &str,
    style: &TextStyle,
) {
    if text.is_empty() {
        return;
    }
    let run = TextRun {
        len: text.len(),
        font: font(".SystemUIFont"),
        color: to_hsla(style.color),
        background_color: None,
        underline: None,
        strikethrough: None,
    };
    let shaped = window
        .text_system()
        .shape_line(text.to_string().into(), px(style.size), &[run], None);
    let line_height = shaped.ascent + shaped.descent;
    let top_left = ScreenPoint::new(
        center.x - f32::from(shaped.width) * 0.5,
        center.y - f32::from(line_height) * 0.5,
    );
    let _ = shaped.paint(to_point(top_left), line_height, window, cx);
}

fn offset(origin: ScreenPoint, point: ScreenPoint) -> ScreenPoint {
    ScreenPoint::new(origin.x + point.x, origin.y + point.y)
}

fn to_point(screen: ScreenPoint) -> gpui::Point<Pixels> {
    point(px(screen.x), px(screen.y))
}

fn to_rgba(color: Color) -> gpui::Rgba {
    gpui::Rgba {
        r: color.r,
        g: color.g,
        b: color.b,
        a: color.a,
    }
}

pub(crate) fn to_hsla(color: Color) -> gpui::Hsla {
    gpui::Hsla::from(to_rgba(color))
}
