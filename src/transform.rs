//! Coordinate transforms between data and screen space.

use crate::geom::{Point, ScreenPoint};
use crate::view::Viewport;

/// Affine transform from the data window onto a surface of the given size.
///
/// The Y axis is flipped: pixel rows grow downward while data Y grows upward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    viewport: Viewport,
    width: f64,
    height: f64,
}

impl Transform {
    /// Create a transform for the given viewport and surface size.
    ///
    /// Returns `None` for a degenerate viewport or an empty surface.
    pub fn new(viewport: Viewport, width: f32, height: f32) -> Option<Self> {
        if !viewport.is_valid() || !(width > 0.0 && height > 0.0) {
            return None;
        }
        if !width.is_finite() || !height.is_finite() {
            return None;
        }
        Some(Self {
            viewport,
            width: f64::from(width),
            height: f64::from(height),
        })
    }

    /// Access the viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Surface width in pixels.
    pub fn width(&self) -> f32 {
        self.width as f32
    }

    /// Surface height in pixels.
    pub fn height(&self) -> f32 {
        self.height as f32
    }

    /// Map a data point into screen space.
    pub fn to_pixel(&self, point: Point) -> ScreenPoint {
        let (px, py) = self.project(point);
        ScreenPoint::new(px as f32, py as f32)
    }

    /// Map a screen point back into data space.
    pub fn to_data(&self, point: ScreenPoint) -> Point {
        let x_norm = f64::from(point.x) / self.width;
        let y_norm = f64::from(point.y) / self.height;
        Point::new(
            self.viewport.x.min + x_norm * self.viewport.x.span(),
            self.viewport.y.max - y_norm * self.viewport.y.span(),
        )
    }

    /// Pixel position of the data origin, where the two axes cross.
    pub fn axis_zero(&self) -> ScreenPoint {
        let px = -self.viewport.x.min / self.viewport.x.span() * self.width;
        let py = self.viewport.y.max / self.viewport.y.span() * self.height;
        ScreenPoint::new(px as f32, py as f32)
    }

    /// Whether a data point projects inside the surface.
    ///
    /// The right and bottom edges are excluded: a point landing exactly on
    /// `width` or `height` is out of view.
    pub fn contains(&self, point: Point) -> bool {
        let (px, py) = self.project(point);
        (0.0..self.width).contains(&px) && (0.0..self.height).contains(&py)
    }

    /// Data distance along X covered by `pixels` screen pixels.
    pub fn x_step_for_pixels(&self, pixels: f64) -> f64 {
        self.viewport.x.span() * pixels / self.width
    }

    fn project(&self, point: Point) -> (f64, f64) {
        let x = &self.viewport.x;
        let y = &self.viewport.y;
        let px = (point.x - x.min) / x.span() * self.width;
        let py = (y.max - point.y) / y.span() * self.height;
        (px, py)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::Range;

    fn transform(width: f32, height: f32) -> Transform {
        Transform::new(Viewport::default(), width, height).expect("valid transform")
    }

    #[test]
    fn roundtrip_across_domain() {
        let transform = transform(800.0, 400.0);
        let mut x = -20.0;
        while x <= 20.0 {
            for y in [-10.0, -3.25, 0.0, 7.5, 10.0] {
                let point = Point::new(x, y);
                let back = transform.to_data(transform.to_pixel(point));
                assert!((back.x - point.x).abs() < 1e-3, "x {x}");
                assert!((back.y - point.y).abs() < 1e-3, "y {y}");
            }
            x += 0.25;
        }
    }

    #[test]
    fn corners_and_origin() {
        let transform = transform(800.0, 400.0);
        assert_eq!(
            transform.to_pixel(Point::new(-20.0, 10.0)),
            ScreenPoint::new(0.0, 0.0)
        );
        assert_eq!(
            transform.to_pixel(Point::new(20.0, -10.0)),
            ScreenPoint::new(800.0, 400.0)
        );
        assert_eq!(transform.axis_zero(), ScreenPoint::new(400.0, 200.0));
        assert_eq!(transform.to_pixel(Point::new(0.0, 0.0)), transform.axis_zero());
    }

    #[test]
    fn right_and_bottom_edges_are_out_of_view() {
        let transform = transform(800.0, 400.0);
        assert!(transform.contains(Point::new(-20.0, 10.0)));
        assert!(!transform.contains(Point::new(20.0, 0.0)));
        assert!(!transform.contains(Point::new(0.0, -10.0)));
        assert!(transform.contains(Point::new(19.99, -9.99)));
    }

    #[test]
    fn x_step_scales_with_width() {
        let transform = transform(800.0, 400.0);
        assert_eq!(transform.x_step_for_pixels(800.0), 40.0);
        assert_eq!(transform.x_step_for_pixels(4.0), 0.2);
    }

    #[test]
    fn rejects_empty_surface_and_degenerate_window() {
        assert!(Transform::new(Viewport::default(), 0.0, 400.0).is_none());
        assert!(Transform::new(Viewport::default(), 800.0, f32::NAN).is_none());
        let flat = Viewport::new(Range::new(1.0, 1.0), Range::new(-1.0, 1.0));
        assert!(Transform::new(flat, 800.0, 400.0).is_none());
    }
}
