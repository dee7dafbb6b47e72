//! Size of the drawing surface.

/// Logical size of the drawing surface and its device pixel ratio.
///
/// Plot geometry is laid out in logical pixels; the backing store holds
/// `logical * scale_factor` device pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSize {
    /// Width in logical pixels.
    pub width: f32,
    /// Height in logical pixels.
    pub height: f32,
    /// Device pixels per logical pixel.
    pub scale_factor: f32,
}

impl SurfaceSize {
    /// Create a surface size. A non-positive scale factor counts as 1.
    pub fn new(width: f32, height: f32, scale_factor: f32) -> Self {
        let scale_factor = if scale_factor > 0.0 && scale_factor.is_finite() {
            scale_factor
        } else {
            1.0
        };
        Self {
            width,
            height,
            scale_factor,
        }
    }

    /// Backing store size in whole device pixels.
    pub fn device_pixels(&self) -> (u32, u32) {
        (
            to_device(self.width * self.scale_factor),
            to_device(self.height * self.scale_factor),
        )
    }

    /// Whether the surface has no drawable area.
    pub fn is_empty(&self) -> bool {
        let (width, height) = self.device_pixels();
        width == 0 || height == 0
    }

    /// Whether switching from `previous` needs a rescale and redraw.
    ///
    /// A new device pixel ratio always counts, even when the backing store
    /// keeps its size, since the logical extents move with it.
    pub fn differs_from(&self, previous: Option<SurfaceSize>) -> bool {
        match previous {
            None => true,
            Some(previous) => {
                previous.scale_factor != self.scale_factor
                    || previous.device_pixels() != self.device_pixels()
            }
        }
    }
}

fn to_device(value: f32) -> u32 {
    if value.is_finite() && value > 0.0 {
        value.round() as u32
    } else {
        0
    }
}
