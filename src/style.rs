//! Visual theme.

use crate::render::{Color, LineStyle, TextStyle};

/// Visual theme for plots.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Surface clear color.
    pub background: Color,
    /// Style of the two reference axes.
    pub axis: LineStyle,
    /// Style of the plotted curve.
    pub curve: LineStyle,
    /// Style of the centered error message.
    pub error_text: TextStyle,
}

impl Theme {
    /// Dark theme.
    pub fn dark() -> Self {
        Self {
            background: Color::new(0.08, 0.09, 0.11, 1.0),
            axis: LineStyle {
                color: Color::new(0.45, 0.47, 0.5, 1.0),
                width: 1.0,
            },
            curve: LineStyle {
                color: Color::new(0.2, 0.8, 0.9, 1.0),
                width: 2.0,
            },
            error_text: TextStyle {
                color: Color::new(0.95, 0.45, 0.4, 1.0),
                size: 16.0,
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            axis: LineStyle {
                color: Color::from_rgb8(0x88, 0x88, 0x88),
                width: 1.0,
            },
            curve: LineStyle {
                color: Color::from_rgb8(0x00, 0x00, 0xff),
                width: 2.0,
            },
            error_text: TextStyle {
                color: Color::from_rgb8(0xcc, 0x22, 0x22),
                size: 16.0,
            },
        }
    }
}
