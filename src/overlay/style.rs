use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};
use crate::render::Color;

/// Upper bound for `grid_line_count`.
pub const MAX_GRID_LINES: usize = 64;

/// Colors and metrics shared by the built-in overlays.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayStyle {
    pub bullish_color: Color,
    pub bearish_color: Color,
    pub wick_width_px: f64,
    /// Fraction of the pixel gap between neighbouring bars used by a body.
    pub body_width_ratio: f64,
    pub grid_color: Color,
    pub grid_line_count: usize,
    pub axis_text_color: Color,
    pub axis_font_size_px: f64,
    pub axis_tick_length_px: f64,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            bullish_color: Color::from_rgb8(0x26, 0xa6, 0x9a),
            bearish_color: Color::from_rgb8(0xef, 0x53, 0x50),
            wick_width_px: 1.0,
            body_width_ratio: 0.7,
            grid_color: Color::from_rgb8(0x80, 0x80, 0x80).with_alpha(0.25),
            grid_line_count: 4,
            axis_text_color: Color::rgb(0.2, 0.2, 0.2),
            axis_font_size_px: 11.0,
            axis_tick_length_px: 5.0,
        }
    }
}

impl OverlayStyle {
    pub fn validate(self) -> GraphResult<Self> {
        self.bullish_color.validate()?;
        self.bearish_color.validate()?;
        self.grid_color.validate()?;
        self.axis_text_color.validate()?;

        for (field, value) in [
            ("wick_width_px", self.wick_width_px),
            ("axis_font_size_px", self.axis_font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(GraphError::InvalidData(format!(
                    "overlay style `{field}` must be finite and > 0"
                )));
            }
        }
        if !self.axis_tick_length_px.is_finite() || self.axis_tick_length_px < 0.0 {
            return Err(GraphError::InvalidData(
                "overlay style `axis_tick_length_px` must be finite and >= 0".to_owned(),
            ));
        }
        if !self.body_width_ratio.is_finite()
            || self.body_width_ratio <= 0.0
            || self.body_width_ratio > 1.0
        {
            return Err(GraphError::InvalidData(
                "overlay style `body_width_ratio` must be in (0, 1]".to_owned(),
            ));
        }

        if self.grid_line_count > MAX_GRID_LINES {
            return Err(GraphError::InvalidData(format!(
                "overlay style `grid_line_count` must be <= {MAX_GRID_LINES}"
            )));
        }

        Ok(self)
    }
}
