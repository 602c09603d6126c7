use tracing::warn;

use crate::core::{GraphRanges, OhlcProjection};
use crate::error::GraphResult;
use crate::overlay::{GraphOverlay, OverlayStyle};
use crate::render::{DrawList, LinePrimitive, TextHAlign, TextPrimitive};

const PRICE_TEXT_INSET_PX: f64 = 4.0;

/// Evenly spaced horizontal grid lines with their price printed at the right edge.
pub struct PriceGridOverlay {
    style: OverlayStyle,
    geometry: DrawList,
}

impl PriceGridOverlay {
    pub const ID: &'static str = "price-grid";

    #[must_use]
    pub fn new(style: OverlayStyle) -> Self {
        Self {
            style,
            geometry: DrawList::default(),
        }
    }

    fn rebuild(&mut self, ranges: GraphRanges) -> GraphResult<()> {
        let size = ranges.size().ensure_valid()?;
        let (min, max) = ranges.price_window();
        let count = self.style.grid_line_count;
        let step = (max - min) / (count as f64 + 1.0);
        let width = f64::from(size.width);

        for index in 1..=count {
            let price = min + step * index as f64;
            let y = ranges.price_y(price)?;
            self.geometry.push_line(LinePrimitive::horizontal(
                y,
                0.0,
                width,
                1.0,
                self.style.grid_color,
            ));
            self.geometry.push_text(TextPrimitive::new(
                format!("{price:.2}"),
                width - PRICE_TEXT_INSET_PX,
                y,
                self.style.axis_font_size_px,
                self.style.axis_text_color,
                TextHAlign::Right,
            ));
        }
        Ok(())
    }
}

impl GraphOverlay for PriceGridOverlay {
    fn id(&self) -> &str {
        Self::ID
    }

    fn projection_changed(&mut self, _projection: OhlcProjection) {}

    fn ranges_changed(&mut self, ranges: GraphRanges) {
        self.geometry.clear();
        if let Err(err) = self.rebuild(ranges) {
            warn!(error = %err, overlay = Self::ID, "dropping price grid geometry");
            self.geometry.clear();
        }
    }

    fn insert_into_scene(&self, scene: &mut DrawList) {
        scene.extend_from(&self.geometry);
    }
}
