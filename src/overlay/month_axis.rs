use tracing::warn;

use crate::axis::{AxisLabel, MonthLabeler};
use crate::core::primitives::unix_seconds_to_datetime;
use crate::core::{GraphRanges, OhlcProjection};
use crate::error::GraphResult;
use crate::overlay::{GraphOverlay, OverlayStyle};
use crate::render::{DrawList, LinePrimitive, TextHAlign, TextPrimitive};

const LABEL_GAP_PX: f64 = 2.0;
/// Ticks closer than this to the previous one are dropped.
pub const MIN_LABEL_SPACING_PX: f64 = 48.0;
const AVG_SECONDS_PER_MONTH: f64 = 365.2425 * 86_400.0 / 12.0;

/// Month ticks and `MM/YYYY` texts along the bottom edge.
pub struct MonthAxisOverlay {
    labeler: MonthLabeler,
    style: OverlayStyle,
    labels: Vec<AxisLabel>,
    geometry: DrawList,
}

impl MonthAxisOverlay {
    pub const ID: &'static str = "month-axis";

    #[must_use]
    pub fn new(labeler: MonthLabeler, style: OverlayStyle) -> Self {
        Self {
            labeler,
            style,
            labels: Vec::new(),
            geometry: DrawList::default(),
        }
    }

    /// Labeler with its step widened so consecutive ticks are at least
    /// [`MIN_LABEL_SPACING_PX`] apart on average at the current zoom.
    fn density_labeler(&self, ranges: GraphRanges) -> GraphResult<MonthLabeler> {
        let (begin, end) = ranges.time_window();
        let months = (end - begin) / AVG_SECONDS_PER_MONTH;
        let every = f64::from(self.labeler.every());
        let spacing_px = f64::from(ranges.width) / months * every;
        if spacing_px >= MIN_LABEL_SPACING_PX {
            return Ok(self.labeler);
        }

        let widened =
            (every * (MIN_LABEL_SPACING_PX / spacing_px).ceil()).min(f64::from(u32::MAX));
        MonthLabeler::new(widened as u32)
    }

    /// Labels placed inside the visible window by the last ranges update.
    #[must_use]
    pub fn labels(&self) -> &[AxisLabel] {
        &self.labels
    }

    fn rebuild(&mut self, ranges: GraphRanges) -> GraphResult<()> {
        let size = ranges.size().ensure_valid()?;
        let (begin, end) = ranges.time_window();
        let start = unix_seconds_to_datetime(begin)?;
        let end = unix_seconds_to_datetime(end)?;

        let bottom = f64::from(size.height);
        let tick_top = bottom - self.style.axis_tick_length_px;
        let mut last_x = f64::NEG_INFINITY;
        for label in self.density_labeler(ranges)?.make_labels(start, end) {
            let x = ranges.time_x(label.time)?;
            // the first label sits on the month start, which may precede the window
            if x < 0.0 || x - last_x < MIN_LABEL_SPACING_PX {
                continue;
            }
            last_x = x;

            self.geometry.push_line(LinePrimitive::vertical(
                x,
                tick_top,
                bottom,
                1.0,
                self.style.axis_text_color,
            ));
            self.geometry.push_text(TextPrimitive::new(
                label.text.clone(),
                x,
                tick_top - LABEL_GAP_PX,
                self.style.axis_font_size_px,
                self.style.axis_text_color,
                TextHAlign::Center,
            ));
            self.labels.push(label);
        }
        Ok(())
    }
}

impl GraphOverlay for MonthAxisOverlay {
    fn id(&self) -> &str {
        Self::ID
    }

    fn projection_changed(&mut self, _projection: OhlcProjection) {}

    fn ranges_changed(&mut self, ranges: GraphRanges) {
        self.labels.clear();
        self.geometry.clear();
        if let Err(err) = self.rebuild(ranges) {
            warn!(error = %err, overlay = Self::ID, "dropping month axis geometry");
            self.labels.clear();
            self.geometry.clear();
        }
    }

    fn insert_into_scene(&self, scene: &mut DrawList) {
        scene.extend_from(&self.geometry);
    }
}
