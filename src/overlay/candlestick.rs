use tracing::warn;

use crate::core::{GraphRanges, OhlcBar, OhlcProjection};
use crate::error::GraphResult;
use crate::overlay::{GraphOverlay, OverlayStyle};
use crate::render::{DrawList, LinePrimitive, RectPrimitive};

const SINGLE_BAR_BODY_WIDTH_PX: f64 = 6.0;
const MIN_BODY_PX: f64 = 1.0;

/// Draws one wick line and one body rect per bar of the projection.
pub struct CandlestickOverlay {
    style: OverlayStyle,
    projection: Option<OhlcProjection>,
    ranges: Option<GraphRanges>,
    geometry: DrawList,
}

impl CandlestickOverlay {
    pub const ID: &'static str = "candlesticks";

    #[must_use]
    pub fn new(style: OverlayStyle) -> Self {
        Self {
            style,
            projection: None,
            ranges: None,
            geometry: DrawList::default(),
        }
    }

    #[must_use]
    pub fn bar_count(&self) -> usize {
        self.projection.as_ref().map_or(0, |projection| projection.len())
    }

    fn rebuild(&mut self) {
        self.geometry.clear();
        let (Some(projection), Some(ranges)) = (&self.projection, self.ranges) else {
            return;
        };

        let result = project_candles(projection.bars(), ranges, self.style, &mut self.geometry);
        if let Err(err) = result {
            warn!(error = %err, overlay = Self::ID, "dropping candle geometry");
            self.geometry.clear();
        }
    }
}

impl GraphOverlay for CandlestickOverlay {
    fn id(&self) -> &str {
        Self::ID
    }

    fn projection_changed(&mut self, projection: OhlcProjection) {
        self.projection = Some(projection);
        self.rebuild();
    }

    fn ranges_changed(&mut self, ranges: GraphRanges) {
        self.ranges = Some(ranges);
        self.rebuild();
    }

    fn insert_into_scene(&self, scene: &mut DrawList) {
        scene.extend_from(&self.geometry);
    }
}

fn project_candles(
    bars: &[OhlcBar],
    ranges: GraphRanges,
    style: OverlayStyle,
    out: &mut DrawList,
) -> GraphResult<()> {
    ranges.size().ensure_valid()?;
    let body_width = body_width_px(bars, ranges, style.body_width_ratio)?;

    for bar in bars {
        let color = if bar.is_bullish() {
            style.bullish_color
        } else {
            style.bearish_color
        };
        let x = ranges.seconds_x(bar.time)?;
        let high_y = ranges.price_y(bar.high)?;
        let low_y = ranges.price_y(bar.low)?;
        out.push_line(LinePrimitive::vertical(
            x,
            high_y,
            low_y,
            style.wick_width_px,
            color,
        ));

        let open_y = ranges.price_y(bar.open)?;
        let close_y = ranges.price_y(bar.close)?;
        out.push_rect(RectPrimitive::new(
            x - body_width / 2.0,
            open_y.min(close_y),
            body_width,
            (open_y - close_y).abs().max(MIN_BODY_PX),
            color,
        ));
    }

    Ok(())
}

/// Body width from the tightest pixel gap between neighbouring bars.
fn body_width_px(bars: &[OhlcBar], ranges: GraphRanges, ratio: f64) -> GraphResult<f64> {
    let mut min_gap = f64::INFINITY;
    for pair in bars.windows(2) {
        let gap = ranges.seconds_x(pair[1].time)? - ranges.seconds_x(pair[0].time)?;
        if gap > 0.0 {
            min_gap = min_gap.min(gap);
        }
    }

    if min_gap.is_finite() {
        Ok((min_gap * ratio).max(MIN_BODY_PX))
    } else {
        Ok(SINGLE_BAR_BODY_WIDTH_PX)
    }
}
