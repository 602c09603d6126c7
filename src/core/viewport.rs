use std::cell::Cell;
use std::rc::Rc;

use tracing::debug;

use crate::core::ohlc::price_bounds;
use crate::core::{GraphRanges, OhlcProjection, VecOhlcProvider, ViewSize};
use crate::error::{GraphError, GraphResult};

/// Wheel delta reported for one detent of a standard mouse wheel.
pub const WHEEL_NOTCH_DELTA: f64 = 120.0;
/// Span divisor applied per wheel notch; positive deltas zoom in.
pub const ZOOM_STEP_PER_NOTCH: f64 = 1.2;

const DEFAULT_MIN_SPAN_SECONDS: f64 = 60.0;

/// Visible time/price window over a data source.
///
/// Implementations are shared with the graph view through [`SharedViewport`]
/// and mutated by the host, so all accessors take `&self`.
pub trait GraphViewport {
    /// Current window. Pixel dimensions are left to the view to fill in.
    fn ranges(&self) -> GraphRanges;

    /// Visible window start in unix seconds.
    fn view_begin(&self) -> f64 {
        self.ranges().time_window().0
    }

    /// Visible window end in unix seconds.
    fn view_end(&self) -> f64 {
        self.ranges().time_window().1
    }

    /// The data source as seen through this viewport.
    fn source_projection(&self) -> OhlcProjection;
}

pub type SharedViewport = Rc<dyn GraphViewport>;

/// Viewport over an [`OhlcProvider`](crate::core::OhlcProvider) with
/// wheel zoom, pan and price autoscale.
pub struct TimeWindowViewport {
    source: OhlcProjection,
    ranges: Cell<GraphRanges>,
    min_span_seconds: f64,
}

impl TimeWindowViewport {
    pub fn new(
        source: OhlcProjection,
        time_window: (f64, f64),
        price_window: (f64, f64),
    ) -> GraphResult<Self> {
        let ranges = GraphRanges::new(time_window, price_window, ViewSize::default())?;
        Ok(Self {
            source,
            ranges: Cell::new(ranges),
            min_span_seconds: DEFAULT_MIN_SPAN_SECONDS,
        })
    }

    /// Fits the time window to every bar of `source` and the price window
    /// to their low/high, both widened by `padding_ratio` of their span.
    pub fn fit_to_source(source: OhlcProjection, padding_ratio: f64) -> GraphResult<Self> {
        validate_padding(padding_ratio)?;
        let (first, last) = source.time_bounds().ok_or_else(|| {
            GraphError::InvalidData("cannot fit viewport to an empty source".to_owned())
        })?;
        let (low, high) = source.price_bounds().ok_or_else(|| {
            GraphError::InvalidData("cannot fit viewport to an empty source".to_owned())
        })?;

        let time_window = pad_window(first, last, padding_ratio, DEFAULT_MIN_SPAN_SECONDS);
        let price_window = pad_window(low, high, padding_ratio, price_min_span(low, high));
        Self::new(source, time_window, price_window)
    }

    pub fn with_min_span_seconds(mut self, min_span_seconds: f64) -> GraphResult<Self> {
        if !min_span_seconds.is_finite() || min_span_seconds <= 0.0 {
            return Err(GraphError::InvalidData(
                "min span must be finite and > 0".to_owned(),
            ));
        }
        self.min_span_seconds = min_span_seconds;
        Ok(self)
    }

    #[must_use]
    pub fn source(&self) -> &OhlcProjection {
        &self.source
    }

    #[must_use]
    pub fn min_span_seconds(&self) -> f64 {
        self.min_span_seconds
    }

    pub fn set_view_range(&self, begin: f64, end: f64) -> GraphResult<()> {
        let current = self.ranges.get();
        let next = GraphRanges::new((begin, end), current.price_window(), current.size())?;
        self.ranges.set(next);
        Ok(())
    }

    pub fn set_price_window(&self, min: f64, max: f64) -> GraphResult<()> {
        let current = self.ranges.get();
        let next = GraphRanges::new(current.time_window(), (min, max), current.size())?;
        self.ranges.set(next);
        Ok(())
    }

    pub fn pan_by(&self, delta_seconds: f64) -> GraphResult<()> {
        if !delta_seconds.is_finite() {
            return Err(GraphError::InvalidData(
                "pan delta must be finite".to_owned(),
            ));
        }
        let (begin, end) = self.ranges.get().time_window();
        self.set_view_range(begin + delta_seconds, end + delta_seconds)
    }

    /// Zooms the time window around `anchor_seconds` by one
    /// [`ZOOM_STEP_PER_NOTCH`] per [`WHEEL_NOTCH_DELTA`] of `wheel_delta`.
    ///
    /// The anchor keeps its relative position. Zooming in stops at the
    /// configured minimum span, and a window already narrower than that
    /// minimum is left as is.
    pub fn zoom_at(&self, anchor_seconds: f64, wheel_delta: i32) -> GraphResult<()> {
        if !anchor_seconds.is_finite() {
            return Err(GraphError::InvalidData(
                "zoom anchor must be finite".to_owned(),
            ));
        }
        if wheel_delta == 0 {
            return Ok(());
        }

        let factor = ZOOM_STEP_PER_NOTCH.powf(f64::from(wheel_delta) / WHEEL_NOTCH_DELTA);
        let (begin, end) = self.ranges.get().time_window();
        let current_span = end - begin;
        if factor > 1.0 && current_span <= self.min_span_seconds {
            return Ok(());
        }
        // zooming in may approach the minimum but never widens the window
        let floor = self.min_span_seconds.min(current_span);
        let target_span = (current_span / factor).max(floor);
        let left_ratio = (anchor_seconds - begin) / current_span;

        let new_begin = anchor_seconds - left_ratio * target_span;
        debug!(
            wheel_delta,
            current_span, target_span, "zooming viewport time window"
        );
        self.set_view_range(new_begin, new_begin + target_span)
    }

    /// Refits the price window to bars inside the visible time window.
    ///
    /// Leaves the window untouched when no bar is visible.
    pub fn autoscale_price(&self, padding_ratio: f64) -> GraphResult<()> {
        validate_padding(padding_ratio)?;
        let (begin, end) = self.ranges.get().time_window();
        let Some((low, high)) = price_bounds(self.source.bars_in(begin, end)) else {
            return Ok(());
        };
        let (min, max) = pad_window(low, high, padding_ratio, price_min_span(low, high));
        self.set_price_window(min, max)
    }
}

impl GraphViewport for TimeWindowViewport {
    fn ranges(&self) -> GraphRanges {
        self.ranges.get()
    }

    fn source_projection(&self) -> OhlcProjection {
        let (begin, end) = self.ranges.get().time_window();
        Rc::new(VecOhlcProvider::from_sorted(
            self.source.bars_in(begin, end).to_vec(),
        ))
    }
}

fn validate_padding(padding_ratio: f64) -> GraphResult<()> {
    if !padding_ratio.is_finite() || padding_ratio < 0.0 {
        return Err(GraphError::InvalidData(
            "padding ratio must be finite and >= 0".to_owned(),
        ));
    }
    Ok(())
}

fn price_min_span(low: f64, high: f64) -> f64 {
    (low.abs().max(high.abs()) * 0.01).max(1e-6)
}

fn pad_window(start: f64, end: f64, padding_ratio: f64, min_span: f64) -> (f64, f64) {
    let span = end - start;
    if span < min_span {
        let mid = (start + end) / 2.0;
        let half = min_span / 2.0;
        return (mid - half, mid + half);
    }
    let pad = span * padding_ratio;
    (start - pad, end + pad)
}
