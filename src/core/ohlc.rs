use std::rc::Rc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{datetime_to_unix_seconds, decimal_to_f64};
use crate::error::{GraphError, GraphResult};

/// One OHLC candle keyed by unix-seconds open time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OhlcBar {
    pub time: f64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl OhlcBar {
    /// Builds a validated OHLC bar from raw floating values.
    ///
    /// Invariants:
    /// - all values are finite
    /// - `low <= high`
    /// - `open` and `close` are within `[low, high]`
    pub fn new(time: f64, open: f64, high: f64, low: f64, close: f64) -> GraphResult<Self> {
        if !time.is_finite()
            || !open.is_finite()
            || !high.is_finite()
            || !low.is_finite()
            || !close.is_finite()
        {
            return Err(GraphError::InvalidData(
                "ohlc values must be finite".to_owned(),
            ));
        }

        if low > high {
            return Err(GraphError::InvalidData(
                "ohlc low must be <= high".to_owned(),
            ));
        }

        if open < low || open > high || close < low || close > high {
            return Err(GraphError::InvalidData(
                "ohlc open/close must be within low/high range".to_owned(),
            ));
        }

        Ok(Self {
            time,
            open,
            high,
            low,
            close,
        })
    }

    pub fn from_decimal_time(
        time: DateTime<Utc>,
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
    ) -> GraphResult<Self> {
        Self::new(
            datetime_to_unix_seconds(time),
            decimal_to_f64(open, "open")?,
            decimal_to_f64(high, "high")?,
            decimal_to_f64(low, "low")?,
            decimal_to_f64(close, "close")?,
        )
    }

    /// Returns `true` when close price is greater than or equal to open price.
    #[must_use]
    pub fn is_bullish(self) -> bool {
        self.close >= self.open
    }
}

/// Time-ordered source of OHLC bars.
pub trait OhlcProvider {
    /// All bars, sorted by ascending `time`.
    fn bars(&self) -> &[OhlcBar];

    fn len(&self) -> usize {
        self.bars().len()
    }

    fn is_empty(&self) -> bool {
        self.bars().is_empty()
    }

    /// Bars whose time falls in the inclusive window `[start, end]`.
    fn bars_in(&self, start: f64, end: f64) -> &[OhlcBar] {
        let bars = self.bars();
        let lo = bars.partition_point(|bar| bar.time < start);
        let hi = bars.partition_point(|bar| bar.time <= end);
        if lo >= hi { &[] } else { &bars[lo..hi] }
    }

    fn time_bounds(&self) -> Option<(f64, f64)> {
        let bars = self.bars();
        Some((bars.first()?.time, bars.last()?.time))
    }

    fn price_bounds(&self) -> Option<(f64, f64)> {
        price_bounds(self.bars())
    }
}

/// Shared, read-only projection handed to overlays.
pub type OhlcProjection = Rc<dyn OhlcProvider>;

/// In-memory provider backed by a sorted `Vec`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VecOhlcProvider {
    bars: Vec<OhlcBar>,
}

impl VecOhlcProvider {
    /// Wraps `bars`, rejecting input not sorted by ascending time.
    pub fn new(bars: Vec<OhlcBar>) -> GraphResult<Self> {
        if bars.windows(2).any(|pair| pair[0].time > pair[1].time) {
            return Err(GraphError::InvalidData(
                "ohlc bars must be sorted by ascending time".to_owned(),
            ));
        }
        Ok(Self { bars })
    }

    /// Trusted constructor for slices already taken from a sorted provider.
    pub(crate) fn from_sorted(bars: Vec<OhlcBar>) -> Self {
        Self { bars }
    }

    pub fn push(&mut self, bar: OhlcBar) -> GraphResult<()> {
        if let Some(last) = self.bars.last() {
            if bar.time < last.time {
                return Err(GraphError::InvalidData(format!(
                    "bar at {} precedes last bar at {}",
                    bar.time, last.time
                )));
            }
        }
        self.bars.push(bar);
        Ok(())
    }
}

impl OhlcProvider for VecOhlcProvider {
    fn bars(&self) -> &[OhlcBar] {
        &self.bars
    }
}

#[must_use]
pub fn price_bounds(bars: &[OhlcBar]) -> Option<(f64, f64)> {
    bars.iter().fold(None, |acc, bar| match acc {
        None => Some((bar.low, bar.high)),
        Some((min, max)) => Some((min.min(bar.low), max.max(bar.high))),
    })
}
