use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::primitives::{datetime_to_unix_seconds, unix_seconds_to_datetime};
use crate::core::{LinearScale, ViewSize};
use crate::error::{GraphError, GraphResult};

/// Pixel <-> (time, price) mapping for one graph view.
///
/// Times are unix seconds. The price axis is inverted: `price_max` sits on
/// pixel row 0 and `price_min` on the bottom edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphRanges {
    time_start: f64,
    time_end: f64,
    price_min: f64,
    price_max: f64,
    pub width: u32,
    pub height: u32,
}

impl GraphRanges {
    pub fn new(
        time_window: (f64, f64),
        price_window: (f64, f64),
        size: ViewSize,
    ) -> GraphResult<Self> {
        let (time_start, time_end) = time_window;
        let (price_min, price_max) = price_window;

        if !time_start.is_finite() || !time_end.is_finite() || time_start >= time_end {
            return Err(GraphError::InvalidData(
                "time window must be finite with start < end".to_owned(),
            ));
        }
        if !price_min.is_finite() || !price_max.is_finite() || price_min >= price_max {
            return Err(GraphError::InvalidData(
                "price window must be finite with min < max".to_owned(),
            ));
        }

        Ok(Self {
            time_start,
            time_end,
            price_min,
            price_max,
            width: size.width,
            height: size.height,
        })
    }

    /// Returns a copy with pixel dimensions replaced by `size`.
    #[must_use]
    pub fn with_size(mut self, size: ViewSize) -> Self {
        self.width = size.width;
        self.height = size.height;
        self
    }

    #[must_use]
    pub fn size(self) -> ViewSize {
        ViewSize::new(self.width, self.height)
    }

    #[must_use]
    pub fn time_window(self) -> (f64, f64) {
        (self.time_start, self.time_end)
    }

    #[must_use]
    pub fn price_window(self) -> (f64, f64) {
        (self.price_min, self.price_max)
    }

    #[must_use]
    pub fn seconds_per_pixel(self) -> Option<f64> {
        (self.width > 0).then(|| (self.time_end - self.time_start) / f64::from(self.width))
    }

    pub fn x_seconds(self, x: f64) -> GraphResult<f64> {
        let size = self.size().ensure_valid()?;
        self.time_scale()?
            .pixel_to_domain(x, f64::from(size.width))
    }

    pub fn x_time(self, x: f64) -> GraphResult<DateTime<Utc>> {
        unix_seconds_to_datetime(self.x_seconds(x)?)
    }

    pub fn y_price(self, y: f64) -> GraphResult<f64> {
        let size = self.size().ensure_valid()?;
        self.price_scale()?
            .pixel_to_domain(y, f64::from(size.height))
    }

    pub fn seconds_x(self, seconds: f64) -> GraphResult<f64> {
        let size = self.size().ensure_valid()?;
        self.time_scale()?
            .domain_to_pixel(seconds, f64::from(size.width))
    }

    pub fn time_x(self, time: DateTime<Utc>) -> GraphResult<f64> {
        self.seconds_x(datetime_to_unix_seconds(time))
    }

    pub fn price_y(self, price: f64) -> GraphResult<f64> {
        let size = self.size().ensure_valid()?;
        self.price_scale()?
            .domain_to_pixel(price, f64::from(size.height))
    }

    fn time_scale(self) -> GraphResult<LinearScale> {
        LinearScale::new(self.time_start, self.time_end)
    }

    fn price_scale(self) -> GraphResult<LinearScale> {
        LinearScale::new(self.price_max, self.price_min)
    }
}
