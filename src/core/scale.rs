use crate::error::{GraphError, GraphResult};

/// Linear mapping between a domain interval and a pixel span starting at 0.
///
/// `domain_start` lands on pixel 0 and `domain_end` on `span_px`, so an
/// inverted axis is expressed by passing the bounds in descending order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> GraphResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(GraphError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    pub fn domain_to_pixel(self, value: f64, span_px: f64) -> GraphResult<f64> {
        validate_span(span_px)?;
        if !value.is_finite() {
            return Err(GraphError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        Ok(normalized * span_px)
    }

    pub fn pixel_to_domain(self, pixel: f64, span_px: f64) -> GraphResult<f64> {
        validate_span(span_px)?;
        if !pixel.is_finite() {
            return Err(GraphError::InvalidData("pixel must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = pixel / span_px;
        Ok(self.domain_start + normalized * span)
    }
}

fn validate_span(span_px: f64) -> GraphResult<()> {
    if !span_px.is_finite() || span_px <= 0.0 {
        return Err(GraphError::InvalidData(
            "pixel span must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}
