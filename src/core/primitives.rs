use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{GraphError, GraphResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> GraphResult<f64> {
    value.to_f64().ok_or_else(|| {
        GraphError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

#[must_use]
pub fn datetime_to_unix_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / 1000.0
}

/// Inverse of [`datetime_to_unix_seconds`], truncated to millisecond precision.
pub fn unix_seconds_to_datetime(seconds: f64) -> GraphResult<DateTime<Utc>> {
    if !seconds.is_finite() {
        return Err(GraphError::InvalidData(
            "timestamp seconds must be finite".to_owned(),
        ));
    }

    let millis = (seconds * 1000.0).round();
    if millis < i64::MIN as f64 || millis > i64::MAX as f64 {
        return Err(GraphError::InvalidData(format!(
            "timestamp {seconds} is out of range"
        )));
    }

    DateTime::from_timestamp_millis(millis as i64).ok_or_else(|| {
        GraphError::InvalidData(format!("timestamp {seconds} is out of range"))
    })
}
