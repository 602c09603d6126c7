use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::ViewSize;

/// Notifications emitted by a [`GraphView`](crate::GraphView) to its observers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GraphEvent {
    /// Pointer moved over the graph; carries the time/price under it.
    DataPointHovered { time: DateTime<Utc>, price: f64 },
    /// Wheel turned over the graph; `delta` is the raw wheel delta.
    DataPointZoomed { time: DateTime<Utc>, delta: i32 },
    Resized { size: ViewSize },
}

/// Handle returned by [`GraphView::subscribe`](crate::GraphView::subscribe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(pub(crate) u64);
