use chrono::{DateTime, Datelike, Months, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{GraphError, GraphResult};

const MONTH_LABEL_FORMAT: &str = "%m/%Y";

/// One tick on the time axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisLabel {
    pub time: DateTime<Utc>,
    pub text: String,
}

/// Generates `MM/YYYY` labels at month starts, every `every` months.
///
/// Whenever stepping crosses into a new year the label is moved back to
/// January 1 of that year, so every year gets a January tick even if that
/// skips the month the step would have landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthLabeler {
    every: u32,
}

impl Default for MonthLabeler {
    fn default() -> Self {
        Self {
            every: Self::DEFAULT_STEP,
        }
    }
}

impl MonthLabeler {
    pub const DEFAULT_STEP: u32 = 1;

    pub fn new(every: u32) -> GraphResult<Self> {
        if every == 0 {
            return Err(GraphError::InvalidData(
                "month label step must be >= 1".to_owned(),
            ));
        }
        Ok(Self { every })
    }

    #[must_use]
    pub fn every(self) -> u32 {
        self.every
    }

    /// Labels for the inclusive range `[start, end]`, compared by calendar date.
    ///
    /// The first label is the first day of `start`'s month. Returns an empty
    /// list when `start > end`.
    #[must_use]
    pub fn make_labels(self, start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<AxisLabel> {
        let mut labels = Vec::new();
        if start > end {
            return labels;
        }

        let end_date = end.date_naive();
        let Some(mut cursor) = start.date_naive().with_day(1) else {
            return labels;
        };
        let mut last = cursor;

        while cursor <= end_date {
            trace!(%cursor, %last, "month label candidate");
            if cursor.year() > last.year() {
                // cursor is always on day 1, so January 1 always exists
                if let Some(january) = cursor.with_month(1) {
                    cursor = january;
                }
            }

            labels.push(AxisLabel {
                time: cursor.and_time(NaiveTime::MIN).and_utc(),
                text: cursor.format(MONTH_LABEL_FORMAT).to_string(),
            });
            last = cursor;

            match cursor.checked_add_months(Months::new(self.every)) {
                Some(next) => cursor = next,
                None => break,
            }
        }

        labels
    }
}
