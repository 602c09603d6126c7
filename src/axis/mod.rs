//! Time-axis label generation.

mod month_labeler;

pub use month_labeler::{AxisLabel, MonthLabeler};
