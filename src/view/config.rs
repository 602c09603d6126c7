use serde::{Deserialize, Serialize};

use crate::axis::MonthLabeler;
use crate::core::ViewSize;
use crate::error::{GraphError, GraphResult};
use crate::overlay::OverlayStyle;

/// Bootstrap configuration for [`GraphView`](crate::GraphView).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphViewConfig {
    pub size: ViewSize,
    /// Months between time-axis labels.
    pub month_label_step: u32,
    pub overlay_style: OverlayStyle,
}

impl Default for GraphViewConfig {
    fn default() -> Self {
        Self {
            size: ViewSize::new(800, 600),
            month_label_step: MonthLabeler::DEFAULT_STEP,
            overlay_style: OverlayStyle::default(),
        }
    }
}

impl GraphViewConfig {
    #[must_use]
    pub fn new(size: ViewSize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_month_label_step(mut self, month_label_step: u32) -> Self {
        self.month_label_step = month_label_step;
        self
    }

    #[must_use]
    pub fn with_overlay_style(mut self, overlay_style: OverlayStyle) -> Self {
        self.overlay_style = overlay_style;
        self
    }

    pub fn validate(self) -> GraphResult<Self> {
        MonthLabeler::new(self.month_label_step)?;
        self.overlay_style.validate()?;
        Ok(self)
    }

    /// Parses and validates a JSON config. Missing fields take defaults.
    pub fn from_json_str(input: &str) -> GraphResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            GraphError::InvalidData(format!("failed to parse graph view config: {e}"))
        })?;
        config.validate()
    }

    pub fn to_json_pretty(&self) -> GraphResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            GraphError::InvalidData(format!("failed to serialize graph view config: {e}"))
        })
    }
}
