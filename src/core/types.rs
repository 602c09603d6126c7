use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};

/// Pixel dimensions of the drawable graph area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewSize {
    pub width: u32,
    pub height: u32,
}

impl ViewSize {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn ensure_valid(self) -> GraphResult<Self> {
        if !self.is_valid() {
            return Err(GraphError::InvalidViewSize {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }
}
