use crate::core::ViewSize;
use crate::error::{GraphError, GraphResult};
use crate::render::{LinePrimitive, RectPrimitive, TextPrimitive};

/// Per-frame draw list filled by overlays during a redraw.
///
/// The view clears and refills one list per redraw, so the primitive
/// buffers keep their capacity across frames.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    pub size: ViewSize,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl DrawList {
    #[must_use]
    pub fn new(size: ViewSize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Drops every primitive and adopts `size` for the next frame.
    pub fn reset(&mut self, size: ViewSize) {
        self.size = size;
        self.clear();
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.rects.clear();
        self.texts.clear();
    }

    pub fn push_line(&mut self, line: LinePrimitive) {
        self.lines.push(line);
    }

    pub fn push_rect(&mut self, rect: RectPrimitive) {
        self.rects.push(rect);
    }

    pub fn push_text(&mut self, text: TextPrimitive) {
        self.texts.push(text);
    }

    pub fn extend_from(&mut self, other: &DrawList) {
        self.lines.extend_from_slice(&other.lines);
        self.rects.extend_from_slice(&other.rects);
        self.texts.extend(other.texts.iter().cloned());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len() + self.rects.len() + self.texts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.rects.is_empty() && self.texts.is_empty()
    }

    pub fn validate(&self) -> GraphResult<()> {
        if !self.size.is_valid() {
            return Err(GraphError::InvalidViewSize {
                width: self.size.width,
                height: self.size.height,
            });
        }

        for line in &self.lines {
            line.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }
}
