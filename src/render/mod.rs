mod frame;
mod null_renderer;
mod primitives;

pub use frame::DrawList;
pub use null_renderer::NullRenderer;
pub use primitives::{Color, LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive};

use crate::error::GraphResult;

/// Contract implemented by any drawing backend.
///
/// Backends receive a fully built [`DrawList`], keeping toolkit drawing code
/// apart from coordinate mapping and overlay logic.
pub trait Renderer {
    fn render(&mut self, frame: &DrawList) -> GraphResult<()>;
}
