//! Drawable annotation layers owned by a [`GraphView`](crate::GraphView).

mod candlestick;
mod factory;
mod month_axis;
mod price_grid;
mod style;

pub use candlestick::CandlestickOverlay;
pub use factory::{DefaultOverlayFactory, OverlayFactory};
pub use month_axis::{MIN_LABEL_SPACING_PX, MonthAxisOverlay};
pub use price_grid::PriceGridOverlay;
pub use style::{MAX_GRID_LINES, OverlayStyle};

use crate::core::{GraphRanges, OhlcProjection};
use crate::render::DrawList;

/// A layer that reacts to viewport changes and contributes primitives to
/// each frame.
///
/// The owning view always calls `projection_changed` before
/// `ranges_changed` after a viewport swap. Overlays are expected to project
/// their geometry in those hooks so `insert_into_scene` is a plain copy.
pub trait GraphOverlay {
    fn id(&self) -> &str;

    fn projection_changed(&mut self, projection: OhlcProjection);

    fn ranges_changed(&mut self, ranges: GraphRanges);

    fn insert_into_scene(&self, scene: &mut DrawList);
}
