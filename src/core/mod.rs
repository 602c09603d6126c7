pub mod ohlc;
pub mod primitives;
pub mod ranges;
pub mod scale;
pub mod types;
pub mod viewport;

pub use ohlc::{OhlcBar, OhlcProjection, OhlcProvider, VecOhlcProvider};
pub use ranges::GraphRanges;
pub use scale::LinearScale;
pub use types::ViewSize;
pub use viewport::{
    GraphViewport, SharedViewport, TimeWindowViewport, WHEEL_NOTCH_DELTA, ZOOM_STEP_PER_NOTCH,
};
