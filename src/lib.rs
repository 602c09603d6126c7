//! graphview-rs: headless core for price-over-time graph views.
//!
//! The crate owns coordinate mapping, overlay lifecycle and per-frame draw
//! lists. Host toolkits forward pointer/wheel/resize input into a
//! [`GraphView`] and hand the produced [`render::DrawList`] to their own
//! [`render::Renderer`] backend.

pub mod axis;
pub mod core;
pub mod error;
pub mod overlay;
pub mod render;
pub mod telemetry;
pub mod view;

pub use error::{GraphError, GraphResult};
pub use view::{GraphEvent, GraphView, GraphViewConfig};
