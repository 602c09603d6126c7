use crate::axis::MonthLabeler;
use crate::core::GraphViewport;
use crate::overlay::{
    CandlestickOverlay, GraphOverlay, MonthAxisOverlay, OverlayStyle, PriceGridOverlay,
};

/// Builds the overlay set installed with each newly assigned viewport.
pub trait OverlayFactory {
    fn create_overlays(&self, viewport: &dyn GraphViewport) -> Vec<Box<dyn GraphOverlay>>;
}

impl<F> OverlayFactory for F
where
    F: Fn(&dyn GraphViewport) -> Vec<Box<dyn GraphOverlay>>,
{
    fn create_overlays(&self, viewport: &dyn GraphViewport) -> Vec<Box<dyn GraphOverlay>> {
        self(viewport)
    }
}

/// Price grid, candlesticks and month axis, back to front.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DefaultOverlayFactory {
    pub style: OverlayStyle,
    pub labeler: MonthLabeler,
}

impl DefaultOverlayFactory {
    #[must_use]
    pub fn new(style: OverlayStyle, labeler: MonthLabeler) -> Self {
        Self { style, labeler }
    }
}

impl OverlayFactory for DefaultOverlayFactory {
    fn create_overlays(&self, _viewport: &dyn GraphViewport) -> Vec<Box<dyn GraphOverlay>> {
        vec![
            Box::new(PriceGridOverlay::new(self.style)),
            Box::new(CandlestickOverlay::new(self.style)),
            Box::new(MonthAxisOverlay::new(self.labeler, self.style)),
        ]
    }
}
