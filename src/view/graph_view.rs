use std::rc::Rc;

use tracing::{debug, trace, warn};

use crate::axis::MonthLabeler;
use crate::core::{GraphRanges, SharedViewport, ViewSize};
use crate::error::{GraphError, GraphResult};
use crate::overlay::{DefaultOverlayFactory, GraphOverlay, OverlayFactory};
use crate::render::{DrawList, Renderer};
use crate::view::{GraphEvent, GraphViewConfig, SubscriptionId};

type Observer = Box<dyn FnMut(&GraphEvent)>;

/// Scrollable/zoomable price-over-time view.
///
/// The view starts without a viewport. Until [`assign_viewport`] is called,
/// pointer and wheel input is ignored and redraws produce an empty scene.
/// Once attached it stays attached; later calls only swap the viewport.
///
/// All methods are expected to run on the host's event-loop thread.
///
/// [`assign_viewport`]: GraphView::assign_viewport
pub struct GraphView<R: Renderer> {
    renderer: R,
    size: ViewSize,
    viewport: Option<SharedViewport>,
    overlays: Vec<Box<dyn GraphOverlay>>,
    overlay_factory: Box<dyn OverlayFactory>,
    scene: DrawList,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl<R: Renderer> GraphView<R> {
    pub fn new(renderer: R, config: GraphViewConfig) -> GraphResult<Self> {
        let config = config.validate()?;
        let labeler = MonthLabeler::new(config.month_label_step)?;

        Ok(Self {
            renderer,
            size: config.size,
            viewport: None,
            overlays: Vec::new(),
            overlay_factory: Box::new(DefaultOverlayFactory::new(config.overlay_style, labeler)),
            scene: DrawList::new(config.size),
            observers: Vec::new(),
            next_subscription: 0,
        })
    }

    /// Replaces the factory used to build overlays on the next viewport swap.
    #[must_use]
    pub fn with_overlay_factory(mut self, factory: impl OverlayFactory + 'static) -> Self {
        self.set_overlay_factory(factory);
        self
    }

    pub fn set_overlay_factory(&mut self, factory: impl OverlayFactory + 'static) {
        self.overlay_factory = Box::new(factory);
    }

    pub fn subscribe(&mut self, observer: impl FnMut(&GraphEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes an observer. Returns `true` when it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(entry, _)| *entry != id);
        self.observers.len() != before
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        if self.viewport.is_none() {
            return;
        }

        let hovered = self.ranges().and_then(|ranges| {
            let time = ranges.x_time(x)?;
            let price = ranges.y_price(y)?;
            Ok((time, price))
        });
        match hovered {
            Ok((time, price)) => self.emit(GraphEvent::DataPointHovered { time, price }),
            Err(err) => warn!(error = %err, x, y, "skipping hover event"),
        }
    }

    pub fn wheel(&mut self, x: f64, delta: i32) {
        if self.viewport.is_none() {
            return;
        }

        match self.ranges().and_then(|ranges| ranges.x_time(x)) {
            Ok(time) => self.emit(GraphEvent::DataPointZoomed { time, delta }),
            Err(err) => warn!(error = %err, x, delta, "skipping zoom event"),
        }
    }

    /// Applies a new widget size: emits `Resized`, pushes fresh ranges to the
    /// overlays, then redraws.
    pub fn resize(&mut self, width: u32, height: u32) -> GraphResult<()> {
        self.size = ViewSize::new(width, height);
        self.emit(GraphEvent::Resized { size: self.size });
        self.notify_overlays_ranges_changed();
        self.redraw()
    }

    /// Installs `viewport` and rebuilds the overlay set for it.
    ///
    /// Previous overlays are dropped before the factory runs, so no overlay
    /// ever observes two viewports.
    pub fn assign_viewport(&mut self, viewport: SharedViewport) -> GraphResult<()> {
        debug!(
            view_begin = viewport.view_begin(),
            view_end = viewport.view_end(),
            "assigning new viewport"
        );

        self.overlays.clear();
        self.viewport = Some(Rc::clone(&viewport));
        self.overlays = self.overlay_factory.create_overlays(viewport.as_ref());

        self.notify_overlays_projection_changed();
        self.notify_overlays_ranges_changed();
        self.redraw()
    }

    /// Appends an application overlay and brings it up to date with the
    /// current projection and ranges. Takes effect on the next redraw.
    pub fn add_overlay(&mut self, mut overlay: Box<dyn GraphOverlay>) -> GraphResult<()> {
        let ranges = self.ranges()?;
        let viewport = self
            .viewport
            .as_ref()
            .ok_or(GraphError::ViewportNotAttached)?;

        overlay.projection_changed(viewport.source_projection());
        overlay.ranges_changed(ranges);
        self.overlays.push(overlay);
        Ok(())
    }

    pub fn notify_overlays_projection_changed(&mut self) {
        let Some(viewport) = &self.viewport else {
            return;
        };

        debug!(overlays = self.overlays.len(), "notifying overlays of projection change");
        let projection = viewport.source_projection();
        for overlay in &mut self.overlays {
            overlay.projection_changed(Rc::clone(&projection));
        }
    }

    pub fn notify_overlays_ranges_changed(&mut self) {
        let Ok(ranges) = self.ranges() else {
            return;
        };

        debug!(overlays = self.overlays.len(), "notifying overlays of ranges change");
        for overlay in &mut self.overlays {
            overlay.ranges_changed(ranges);
        }
    }

    /// Viewport ranges with width/height taken from the current view size.
    pub fn ranges(&self) -> GraphResult<GraphRanges> {
        let viewport = self
            .viewport
            .as_ref()
            .ok_or(GraphError::ViewportNotAttached)?;
        Ok(viewport.ranges().with_size(self.size))
    }

    /// Clears the scene and refills it from the overlays in list order.
    ///
    /// The frame goes to the renderer only when a viewport is attached and
    /// the view has a drawable size.
    pub fn redraw(&mut self) -> GraphResult<()> {
        self.scene.reset(self.size);
        let Some(viewport) = &self.viewport else {
            debug!("redrawing without viewport, drawing nothing");
            return Ok(());
        };

        debug!(
            view_begin = viewport.view_begin(),
            view_end = viewport.view_end(),
            "redrawing"
        );
        for overlay in &self.overlays {
            overlay.insert_into_scene(&mut self.scene);
            trace!(overlay = overlay.id(), primitives = self.scene.len(), "overlay drawn");
        }

        if !self.size.is_valid() {
            debug!(
                width = self.size.width,
                height = self.size.height,
                "skipping render for empty view"
            );
            return Ok(());
        }
        self.renderer.render(&self.scene)
    }

    #[must_use]
    pub fn scene(&self) -> &DrawList {
        &self.scene
    }

    #[must_use]
    pub fn viewport(&self) -> Option<&SharedViewport> {
        self.viewport.as_ref()
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.viewport.is_some()
    }

    #[must_use]
    pub fn overlay_count(&self) -> usize {
        self.overlays.len()
    }

    #[must_use]
    pub fn overlay_ids(&self) -> Vec<&str> {
        self.overlays.iter().map(|overlay| overlay.id()).collect()
    }

    #[must_use]
    pub fn size(&self) -> ViewSize {
        self.size
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn emit(&mut self, event: GraphEvent) {
        trace!(?event, "emitting graph event");
        for (_, observer) in &mut self.observers {
            observer(&event);
        }
    }
}
