//! The carousel engine: yaw ownership, focus detection, layout and
//! navigation behind a single [`Carousel`] handle.
//!
//! # Frame flow
//!
//! ```text
//! pointer events ─► PointerProcessor ─► RotationController (mutates yaw)
//! next/prev ─────────────────────────► RotationController (sets target)
//! tick(frame) ─► RotationController::tick ─► FocusEvaluator ─► FocusEvent
//! ```
//!
//! The yaw is written only by the controller. During a tick the evaluator
//! reads it through a shared reference after the controller has advanced.

mod animation;
mod controller;
mod focus;
mod layout;
mod navigation;
mod state;
mod velocity;

use std::fmt;

pub use animation::RotationAnimation;
pub use controller::RotationController;
pub use focus::{angular_offset, is_within, FocusEvaluator, FocusEvent};
pub use layout::{resolve, Layout, ModelTransform};
pub use state::CarouselState;
pub use velocity::VelocityTracker;

use crate::catalog::{Backdrop, ModelCatalog, ModelEntry};
use crate::input::{DragAction, PointerEvent, PointerId, PointerProcessor};
use crate::options::Options;
use crate::util::frame::Frame;

/// Callback invoked with every committed focus change.
pub type FocusListener = Box<dyn FnMut(&FocusEvent)>;

/// One mounted carousel.
///
/// # Example
///
/// ```
/// use carousel::carousel::Carousel;
/// use carousel::catalog::ModelCatalog;
/// use carousel::options::Options;
/// use carousel::util::frame::Frame;
///
/// let mut carousel = Carousel::new(ModelCatalog::portfolio(), Options::default());
/// let _ = carousel.next();
/// for i in 0..40 {
///     let _ = carousel.tick(Frame::at(f64::from(i) * 16.0, 0.016));
/// }
/// assert!(carousel.focused().is_some());
/// ```
pub struct Carousel {
    catalog: ModelCatalog,
    options: Options,
    layout: Layout,
    controller: RotationController,
    focus: FocusEvaluator,
    pointer: PointerProcessor,
    listener: Option<FocusListener>,
}

impl Carousel {
    /// Mount a carousel facing the catalog's featured model (or the first
    /// model when none is featured).
    #[must_use]
    pub fn new(catalog: ModelCatalog, options: Options) -> Self {
        let layout = resolve(catalog.entries(), &options.layout);
        let controller =
            RotationController::new(options.rotation.clone(), catalog.len());
        let focus = FocusEvaluator::new(options.focus.clone());
        let mut carousel = Self {
            catalog,
            options,
            layout,
            controller,
            focus,
            pointer: PointerProcessor::new(),
            listener: None,
        };
        carousel.face_featured();
        carousel
    }

    /// Register the callback that receives focus changes. Replaces any
    /// previous listener.
    pub fn set_focus_listener(&mut self, listener: impl FnMut(&FocusEvent) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Replace the model list. Layout is recomputed, focus is forgotten and
    /// the carousel jumps to the new featured model.
    pub fn set_catalog(&mut self, catalog: ModelCatalog) {
        log::info!("carousel catalog replaced ({} models)", catalog.len());
        self.catalog = catalog;
        self.layout = resolve(self.catalog.entries(), &self.options.layout);
        self.controller.set_model_count(self.catalog.len());
        self.focus.reset();
        self.face_featured();
    }

    /// Replace all options. Layout is recomputed; rotation and focus
    /// settings apply from the next drag, animation or frame.
    pub fn set_options(&mut self, options: Options) {
        self.controller.set_options(options.rotation.clone());
        self.focus.set_options(options.focus.clone());
        self.layout = resolve(self.catalog.entries(), &options.layout);
        self.options = options;
    }

    /// Feed one pointer event from the render surface.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match self.pointer.handle_event(event) {
            Some(DragAction::Begin { x, time_ms }) => {
                self.controller.begin_drag(x, time_ms);
            }
            Some(DragAction::Update { x, time_ms }) => {
                self.controller.update_drag(x, time_ms);
            }
            Some(DragAction::End { time_ms }) => {
                let _ = self.controller.end_drag(time_ms);
            }
            None => {}
        }
    }

    /// Advance one rendered frame and evaluate focus.
    ///
    /// Returns the focus change committed on this frame, if any, after
    /// delivering it to the listener.
    pub fn tick(&mut self, frame: Frame) -> Option<FocusEvent> {
        self.controller.tick(frame);
        let event = self.focus.evaluate(
            &self.catalog,
            self.controller.angle(),
            frame.now_ms,
        )?;
        if let Some(listener) = self.listener.as_mut() {
            listener(&event);
        }
        Some(event)
    }

    /// Release pointer capture before the surface goes away. Returns the
    /// pointer the host must release, if a drag was in progress.
    pub fn detach(&mut self) -> Option<PointerId> {
        let released = self.pointer.release();
        if released.is_some() {
            self.controller.abort_drag();
        }
        released
    }

    /// Models in carousel order.
    #[must_use]
    pub fn catalog(&self) -> &ModelCatalog {
        &self.catalog
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Resting transforms of every model.
    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Read-only yaw state.
    #[must_use]
    pub fn state(&self) -> &CarouselState {
        self.controller.state()
    }

    /// Current yaw of the carousel group in radians.
    #[must_use]
    pub fn angle(&self) -> f32 {
        self.controller.angle()
    }

    /// Index of the committed focused model.
    #[must_use]
    pub fn focused_index(&self) -> Option<usize> {
        self.focus.committed()
    }

    /// The committed focused model.
    #[must_use]
    pub fn focused(&self) -> Option<&ModelEntry> {
        self.focused_index().and_then(|index| self.catalog.get(index))
    }

    /// Whether model `index` was inside the focus threshold on the last
    /// frame (before debouncing).
    #[must_use]
    pub fn is_focused(&self, index: usize) -> bool {
        self.focus.is_in_focus(index)
    }

    /// Background for the committed focused model.
    #[must_use]
    pub fn backdrop(&self) -> &Backdrop {
        self.catalog
            .backdrop_for(self.focused().map(|entry| entry.identity.as_str()))
    }

    fn face_featured(&mut self) {
        let index = self.catalog.featured_index().unwrap_or(0);
        if let Some(index) = self.controller.reset_to_index(index) {
            log::debug!("carousel mounted facing model #{index}");
        }
    }
}

impl fmt::Debug for Carousel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Carousel")
            .field("models", &self.catalog.len())
            .field("angle", &self.controller.angle())
            .field("focused", &self.focus.committed())
            .field("dragging", &self.controller.state().is_dragging())
            .field("has_listener", &self.listener.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::input::PointerId;

    fn frames(carousel: &mut Carousel, from_ms: f64, to_ms: f64) -> Vec<FocusEvent> {
        let mut events = Vec::new();
        let mut now = from_ms;
        while now <= to_ms {
            events.extend(carousel.tick(Frame::at(now, 1.0 / 60.0)));
            now += 16.0;
        }
        events
    }

    #[test]
    fn mounts_facing_featured_model() {
        let mut carousel = Carousel::new(ModelCatalog::portfolio(), Options::default());
        let events = frames(&mut carousel, 0.0, 200.0);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].identity.as_deref(), Some("/models/camera.glb"));
        assert_eq!(carousel.focused_index(), Some(1));
        assert!(matches!(carousel.backdrop(), Backdrop::Video { .. }));
    }

    #[test]
    fn listener_receives_committed_events() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut carousel = Carousel::new(ModelCatalog::portfolio(), Options::default());
        carousel.set_focus_listener(move |event| sink.borrow_mut().push(event.index));
        let _ = frames(&mut carousel, 0.0, 200.0);
        assert_eq!(*seen.borrow(), vec![Some(1)]);
    }

    #[test]
    fn pointer_drag_rotates_and_snaps() {
        let mut carousel = Carousel::new(ModelCatalog::portfolio(), Options::default());
        let start = carousel.angle();
        let id = PointerId(3);
        carousel.handle_pointer(PointerEvent::down(id, 0.0, 0.0, 0.0));
        carousel.handle_pointer(PointerEvent::moved(id, 20.0, 0.0, 400.0));
        assert!((carousel.angle() - start - 0.05).abs() < 1e-6);
        carousel.handle_pointer(PointerEvent::up(id, 20.0, 0.0, 800.0));
        assert!(carousel.state().animation().is_some());
        let _ = frames(&mut carousel, 800.0, 1300.0);
        assert!((carousel.angle() - start).abs() < 1e-6);
    }

    #[test]
    fn detach_releases_capture_mid_drag() {
        let mut carousel = Carousel::new(ModelCatalog::portfolio(), Options::default());
        carousel.handle_pointer(PointerEvent::down(PointerId(9), 0.0, 0.0, 0.0));
        assert!(carousel.state().is_dragging());
        assert_eq!(carousel.detach(), Some(PointerId(9)));
        assert!(!carousel.state().is_dragging());
        assert_eq!(carousel.detach(), None);
    }

    #[test]
    fn replacing_catalog_resets_focus_and_layout() {
        let mut carousel = Carousel::new(ModelCatalog::portfolio(), Options::default());
        let _ = frames(&mut carousel, 0.0, 200.0);
        carousel.set_catalog(ModelCatalog::default());
        assert_eq!(carousel.focused_index(), None);
        assert!(carousel.layout().items.is_empty());
        assert_eq!(carousel.tick(Frame::at(300.0, 0.016)), None);
        assert_eq!(carousel.backdrop(), &Backdrop::None);
    }

    #[test]
    fn set_options_recomputes_layout() {
        let mut carousel = Carousel::new(ModelCatalog::portfolio(), Options::default());
        let mut options = Options::default();
        options.layout.radius = 4.0;
        carousel.set_options(options);
        assert_eq!(carousel.options().layout.radius, 4.0);
        let spread = carousel
            .layout()
            .items
            .iter()
            .map(|t| t.position.z.abs())
            .fold(0.0_f32, f32::max);
        assert!(spread > 2.0);
    }

    #[test]
    fn off_ring_model_is_focused_like_any_other() {
        let mut carousel = Carousel::new(ModelCatalog::portfolio(), Options::default());
        let _ = frames(&mut carousel, 0.0, 200.0);
        assert_eq!(carousel.rotate_to_index(0), Some(0));
        let events = frames(&mut carousel, 216.0, 1400.0);

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].identity.as_deref(), Some("/models/logo-sweet-spot.glb"));
        assert!(events[0].description.is_some());
        assert_eq!(carousel.focused_index(), Some(0));
        assert!(matches!(carousel.backdrop(), Backdrop::Solid { .. }));
    }
}
