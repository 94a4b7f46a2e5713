//! Host collaborators: the rendering surface and the event surface.
//!
//! The controller never touches a DOM directly. It creates and styles
//! elements through [`RenderSurface`] and asks the host to route pointer
//! events to it through [`EventSurface`]. A host delivers every event that
//! reaches a subscribed [`Listener`] back to
//! [`GestureController::dispatch`](crate::GestureController::dispatch).
//!
//! ## Implementations
//!
//! - `memory` - headless surface with an element tree and event routing, used by tests
//! - `web` - DOM surface for `wasm32` hosts

pub mod memory;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use memory::{MemoryElement, MemorySurface};

use crate::error::GestureResult;
use crate::types::{ElementId, Size, Vec2};

/// Pointer lifecycle phase of an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
}

/// A pointer input event as seen by the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    /// Position relative to the viewport
    pub client: Vec2,
    /// Position relative to the document (client plus scroll)
    pub page: Vec2,
    /// Element the pointer was over, if the host knows it
    pub target: Option<ElementId>,
}

impl PointerEvent {
    /// An event with identical client and page positions (no scroll).
    pub fn new(phase: PointerPhase, x: f64, y: f64) -> Self {
        let position = Vec2::new(x, y);
        Self {
            phase,
            client: position,
            page: position,
            target: None,
        }
    }

    pub fn down(x: f64, y: f64) -> Self {
        Self::new(PointerPhase::Down, x, y)
    }

    pub fn moved(x: f64, y: f64) -> Self {
        Self::new(PointerPhase::Move, x, y)
    }

    pub fn up(x: f64, y: f64) -> Self {
        Self::new(PointerPhase::Up, x, y)
    }

    pub fn with_target(mut self, target: ElementId) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_client(mut self, x: f64, y: f64) -> Self {
        self.client = Vec2::new(x, y);
        self
    }
}

/// One event subscription the controller can hold.
///
/// Start listeners are scoped to an element (pointer-down bubbles up to
/// them); move and release listeners are document-global.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Listener {
    /// Pointer-down on the target element
    DragStart(ElementId),
    /// Pointer-down on the handle container or an external handle
    ResizeStart(ElementId),
    DragMove,
    ResizeMove,
    /// Registered once at construction
    DragRelease,
    /// Registered once at construction
    ResizeRelease,
}

impl Listener {
    pub fn phase(self) -> PointerPhase {
        match self {
            Listener::DragStart(_) | Listener::ResizeStart(_) => PointerPhase::Down,
            Listener::DragMove | Listener::ResizeMove => PointerPhase::Move,
            Listener::DragRelease | Listener::ResizeRelease => PointerPhase::Up,
        }
    }

    /// The element this listener is bound to; `None` for document listeners.
    pub fn element(self) -> Option<ElementId> {
        match self {
            Listener::DragStart(element) | Listener::ResizeStart(element) => Some(element),
            _ => None,
        }
    }
}

/// Element creation, styling and geometry.
pub trait RenderSurface {
    fn create_element(&mut self) -> GestureResult<ElementId>;

    /// Assign the DOM `id` attribute.
    fn set_element_id(&mut self, element: ElementId, id: &str) -> GestureResult<()>;

    fn append_child(&mut self, parent: ElementId, child: ElementId) -> GestureResult<()>;

    /// Replace the inline style text of an element.
    fn set_style_text(&mut self, element: ElementId, text: &str) -> GestureResult<()>;

    /// Set only the `transform` style property. Used by the `set()` convenience policy.
    fn set_transform(&mut self, element: ElementId, transform: &str) -> GestureResult<()>;

    /// Bounding box top-left plus document scroll.
    fn origin(&self, element: ElementId) -> GestureResult<Vec2>;

    /// Rendered size of an element.
    fn size(&self, element: ElementId) -> GestureResult<Size>;
}

/// Pointer event subscription management.
pub trait EventSurface {
    /// Start routing events for `listener`. An error means no listener was installed.
    fn subscribe(&mut self, listener: Listener) -> GestureResult<()>;

    /// Must be a no-op for a listener that is not subscribed.
    fn unsubscribe(&mut self, listener: Listener);
}

/// Everything a [`GestureController`](crate::GestureController) needs from its host.
pub trait Surface: RenderSurface + EventSurface {}

impl<T: RenderSurface + EventSurface> Surface for T {}
