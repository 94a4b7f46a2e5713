//! User callbacks and the payloads they receive.
//!
//! Six event types exist, one per lifecycle phase of each gesture. The
//! registry holds at most one handler per type; registering again replaces
//! the previous handler. Handlers return `anyhow::Result<()>` and any error
//! is propagated out of the controller call that fired it.

use crate::error::{GestureError, GestureResult};
use crate::surface::PointerEvent;
use crate::types::{Direction, ElementId, Vec2};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventType {
    DragStart,
    Drag,
    DragEnd,
    ResizeStart,
    Resize,
    ResizeEnd,
}

impl EventType {
    pub fn as_str(self) -> &'static str {
        match self {
            EventType::DragStart => "dragStart",
            EventType::Drag => "drag",
            EventType::DragEnd => "dragEnd",
            EventType::ResizeStart => "resizeStart",
            EventType::Resize => "resize",
            EventType::ResizeEnd => "resizeEnd",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dragStart" => Ok(EventType::DragStart),
            "drag" => Ok(EventType::Drag),
            "dragEnd" => Ok(EventType::DragEnd),
            "resizeStart" => Ok(EventType::ResizeStart),
            "resize" => Ok(EventType::Resize),
            "resizeEnd" => Ok(EventType::ResizeEnd),
            other => Err(format!("unknown event type: {other}")),
        }
    }
}

// ============================================================================
// Payloads
// ============================================================================

/// Argument of `dragStart` / `resizeStart`.
///
/// `set` records the translate the gesture starts from; `stop` cancels the
/// gesture before any move listener is attached. Both only record intent;
/// the controller acts on it after the handler returns.
#[derive(Debug)]
pub struct GestureStart<'a> {
    input: Option<&'a PointerEvent>,
    translate: Option<Vec2>,
    stopped: bool,
}

impl<'a> GestureStart<'a> {
    pub(crate) fn new(input: Option<&'a PointerEvent>) -> Self {
        Self {
            input,
            translate: None,
            stopped: false,
        }
    }

    /// The pointer-down that began the gesture; `None` for programmatic requests.
    pub fn input_event(&self) -> Option<&PointerEvent> {
        self.input
    }

    pub fn client_x(&self) -> Option<f64> {
        self.input.map(|e| e.client.x)
    }

    pub fn client_y(&self) -> Option<f64> {
        self.input.map(|e| e.client.y)
    }

    pub fn page_x(&self) -> Option<f64> {
        self.input.map(|e| e.page.x)
    }

    pub fn page_y(&self) -> Option<f64> {
        self.input.map(|e| e.page.y)
    }

    /// Record the element's current translate. The last call wins.
    pub fn set(&mut self, position: impl Into<Vec2>) {
        self.translate = Some(position.into());
    }

    /// Cancel this gesture: no update or end callbacks will follow.
    pub fn stop(&mut self) {
        self.stopped = true;
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Translate recorded by `set`, if it was called.
    pub fn recorded_translate(&self) -> Option<Vec2> {
        self.translate
    }
}

/// Argument of `drag`.
#[derive(Debug, Clone)]
pub struct DragEvent<'a> {
    /// The pointer-move; `None` for programmatic requests
    pub input: Option<&'a PointerEvent>,
    pub target: ElementId,
    /// `translate(Xpx,Ypx)`
    pub transform: String,
    pub translate: Vec2,
}

/// Argument of `resize`.
#[derive(Debug, Clone)]
pub struct ResizeEvent<'a> {
    /// The pointer-move; `None` for programmatic requests
    pub input: Option<&'a PointerEvent>,
    pub target: ElementId,
    /// Handle that drives the gesture; `None` for programmatic requests
    pub direction: Option<Direction>,
    pub width: f64,
    pub height: f64,
    /// Translate that keeps the anchored edges in place
    pub translate: Vec2,
    pub transform: String,
}

// ============================================================================
// Handlers
// ============================================================================

type StartFn = Box<dyn FnMut(&mut GestureStart<'_>) -> anyhow::Result<()>>;
type DragFn = Box<dyn FnMut(&DragEvent<'_>) -> anyhow::Result<()>>;
type ResizeFn = Box<dyn FnMut(&ResizeEvent<'_>) -> anyhow::Result<()>>;
type EndFn = Box<dyn FnMut() -> anyhow::Result<()>>;

/// A callback tagged with the event type it handles.
pub enum Handler {
    DragStart(StartFn),
    Drag(DragFn),
    DragEnd(EndFn),
    ResizeStart(StartFn),
    Resize(ResizeFn),
    ResizeEnd(EndFn),
}

impl Handler {
    pub fn drag_start(f: impl FnMut(&mut GestureStart<'_>) -> anyhow::Result<()> + 'static) -> Self {
        Handler::DragStart(Box::new(f))
    }

    pub fn drag(f: impl FnMut(&DragEvent<'_>) -> anyhow::Result<()> + 'static) -> Self {
        Handler::Drag(Box::new(f))
    }

    pub fn drag_end(f: impl FnMut() -> anyhow::Result<()> + 'static) -> Self {
        Handler::DragEnd(Box::new(f))
    }

    pub fn resize_start(f: impl FnMut(&mut GestureStart<'_>) -> anyhow::Result<()> + 'static) -> Self {
        Handler::ResizeStart(Box::new(f))
    }

    pub fn resize(f: impl FnMut(&ResizeEvent<'_>) -> anyhow::Result<()> + 'static) -> Self {
        Handler::Resize(Box::new(f))
    }

    pub fn resize_end(f: impl FnMut() -> anyhow::Result<()> + 'static) -> Self {
        Handler::ResizeEnd(Box::new(f))
    }

    pub fn event_type(&self) -> EventType {
        match self {
            Handler::DragStart(_) => EventType::DragStart,
            Handler::Drag(_) => EventType::Drag,
            Handler::DragEnd(_) => EventType::DragEnd,
            Handler::ResizeStart(_) => EventType::ResizeStart,
            Handler::Resize(_) => EventType::Resize,
            Handler::ResizeEnd(_) => EventType::ResizeEnd,
        }
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Handler").field(&self.event_type()).finish()
    }
}

/// Event type -> handler registry. Missing handlers are skipped silently.
#[derive(Debug, Default)]
pub struct Handlers {
    map: HashMap<EventType, Handler>,
}

impl Handlers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler, replacing any previous one of the same type.
    pub fn insert(&mut self, handler: Handler) -> Option<Handler> {
        self.map.insert(handler.event_type(), handler)
    }

    pub fn remove(&mut self, event: EventType) -> Option<Handler> {
        self.map.remove(&event)
    }

    pub fn contains(&self, event: EventType) -> bool {
        self.map.contains_key(&event)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub(crate) fn fire_start(&mut self, event: EventType, start: &mut GestureStart<'_>) -> GestureResult<()> {
        match self.map.get_mut(&event) {
            Some(Handler::DragStart(f)) | Some(Handler::ResizeStart(f)) => {
                f(start).map_err(|e| GestureError::handler(event, e))
            }
            _ => Ok(()),
        }
    }

    pub(crate) fn fire_drag(&mut self, payload: &DragEvent<'_>) -> GestureResult<()> {
        match self.map.get_mut(&EventType::Drag) {
            Some(Handler::Drag(f)) => f(payload).map_err(|e| GestureError::handler(EventType::Drag, e)),
            _ => Ok(()),
        }
    }

    pub(crate) fn fire_resize(&mut self, payload: &ResizeEvent<'_>) -> GestureResult<()> {
        match self.map.get_mut(&EventType::Resize) {
            Some(Handler::Resize(f)) => f(payload).map_err(|e| GestureError::handler(EventType::Resize, e)),
            _ => Ok(()),
        }
    }

    pub(crate) fn fire_end(&mut self, event: EventType) -> GestureResult<()> {
        match self.map.get_mut(&event) {
            Some(Handler::DragEnd(f)) | Some(Handler::ResizeEnd(f)) => {
                f().map_err(|e| GestureError::handler(event, e))
            }
            _ => Ok(()),
        }
    }
}
