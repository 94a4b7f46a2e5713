//! The gesture controller.
//!
//! `GestureController` owns the handler registry, the two session slots and
//! the surface it drives. Hosts forward every event that reaches a
//! subscribed listener to [`GestureController::dispatch`]; the drag and
//! resize machines live in `input::drag` and `input::resize`.
//!
//! Listener bookkeeping goes through `attach`/`detach` so the controller's
//! own record, the surface's subscriptions and the session slots never
//! disagree: a move listener is attached exactly while its session exists.
//! The move listener is attached before the session is committed, so a
//! surface that refuses the subscription leaves the machine idle.

use crate::error::{GestureError, GestureResult};
use crate::handlers::{EventType, GestureStart, Handler, Handlers};
use crate::input::state::GestureState;
use crate::options::{Options, SetPolicy};
use crate::surface::{Listener, PointerEvent, Surface};
use crate::types::{DirectionSet, ElementId, Vec2};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

/// Which gesture a programmatic request drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestKind {
    Draggable,
    Resizable,
}

impl FromStr for RequestKind {
    type Err = GestureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draggable" => Ok(RequestKind::Draggable),
            "resizable" => Ok(RequestKind::Resizable),
            other => Err(GestureError::InvalidRequestKind(other.to_string())),
        }
    }
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestKind::Draggable => f.write_str("draggable"),
            RequestKind::Resizable => f.write_str("resizable"),
        }
    }
}

/// Parameters of a programmatic request.
///
/// A drag request needs `x`+`y` (absolute translate) or `deltaX`+`deltaY`
/// (offset from the last recorded start translate). A resize request needs
/// `width`+`height`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequestParams {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub delta_x: Option<f64>,
    pub delta_y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl RequestParams {
    pub fn position(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    pub fn delta(delta_x: f64, delta_y: f64) -> Self {
        Self {
            delta_x: Some(delta_x),
            delta_y: Some(delta_y),
            ..Self::default()
        }
    }

    pub fn size(width: f64, height: f64) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            ..Self::default()
        }
    }

    /// Parse parameters from a JSON object; unknown keys are ignored.
    pub fn from_json(json: &str) -> GestureResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Drag and resize gesture controller for one target element.
pub struct GestureController<S: Surface> {
    pub(crate) target: ElementId,
    pub(crate) options: Options,
    pub(crate) handlers: Handlers,
    pub(crate) directions: DirectionSet,
    /// Overlay holding the created handles, when resizing is enabled
    pub(crate) container: Option<ElementId>,
    pub(crate) state: GestureState,
    /// Start translate recorded by the most recent drag
    pub(crate) last_drag_translate: Option<Vec2>,
    /// Start translate recorded by the most recent resize
    pub(crate) last_resize_translate: Option<Vec2>,
    pub(crate) listeners: Vec<Listener>,
    pub(crate) surface: S,
}

impl<S: Surface> GestureController<S> {
    /// Attach the enabled gestures to `target`.
    ///
    /// Release listeners are registered here, once, and stay for the
    /// controller's lifetime. When resizing is enabled the handle overlay is
    /// built immediately.
    pub fn new(target: ElementId, options: Options, surface: S) -> GestureResult<Self> {
        let mut controller = Self {
            target,
            directions: DirectionSet::default(),
            options,
            handlers: Handlers::new(),
            container: None,
            state: GestureState::default(),
            last_drag_translate: None,
            last_resize_translate: None,
            listeners: Vec::new(),
            surface,
        };

        if controller.options.draggable {
            controller.attach(Listener::DragRelease)?;
            controller.attach(Listener::DragStart(target))?;
        }
        if controller.options.resizable {
            controller.attach(Listener::ResizeRelease)?;
            controller.setup_handles()?;
        }

        debug!(
            target_element = %target,
            draggable = controller.options.draggable,
            resizable = controller.options.resizable,
            "Gesture controller attached"
        );
        Ok(controller)
    }

    /// Register a handler. Re-registering an event type replaces the previous handler.
    pub fn on(&mut self, handler: Handler) -> &mut Self {
        trace!(event = %handler.event_type(), "Handler registered");
        self.handlers.insert(handler);
        self
    }

    /// Remove the handler for an event type.
    pub fn off(&mut self, event: EventType) -> &mut Self {
        self.handlers.remove(event);
        self
    }

    /// Entry point for the host: deliver an event that reached `listener`.
    ///
    /// Events for listeners the controller does not currently hold are
    /// dropped, so a stale host callback can never drive a finished gesture.
    pub fn dispatch(&mut self, listener: Listener, event: &PointerEvent) -> GestureResult<()> {
        if !self.is_subscribed(listener) {
            trace!(?listener, "Event for detached listener ignored");
            return Ok(());
        }

        match listener {
            Listener::DragStart(_) => self.begin_drag(event),
            Listener::DragMove => self.update_drag(event),
            Listener::DragRelease => self.end_drag(),
            Listener::ResizeStart(_) => self.begin_resize(event),
            Listener::ResizeMove => self.update_resize(event),
            Listener::ResizeRelease => self.end_resize(),
        }
    }

    /// Drive a gesture programmatically.
    ///
    /// Returns `Ok(false)` when the gesture is disabled, the parameters are
    /// incomplete, or the start handler stopped it. Handler errors propagate.
    pub fn request(&mut self, kind: RequestKind, params: &RequestParams) -> GestureResult<bool> {
        match kind {
            RequestKind::Draggable => self.drag_request(params),
            RequestKind::Resizable => self.resize_request(params),
        }
    }

    /// [`request`](Self::request) with the kind given by name. Unknown kinds return `Ok(false)`.
    pub fn request_named(&mut self, kind: &str, params: &RequestParams) -> GestureResult<bool> {
        match kind.parse::<RequestKind>() {
            Ok(kind) => self.request(kind, params),
            Err(_) => {
                debug!(kind, "Unknown request kind");
                Ok(false)
            }
        }
    }

    /// Unsubscribe every listener and drop any active session.
    ///
    /// No handler fires. Calling it twice is harmless.
    pub fn destroy(&mut self) {
        for listener in std::mem::take(&mut self.listeners) {
            self.surface.unsubscribe(listener);
        }
        self.state.reset();
        debug!(target_element = %self.target, "Gesture controller detached");
    }

    pub fn target(&self) -> ElementId {
        self.target
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn directions(&self) -> &DirectionSet {
        &self.directions
    }

    /// The handle overlay, if resizing is enabled
    pub fn container(&self) -> Option<ElementId> {
        self.container
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    pub fn is_resizing(&self) -> bool {
        self.state.is_resizing()
    }

    pub fn is_subscribed(&self, listener: Listener) -> bool {
        self.listeners.contains(&listener)
    }

    /// Listeners currently held, in subscription order.
    pub fn listeners(&self) -> &[Listener] {
        &self.listeners
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Give the surface back, e.g. after [`destroy`](Self::destroy).
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Subscribe `listener` on the surface and record it. Nothing is recorded
    /// if the surface refuses.
    pub(crate) fn attach(&mut self, listener: Listener) -> GestureResult<()> {
        if self.listeners.contains(&listener) {
            return Ok(());
        }
        self.surface.subscribe(listener)?;
        self.listeners.push(listener);
        trace!(?listener, "Listener attached");
        Ok(())
    }

    pub(crate) fn detach(&mut self, listener: Listener) {
        self.listeners.retain(|l| *l != listener);
        self.surface.unsubscribe(listener);
        trace!(?listener, "Listener detached");
    }

    /// Run a start handler and apply the `set()` policy.
    ///
    /// The transform is only written for pointer-driven gestures; requests
    /// pass `apply_transform = false` and leave every visual change to the handlers.
    pub(crate) fn run_start(
        &mut self,
        event_type: EventType,
        input: Option<&PointerEvent>,
        apply_transform: bool,
    ) -> GestureResult<StartOutcome> {
        let mut start = GestureStart::new(input);
        self.handlers.fire_start(event_type, &mut start)?;

        if start.is_stopped() {
            debug!(event = %event_type, "Gesture stopped by start handler");
            return Ok(StartOutcome::Stopped);
        }

        let recorded = start.recorded_translate();
        if let Some(translate) = recorded {
            if apply_transform && self.options.set_policy == SetPolicy::ApplyTransform {
                self.surface
                    .set_transform(self.target, &translate.to_translate_css())?;
            }
        }
        Ok(StartOutcome::Proceed(recorded))
    }
}

/// Verdict of a start handler
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum StartOutcome {
    /// `stop()` was called
    Stopped,
    /// Carry on, with the translate recorded by `set()` if it was called
    Proceed(Option<Vec2>),
}

impl<S: Surface + fmt::Debug> fmt::Debug for GestureController<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GestureController")
            .field("target", &self.target)
            .field("options", &self.options)
            .field("handlers", &self.handlers)
            .field("directions", &self.directions)
            .field("container", &self.container)
            .field("state", &self.state)
            .field("listeners", &self.listeners)
            .field("surface", &self.surface)
            .finish()
    }
}
