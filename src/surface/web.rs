//! DOM surface for browser hosts (`wasm32` only).
//!
//! Elements are real `web_sys::Element`s kept in a registry keyed by
//! [`ElementId`]. Each subscribed [`Listener`] owns a JS closure that upgrades
//! a weak handle to the controller and forwards the event to
//! [`GestureController::dispatch`]. Start listeners bind `pointerdown` on
//! their element; move and release listeners bind on `document.documentElement`.
//!
//! Use [`attach`] to build a controller wired to its surface.

use crate::controller::GestureController;
use crate::error::{GestureError, GestureResult};
use crate::options::Options;
use crate::surface::{EventSurface, Listener, PointerEvent, PointerPhase, RenderSurface};
use crate::types::{ElementId, Size, Vec2};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use tracing::{error, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, MouseEvent};

/// Controller bound to the DOM
pub type WebController = GestureController<WebSurface>;

type ControllerSlot = Rc<RefCell<Weak<RefCell<WebController>>>>;

struct Subscription {
    target: EventTarget,
    closure: Closure<dyn FnMut(Event)>,
}

pub struct WebSurface {
    document: Document,
    root: Element,
    elements: HashMap<ElementId, Element>,
    next_id: u64,
    subscriptions: HashMap<Listener, Subscription>,
    controller: ControllerSlot,
}

/// Make `target` draggable/resizable per `options`.
///
/// The returned controller is shared with the DOM listeners; they only hold
/// a weak reference, so dropping the last `Rc` detaches everything.
pub fn attach(target: Element, options: Options) -> GestureResult<Rc<RefCell<WebController>>> {
    let mut surface = WebSurface::new()?;
    let slot = surface.controller.clone();
    let target = surface.adopt(target);

    let controller = Rc::new(RefCell::new(GestureController::new(target, options, surface)?));
    *slot.borrow_mut() = Rc::downgrade(&controller);
    Ok(controller)
}

impl WebSurface {
    pub fn new() -> GestureResult<Self> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| GestureError::Surface("no document available".to_string()))?;
        let root = document
            .document_element()
            .ok_or_else(|| GestureError::Surface("document has no root element".to_string()))?;

        Ok(Self {
            document,
            root,
            elements: HashMap::new(),
            next_id: 0,
            subscriptions: HashMap::new(),
            controller: Rc::new(RefCell::new(Weak::new())),
        })
    }

    /// Register an existing DOM element and get its handle.
    pub fn adopt(&mut self, element: Element) -> ElementId {
        let value: &JsValue = element.as_ref();
        if let Some(id) = self.id_of(value) {
            return id;
        }
        self.next_id += 1;
        let id = ElementId(self.next_id);
        self.elements.insert(id, element);
        id
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(&id)
    }

    fn get(&self, id: ElementId) -> GestureResult<&Element> {
        self.elements.get(&id).ok_or(GestureError::UnknownElement(id))
    }

    fn id_of(&self, target: &JsValue) -> Option<ElementId> {
        self.elements
            .iter()
            .find(|(_, element)| {
                let value: &JsValue = element.as_ref();
                value == target
            })
            .map(|(id, _)| *id)
    }

    fn scroll(&self) -> Vec2 {
        Vec2::new(self.root.scroll_left() as f64, self.root.scroll_top() as f64)
    }

    fn event_target(&self, listener: Listener) -> GestureResult<EventTarget> {
        match listener.element() {
            Some(id) => Ok(EventTarget::from(self.get(id)?.clone())),
            None => Ok(EventTarget::from(self.root.clone())),
        }
    }

    /// Translate a DOM event into the controller's event type.
    fn pointer_event(&self, phase: PointerPhase, event: &Event) -> PointerEvent {
        let (client, page) = match event.dyn_ref::<MouseEvent>() {
            Some(mouse) => (
                Vec2::new(mouse.client_x() as f64, mouse.client_y() as f64),
                Vec2::new(mouse.page_x() as f64, mouse.page_y() as f64),
            ),
            None => (Vec2::ZERO, Vec2::ZERO),
        };
        let target = event.target().and_then(|t| {
            let value: &JsValue = t.as_ref();
            self.id_of(value)
        });

        PointerEvent {
            phase,
            client,
            page,
            target,
        }
    }
}

fn event_name(phase: PointerPhase) -> &'static str {
    match phase {
        PointerPhase::Down => "pointerdown",
        PointerPhase::Move => "pointermove",
        PointerPhase::Up => "pointerup",
    }
}

fn js_error(value: JsValue) -> GestureError {
    GestureError::Surface(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

impl RenderSurface for WebSurface {
    fn create_element(&mut self) -> GestureResult<ElementId> {
        let element = self.document.create_element("div").map_err(js_error)?;
        Ok(self.adopt(element))
    }

    fn set_element_id(&mut self, element: ElementId, id: &str) -> GestureResult<()> {
        self.get(element)?.set_id(id);
        Ok(())
    }

    fn append_child(&mut self, parent: ElementId, child: ElementId) -> GestureResult<()> {
        let parent = self.get(parent)?;
        let child = self.get(child)?;
        parent.append_child(child).map_err(js_error)?;
        Ok(())
    }

    fn set_style_text(&mut self, element: ElementId, text: &str) -> GestureResult<()> {
        self.get(element)?
            .set_attribute("style", text)
            .map_err(js_error)
    }

    fn set_transform(&mut self, element: ElementId, transform: &str) -> GestureResult<()> {
        let html = self
            .get(element)?
            .dyn_ref::<HtmlElement>()
            .ok_or_else(|| GestureError::Surface(format!("element {element} is not an HTML element")))?;
        html.style()
            .set_property("transform", transform)
            .map_err(js_error)
    }

    fn origin(&self, element: ElementId) -> GestureResult<Vec2> {
        let rect = self.get(element)?.get_bounding_client_rect();
        Ok(Vec2::new(rect.left(), rect.top()) + self.scroll())
    }

    fn size(&self, element: ElementId) -> GestureResult<Size> {
        let rect = self.get(element)?.get_bounding_client_rect();
        Ok(Size::new(rect.width(), rect.height()))
    }
}

impl EventSurface for WebSurface {
    fn subscribe(&mut self, listener: Listener) -> GestureResult<()> {
        if self.subscriptions.contains_key(&listener) {
            return Ok(());
        }
        let target = self.event_target(listener)?;

        let slot = self.controller.clone();
        let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let Some(shared) = slot.borrow().upgrade() else {
                return;
            };
            // A handler that re-enters the DOM event loop synchronously would
            // find the controller borrowed; such nested events are dropped.
            let Ok(mut controller) = shared.try_borrow_mut() else {
                warn!(?listener, "Controller busy, nested event dropped");
                return;
            };
            let pointer = controller.surface().pointer_event(listener.phase(), &event);
            if let Err(err) = controller.dispatch(listener, &pointer) {
                error!(%err, ?listener, "Gesture dispatch failed");
            }
        });

        target
            .add_event_listener_with_callback(
                event_name(listener.phase()),
                closure.as_ref().unchecked_ref(),
            )
            .map_err(|err| {
                warn!(?listener, error = ?err, "addEventListener failed");
                js_error(err)
            })?;
        self.subscriptions
            .insert(listener, Subscription { target, closure });
        Ok(())
    }

    fn unsubscribe(&mut self, listener: Listener) {
        let Some(subscription) = self.subscriptions.remove(&listener) else {
            return;
        };
        if let Err(err) = subscription.target.remove_event_listener_with_callback(
            event_name(listener.phase()),
            subscription.closure.as_ref().unchecked_ref(),
        ) {
            warn!(?listener, error = ?err, "removeEventListener failed");
        }
    }
}

impl Drop for WebSurface {
    fn drop(&mut self) {
        let listeners: Vec<Listener> = self.subscriptions.keys().copied().collect();
        for listener in listeners {
            self.unsubscribe(listener);
        }
    }
}
