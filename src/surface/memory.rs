//! Headless surface.
//!
//! Keeps an element tree with ids, inline styles and bounding boxes, and
//! routes synthetic pointer events the way a browser would: pointer-down
//! bubbles from the event target up through its ancestors, move and release
//! go to document listeners. Tests and non-browser hosts drive a controller
//! through [`GestureController::simulate`].

use crate::controller::GestureController;
use crate::error::{GestureError, GestureResult};
use crate::surface::{EventSurface, Listener, PointerEvent, PointerPhase, RenderSurface};
use crate::types::{ElementId, Rect, Size, Vec2};
use std::collections::HashMap;

/// One element of the in-memory tree
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryElement {
    /// DOM `id` attribute
    pub dom_id: Option<String>,
    pub parent: Option<ElementId>,
    pub children: Vec<ElementId>,
    pub style_text: String,
    pub transform: Option<String>,
    /// Bounding box in viewport coordinates
    pub rect: Rect,
}

#[derive(Debug, Default)]
pub struct MemorySurface {
    elements: HashMap<ElementId, MemoryElement>,
    next_id: u64,
    /// Active subscriptions in registration order
    listeners: Vec<Listener>,
    scroll: Vec2,
    /// Every subscribe/unsubscribe call, for ordering assertions
    journal: Vec<(bool, Listener)>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a free-standing element, e.g. the target a controller attaches to.
    pub fn insert_element(&mut self, rect: Rect) -> ElementId {
        let id = self.allocate();
        self.elements.insert(
            id,
            MemoryElement {
                rect,
                ..MemoryElement::default()
            },
        );
        id
    }

    pub fn element(&self, id: ElementId) -> Option<&MemoryElement> {
        self.elements.get(&id)
    }

    /// Look an element up by its DOM id.
    pub fn find_by_dom_id(&self, dom_id: &str) -> Option<ElementId> {
        self.elements
            .iter()
            .find(|(_, el)| el.dom_id.as_deref() == Some(dom_id))
            .map(|(id, _)| *id)
    }

    pub fn set_rect(&mut self, id: ElementId, rect: Rect) -> GestureResult<()> {
        self.get_mut(id)?.rect = rect;
        Ok(())
    }

    /// Document scroll offset added to bounding boxes by `origin`.
    pub fn set_scroll(&mut self, x: f64, y: f64) {
        self.scroll = Vec2::new(x, y);
    }

    pub fn listeners(&self) -> &[Listener] {
        &self.listeners
    }

    pub fn is_subscribed(&self, listener: Listener) -> bool {
        self.listeners.contains(&listener)
    }

    /// `(subscribed, listener)` for every call made, oldest first.
    pub fn journal(&self) -> &[(bool, Listener)] {
        &self.journal
    }

    /// Listeners that a browser would invoke for `event`, in dispatch order.
    pub fn listeners_for(&self, event: &PointerEvent) -> Vec<Listener> {
        match event.phase {
            PointerPhase::Down => {
                let mut hit = Vec::new();
                let mut current = event.target;
                while let Some(element) = current {
                    hit.extend(
                        self.listeners
                            .iter()
                            .copied()
                            .filter(|l| l.phase() == PointerPhase::Down && l.element() == Some(element)),
                    );
                    current = self.elements.get(&element).and_then(|el| el.parent);
                }
                hit
            }
            phase => self
                .listeners
                .iter()
                .copied()
                .filter(|l| l.phase() == phase)
                .collect(),
        }
    }

    fn allocate(&mut self) -> ElementId {
        self.next_id += 1;
        ElementId(self.next_id)
    }

    fn get(&self, id: ElementId) -> GestureResult<&MemoryElement> {
        self.elements.get(&id).ok_or(GestureError::UnknownElement(id))
    }

    fn get_mut(&mut self, id: ElementId) -> GestureResult<&mut MemoryElement> {
        self.elements
            .get_mut(&id)
            .ok_or(GestureError::UnknownElement(id))
    }
}

impl RenderSurface for MemorySurface {
    fn create_element(&mut self) -> GestureResult<ElementId> {
        let id = self.allocate();
        self.elements.insert(id, MemoryElement::default());
        Ok(id)
    }

    fn set_element_id(&mut self, element: ElementId, id: &str) -> GestureResult<()> {
        self.get_mut(element)?.dom_id = Some(id.to_string());
        Ok(())
    }

    fn append_child(&mut self, parent: ElementId, child: ElementId) -> GestureResult<()> {
        self.get(parent)?;
        let previous = self.get(child)?.parent;
        if let Some(previous) = previous {
            self.get_mut(previous)?.children.retain(|c| *c != child);
        }
        self.get_mut(child)?.parent = Some(parent);
        self.get_mut(parent)?.children.push(child);
        Ok(())
    }

    fn set_style_text(&mut self, element: ElementId, text: &str) -> GestureResult<()> {
        self.get_mut(element)?.style_text = text.to_string();
        Ok(())
    }

    fn set_transform(&mut self, element: ElementId, transform: &str) -> GestureResult<()> {
        self.get_mut(element)?.transform = Some(transform.to_string());
        Ok(())
    }

    fn origin(&self, element: ElementId) -> GestureResult<Vec2> {
        Ok(self.get(element)?.rect.origin + self.scroll)
    }

    fn size(&self, element: ElementId) -> GestureResult<Size> {
        Ok(self.get(element)?.rect.size)
    }
}

impl EventSurface for MemorySurface {
    fn subscribe(&mut self, listener: Listener) -> GestureResult<()> {
        self.journal.push((true, listener));
        if !self.listeners.contains(&listener) {
            self.listeners.push(listener);
        }
        Ok(())
    }

    fn unsubscribe(&mut self, listener: Listener) {
        self.journal.push((false, listener));
        self.listeners.retain(|l| *l != listener);
    }
}

impl GestureController<MemorySurface> {
    /// Deliver a synthetic pointer event to every listener it would reach.
    ///
    /// Listeners removed by an earlier dispatch of the same event are
    /// skipped. Returns how many listeners ran.
    pub fn simulate(&mut self, event: &PointerEvent) -> GestureResult<usize> {
        let mut delivered = 0;
        for listener in self.surface.listeners_for(event) {
            if !self.surface.is_subscribed(listener) {
                continue;
            }
            self.dispatch(listener, event)?;
            delivered += 1;
        }
        Ok(delivered)
    }
}
