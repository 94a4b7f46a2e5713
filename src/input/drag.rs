//! Drag operations - pointer-driven and requested.
//!
//! Pointer-down on the target begins a drag, the document move listener
//! reports translates, and the document release listener ends it. The move
//! listener exists only between begin and end.

use crate::controller::{GestureController, RequestParams, StartOutcome};
use crate::error::GestureResult;
use crate::handlers::{DragEvent, EventType};
use crate::input::coords::GestureMath;
use crate::input::state::DragSession;
use crate::surface::{Listener, PointerEvent, Surface};
use crate::types::{ElementId, Vec2};
use tracing::{debug, trace};

impl<S: Surface> GestureController<S> {
    pub(crate) fn begin_drag(&mut self, event: &PointerEvent) -> GestureResult<()> {
        if self.state.is_dragging() {
            return Ok(());
        }
        // Pointer-down on a resize handle bubbles up to the target; that is a resize
        if event.target.is_some_and(|t| self.is_overlay_element(t)) {
            trace!("Pointer-down on resize overlay, not starting drag");
            return Ok(());
        }

        let start_pointer = event.page;
        let start_origin = self.surface.origin(self.target)?;

        let recorded = match self.run_start(EventType::DragStart, Some(event), true)? {
            StartOutcome::Stopped => return Ok(()),
            StartOutcome::Proceed(recorded) => recorded,
        };
        let start_translate = recorded.unwrap_or_else(|| {
            debug!("dragStart did not call set(), starting from element origin");
            start_origin
        });

        self.attach(Listener::DragMove)?;
        self.last_drag_translate = Some(start_translate);
        self.state.start_drag(DragSession {
            start_translate,
            start_pointer,
            start_origin,
        });

        debug!(
            pointer_x = start_pointer.x,
            pointer_y = start_pointer.y,
            "Drag started"
        );
        Ok(())
    }

    pub(crate) fn update_drag(&mut self, event: &PointerEvent) -> GestureResult<()> {
        let Some(session) = self.state.drag().copied() else {
            return Ok(());
        };

        let translate =
            GestureMath::drag_translate(event.page, session.start_pointer, session.start_translate);
        trace!(x = translate.x, y = translate.y, "Drag update");

        let payload = DragEvent {
            input: Some(event),
            target: self.target,
            transform: translate.to_translate_css(),
            translate,
        };
        self.handlers.fire_drag(&payload)
    }

    pub(crate) fn end_drag(&mut self) -> GestureResult<()> {
        if self.state.end_drag().is_none() {
            return Ok(());
        }
        self.detach(Listener::DragMove);
        debug!("Drag ended");
        self.handlers.fire_end(EventType::DragEnd)
    }

    /// Fire `dragStart` -> `drag` -> `dragEnd` for a requested translate.
    ///
    /// The delta form offsets the start translate recorded before this call.
    pub(crate) fn drag_request(&mut self, params: &RequestParams) -> GestureResult<bool> {
        if !self.options.draggable {
            return Ok(false);
        }

        let translate = match (params.x, params.y, params.delta_x, params.delta_y) {
            (Some(x), Some(y), _, _) => Vec2::new(x, y),
            (_, _, Some(dx), Some(dy)) => {
                self.last_drag_translate.unwrap_or(Vec2::ZERO) + Vec2::new(dx, dy)
            }
            _ => return Ok(false),
        };

        match self.run_start(EventType::DragStart, None, false)? {
            StartOutcome::Stopped => return Ok(false),
            StartOutcome::Proceed(Some(recorded)) => self.last_drag_translate = Some(recorded),
            StartOutcome::Proceed(None) => {}
        }

        debug!(x = translate.x, y = translate.y, "Drag requested");
        let payload = DragEvent {
            input: None,
            target: self.target,
            transform: translate.to_translate_css(),
            translate,
        };
        self.handlers.fire_drag(&payload)?;
        self.handlers.fire_end(EventType::DragEnd)?;
        Ok(true)
    }

    /// True for the handle container and every handle element
    pub(crate) fn is_overlay_element(&self, element: ElementId) -> bool {
        self.container == Some(element) || self.directions.direction_of(element).is_some()
    }
}
