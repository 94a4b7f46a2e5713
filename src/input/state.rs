//! Gesture state - the two session records owned by the controller.
//!
//! Drag and resize are independent machines with the same shape:
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Starting             (pointer-down on target / handle)
//! Starting -> Idle             (start handler called stop())
//! Starting -> Dragging         (move listener attached)
//! Dragging -> Idle             (document pointer-up, move listener detached)
//! ```
//!
//! `Starting` only exists while the start handler runs, so it is not stored.
//! A session value is created fully initialized once the start handler has
//! returned and is dropped at end; an update can never observe a session
//! without a start translate.

use crate::types::{Direction, ElementId, Size, Vec2};

/// State captured when a drag begins
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Translate the element had when the gesture started
    pub start_translate: Vec2,
    /// Pointer page position at pointer-down
    pub start_pointer: Vec2,
    /// Element origin (bounding box + scroll) at pointer-down
    pub start_origin: Vec2,
}

/// State captured when a resize begins
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeSession {
    pub start_translate: Vec2,
    pub start_pointer: Vec2,
    pub start_origin: Vec2,
    /// Element size at pointer-down
    pub start_size: Size,
    /// Direction of the handle that was struck
    pub handle: Direction,
    /// The handle element itself
    pub handle_element: ElementId,
}

/// Both session slots. `Some` means the gesture is active and its move
/// listener is attached.
#[derive(Debug, Clone, Default)]
pub struct GestureState {
    drag: Option<DragSession>,
    resize: Option<ResizeSession>,
}

impl GestureState {
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn is_resizing(&self) -> bool {
        self.resize.is_some()
    }

    /// Returns true if neither gesture is active
    pub fn is_idle(&self) -> bool {
        self.drag.is_none() && self.resize.is_none()
    }

    pub fn drag(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    pub fn resize(&self) -> Option<&ResizeSession> {
        self.resize.as_ref()
    }

    pub fn start_drag(&mut self, session: DragSession) {
        self.drag = Some(session);
    }

    pub fn start_resize(&mut self, session: ResizeSession) {
        self.resize = Some(session);
    }

    /// Clear the drag session, returning it if one was active
    pub fn end_drag(&mut self) -> Option<DragSession> {
        self.drag.take()
    }

    /// Clear the resize session, returning it if one was active
    pub fn end_resize(&mut self) -> Option<ResizeSession> {
        self.resize.take()
    }

    /// Reset both machines to Idle
    pub fn reset(&mut self) {
        self.drag = None;
        self.resize = None;
    }
}
