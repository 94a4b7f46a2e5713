//! Resize operations - handle overlay, pointer-driven and requested resizes.
//!
//! ## Handles
//!
//! Every enabled direction gets a handle element inside one overlay
//! container appended to the target. A single pointer-down listener on the
//! container starts resizes; the struck handle is recovered from the event
//! target. Handles supplied by the caller are not re-created and get their
//! own pointer-down listener.

use crate::constants::{CONTAINER_DOM_ID, DEFAULT_THRESHOLD, HANDLE_DOM_ID_PREFIX};
use crate::controller::{GestureController, RequestParams, StartOutcome};
use crate::error::GestureResult;
use crate::handlers::{EventType, ResizeEvent};
use crate::input::coords::GestureMath;
use crate::input::state::ResizeSession;
use crate::style::{DEFAULT_STYLE, Declarations};
use crate::surface::{Listener, PointerEvent, Surface};
use crate::types::{Direction, DirectionSet, Vec2};
use tracing::{debug, trace, warn};

/// Inline style of a handle: the stylesheet rule for its direction with the
/// thickness set to `threshold` pixels. Edge handles get one thick axis,
/// corner handles both. A threshold that is not a positive finite number
/// falls back to [`DEFAULT_THRESHOLD`].
pub fn handle_style(direction: Direction, threshold: f64) -> Declarations {
    let mut declarations = DEFAULT_STYLE
        .rule(&format!("#{HANDLE_DOM_ID_PREFIX}{direction}"))
        .cloned()
        .unwrap_or_default();

    let threshold = if threshold.is_finite() && threshold > 0.0 {
        threshold
    } else {
        DEFAULT_THRESHOLD
    };
    let thickness = format!("{threshold}px");
    match direction {
        Direction::N | Direction::S => declarations.set("height", thickness),
        Direction::E | Direction::W => declarations.set("width", thickness),
        Direction::NE | Direction::NW | Direction::SE | Direction::SW => {
            declarations.set("width", thickness.clone());
            declarations.set("height", thickness);
        }
    }
    declarations
}

impl<S: Surface> GestureController<S> {
    pub(crate) fn setup_handles(&mut self) -> GestureResult<()> {
        self.directions = DirectionSet::parse(self.options.directions.as_ref());

        let container = self.surface.create_element()?;
        self.surface.set_element_id(container, CONTAINER_DOM_ID)?;
        let container_style = DEFAULT_STYLE
            .rule(&format!("#{CONTAINER_DOM_ID}"))
            .map(Declarations::to_style_text)
            .unwrap_or_default();
        self.surface.set_style_text(container, &container_style)?;
        self.surface.append_child(self.target, container)?;
        self.container = Some(container);
        self.attach(Listener::ResizeStart(container))?;

        let requested: Vec<_> = self.directions.iter().collect();
        for (direction, supplied) in requested {
            if let Some(handle) = supplied {
                self.attach(Listener::ResizeStart(handle))?;
                continue;
            }

            let handle = self.surface.create_element()?;
            self.surface
                .set_element_id(handle, &format!("{HANDLE_DOM_ID_PREFIX}{direction}"))?;
            let style = handle_style(direction, self.options.threshold);
            self.surface.set_style_text(handle, &style.to_style_text())?;
            self.surface.append_child(container, handle)?;
            self.directions.set_handle(direction, handle);
        }

        debug!(
            handles = self.directions.len(),
            threshold = self.options.threshold,
            "Resize handles created"
        );
        Ok(())
    }

    pub(crate) fn begin_resize(&mut self, event: &PointerEvent) -> GestureResult<()> {
        if self.state.is_resizing() {
            return Ok(());
        }

        let struck = event
            .target
            .and_then(|element| self.directions.direction_of(element).map(|d| (element, d)));
        let Some((handle_element, handle)) = struck else {
            warn!(element = ?event.target, "Resize pointer-down did not hit a handle");
            return Ok(());
        };

        let start_pointer = event.page;
        let start_origin = self.surface.origin(self.target)?;
        let start_size = self.surface.size(self.target)?;

        let recorded = match self.run_start(EventType::ResizeStart, Some(event), true)? {
            StartOutcome::Stopped => return Ok(()),
            StartOutcome::Proceed(recorded) => recorded,
        };
        let start_translate = recorded.unwrap_or_else(|| {
            debug!("resizeStart did not call set(), starting from element origin");
            start_origin
        });

        self.attach(Listener::ResizeMove)?;
        self.last_resize_translate = Some(start_translate);
        self.state.start_resize(ResizeSession {
            start_translate,
            start_pointer,
            start_origin,
            start_size,
            handle,
            handle_element,
        });

        debug!(%handle, width = start_size.width, height = start_size.height, "Resize started");
        Ok(())
    }

    pub(crate) fn update_resize(&mut self, event: &PointerEvent) -> GestureResult<()> {
        let Some(session) = self.state.resize().copied() else {
            return Ok(());
        };

        let geometry = GestureMath::resize(
            session.handle,
            event.page - session.start_pointer,
            session.start_size,
            session.start_translate,
        );
        trace!(
            width = geometry.size.width,
            height = geometry.size.height,
            "Resize update"
        );

        let payload = ResizeEvent {
            input: Some(event),
            target: self.target,
            direction: Some(session.handle),
            width: geometry.size.width,
            height: geometry.size.height,
            translate: geometry.translate,
            transform: geometry.translate.to_translate_css(),
        };
        self.handlers.fire_resize(&payload)
    }

    pub(crate) fn end_resize(&mut self) -> GestureResult<()> {
        if self.state.end_resize().is_none() {
            return Ok(());
        }
        self.detach(Listener::ResizeMove);
        debug!("Resize ended");
        self.handlers.fire_end(EventType::ResizeEnd)
    }

    /// Fire `resizeStart` -> `resize` -> `resizeEnd` for a requested size.
    pub(crate) fn resize_request(&mut self, params: &RequestParams) -> GestureResult<bool> {
        if !self.options.resizable {
            return Ok(false);
        }
        let (Some(width), Some(height)) = (params.width, params.height) else {
            return Ok(false);
        };

        match self.run_start(EventType::ResizeStart, None, false)? {
            StartOutcome::Stopped => return Ok(false),
            StartOutcome::Proceed(Some(recorded)) => self.last_resize_translate = Some(recorded),
            StartOutcome::Proceed(None) => {}
        }

        let translate = self.last_resize_translate.unwrap_or(Vec2::ZERO);
        debug!(width, height, "Resize requested");
        let payload = ResizeEvent {
            input: None,
            target: self.target,
            direction: None,
            width,
            height,
            translate,
            transform: translate.to_translate_css(),
        };
        self.handlers.fire_resize(&payload)?;
        self.handlers.fire_end(EventType::ResizeEnd)?;
        Ok(true)
    }
}
