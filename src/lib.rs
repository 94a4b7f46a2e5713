//! Pointer-driven drag and resize gestures for on-screen elements.
//!
//! A [`GestureController`] attaches to one target element. It tracks drag
//! and resize gestures, computes translates and sizes, and hands them to
//! user handlers; the handlers perform the visual change. Element creation
//! and event routing go through a [`Surface`](surface::Surface) supplied by
//! the host.
//!
//! ```ignore
//! let mut controller = GestureController::new(target, Options::new().draggable(true), surface)?;
//! controller
//!     .on(Handler::drag_start(|start| {
//!         start.set((0.0, 0.0));
//!         Ok(())
//!     }))
//!     .on(Handler::drag(|event| {
//!         println!("{}", event.transform);
//!         Ok(())
//!     }));
//! ```

pub mod constants;
pub mod controller;
pub mod error;
pub mod handlers;
pub mod input;
pub mod log;
pub mod options;
pub mod style;
pub mod surface;
pub mod types;

pub use controller::{GestureController, RequestKind, RequestParams};
pub use error::{GestureError, GestureResult};
pub use handlers::{DragEvent, EventType, GestureStart, Handler, ResizeEvent};
pub use options::{Options, SetPolicy};
pub use surface::{Listener, MemorySurface, PointerEvent, PointerPhase};
pub use types::{Direction, DirectionSet, Directions, ElementId, Rect, Size, Vec2};
