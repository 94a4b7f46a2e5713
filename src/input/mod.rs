//! Pointer input handling for the target element.
//!
//! This module implements both gesture machines of the controller.
//!
//! ## Architecture
//!
//! Each machine follows start -> update* -> end. Sessions live in an
//! explicit state record (`GestureState`) instead of loose flags, and the
//! per-move math is kept in pure functions so it can be tested without a
//! surface.
//!
//! ## Modules
//!
//! - `state` - Session records and the drag/resize state slots
//! - `coords` - Translate and resize math
//! - `drag` - Drag begin/update/end and drag requests
//! - `resize` - Handle setup, resize begin/update/end and resize requests

pub mod coords;
pub mod state;
mod drag;
mod resize;

pub use coords::{GestureMath, ResizeGeometry};
pub use resize::handle_style;
pub use state::{DragSession, GestureState, ResizeSession};
