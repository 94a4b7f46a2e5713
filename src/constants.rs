//! Crate-wide constants.
//!
//! Centralizes default values and DOM identifiers so the controller,
//! stylesheet and surfaces agree on them.

// ============================================================================
// Resize Handles
// ============================================================================

/// Default handle thickness in pixels
pub const DEFAULT_THRESHOLD: f64 = 10.0;

/// DOM id of the overlay that holds every resize handle
pub const CONTAINER_DOM_ID: &str = "resizable-container";

/// Prefix of a handle's DOM id; the direction token is appended (`resizable-se`)
pub const HANDLE_DOM_ID_PREFIX: &str = "resizable-";

/// Characters that make up a direction token in the delimited form
pub const DIRECTION_CHARS: [char; 4] = ['s', 'w', 'n', 'e'];

// ============================================================================
// Logging
// ============================================================================

/// Filter used by `log::init` when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "moveable=info";
