//! Error types for gesture operations
//!
//! Configuration mistakes (unknown direction tokens, incomplete request
//! parameters) are not errors; they are ignored or reported as `false`.
//! What remains is surface failures and failures raised by user handlers,
//! which are propagated to the caller unchanged.

use crate::handlers::EventType;
use crate::types::ElementId;
use thiserror::Error;

/// Errors that can occur while driving a gesture
#[derive(Error, Debug)]
pub enum GestureError {
    /// A user-registered handler returned an error
    #[error("{event} handler failed: {source}")]
    Handler {
        event: EventType,
        #[source]
        source: anyhow::Error,
    },

    /// The rendering surface does not know this element
    #[error("unknown element {0}")]
    UnknownElement(ElementId),

    /// The rendering surface failed to perform an operation
    #[error("surface error: {0}")]
    Surface(String),

    /// Options could not be parsed from JSON
    #[error("invalid options: {0}")]
    InvalidOptions(#[from] serde_json::Error),

    /// Request kind is neither `draggable` nor `resizable`
    #[error("unknown request kind: {0:?}")]
    InvalidRequestKind(String),
}

/// Result type alias for gesture operations
pub type GestureResult<T> = Result<T, GestureError>;

impl GestureError {
    pub(crate) fn handler(event: EventType, source: anyhow::Error) -> Self {
        GestureError::Handler { event, source }
    }

    /// The event type whose handler failed, if this is a handler error
    pub fn event_type(&self) -> Option<EventType> {
        match self {
            GestureError::Handler { event, .. } => Some(*event),
            _ => None,
        }
    }
}
