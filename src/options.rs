//! Controller configuration.
//!
//! `Options` is an immutable snapshot taken at construction. It can be built
//! in code or loaded from the same JSON object a browser host would pass:
//!
//! ```json
//! { "draggable": true, "resizable": true, "threshold": 8, "directions": "s,se" }
//! ```

use crate::constants::DEFAULT_THRESHOLD;
use crate::error::GestureResult;
use crate::types::Directions;
use serde::{Deserialize, Serialize};

/// What `set()` does beyond recording the start translate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SetPolicy {
    /// Also write `transform: translate(..)` onto the target element
    #[default]
    ApplyTransform,
    /// Only record the translate; the handler owns every visual change
    RecordOnly,
}

/// Recognized controller options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Options {
    /// Enables the drag state machine
    pub draggable: bool,
    /// Enables the resize state machine and its handles
    pub resizable: bool,
    /// Handle thickness in pixels; zero, negative or non-finite means the default
    pub threshold: f64,
    /// Enabled resize directions; `None` means all eight
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directions: Option<Directions>,
    pub set_policy: SetPolicy,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            draggable: false,
            resizable: false,
            threshold: DEFAULT_THRESHOLD,
            directions: None,
            set_policy: SetPolicy::default(),
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from a JSON object. Missing keys take their defaults.
    pub fn from_json(json: &str) -> GestureResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn draggable(mut self, draggable: bool) -> Self {
        self.draggable = draggable;
        self
    }

    pub fn resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn directions(mut self, directions: impl Into<Directions>) -> Self {
        self.directions = Some(directions.into());
        self
    }

    pub fn set_policy(mut self, policy: SetPolicy) -> Self {
        self.set_policy = policy;
        self
    }
}
