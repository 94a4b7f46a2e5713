//! Logging setup.
//!
//! The crate logs through `tracing`. Hosts that do not install their own
//! subscriber can call [`init`] to get a formatted subscriber filtered by
//! `RUST_LOG` (default `moveable=info`).

use crate::constants::DEFAULT_LOG_FILTER;
use tracing_subscriber::EnvFilter;

/// Install a global fmt subscriber. Does nothing if one is already set.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
