//! Tracing subscriber setup
//!
//! One log line = one event. `RUST_LOG`, when set, takes precedence over the
//! configured filter.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use super::{ObservabilityError, ObservabilityResult};

/// Build the level filter, preferring `RUST_LOG` over `default_filter`
pub fn build_filter(default_filter: &str) -> ObservabilityResult<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .map_err(|e| ObservabilityError::InvalidFilter {
            filter: default_filter.to_string(),
            reason: e.to_string(),
        })
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_tracing(default_filter: &str) -> ObservabilityResult<()> {
    let filter = build_filter(default_filter)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .try_init()
        .map_err(|e| ObservabilityError::AlreadyInitialized(e.to_string()))
}
