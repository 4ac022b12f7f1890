//! Observability for the phonebook server
//!
//! Logging goes through `tracing`. Lifecycle and write events are typed
//! [`Event`]s recorded in the `event` field.
//!
//! # Usage
//!
//! ```ignore
//! use phonebook::observability::{init_tracing, log_event, Event};
//!
//! init_tracing("info")?;
//! log_event(Event::Serving);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{build_filter, init_tracing};

use thiserror::Error;

/// Result type for observability setup
pub type ObservabilityResult<T> = Result<T, ObservabilityError>;

/// Observability errors
///
/// Only raised during setup. Logging itself never fails a request.
#[derive(Debug, Clone, Error)]
pub enum ObservabilityError {
    #[error("Invalid log filter '{filter}': {reason}")]
    InvalidFilter { filter: String, reason: String },

    #[error("Tracing already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Log a lifecycle event
pub fn log_event(event: Event) {
    tracing::info!(event = %event);
}
