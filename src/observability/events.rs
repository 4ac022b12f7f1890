//! Observable events for the phonebook server
//!
//! Events are explicit and typed. Each one is emitted as the `event` field
//! of a `tracing` record.

use std::fmt;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Boot & Lifecycle
    /// Configuration loaded
    ConfigLoaded,
    /// Listener bound, ready to serve
    Serving,
    /// Shutdown signal received
    ShutdownStart,
    /// Server stopped accepting requests
    ShutdownComplete,

    // Store writes
    /// Company stored
    CompanyCreated,
    /// Company fields overwritten
    CompanyUpdated,
    /// Company removed
    CompanyDeleted,

    // Requests
    /// Request rejected with a client error
    RequestRejected,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::Serving => "PHONEBOOK_SERVING",
            Event::ShutdownStart => "SHUTDOWN_START",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",

            Event::CompanyCreated => "COMPANY_CREATED",
            Event::CompanyUpdated => "COMPANY_UPDATED",
            Event::CompanyDeleted => "COMPANY_DELETED",

            Event::RequestRejected => "REQUEST_REJECTED",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
