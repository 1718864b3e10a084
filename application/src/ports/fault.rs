//! Port for recording failures that escape the request pathway.
//!
//! Errors the request flow has already surfaced to the user still
//! propagate to whoever submitted the request. When no caller handles
//! them, they end up here instead of tearing down the process.

use std::fmt::Display;

/// Sink for errors that no caller handles.
///
/// The sink records and swallows. It never feeds the user interface;
/// user-visible error signaling happens inside the request pathway.
pub trait FaultLog: Send + Sync {
    /// Record an unhandled failure and the context it escaped from.
    fn unhandled(&self, context: &str, error: &dyn Display);
}

/// No-op implementation for tests.
pub struct NoFaultLog;

impl FaultLog for NoFaultLog {
    fn unhandled(&self, _context: &str, _error: &dyn Display) {}
}
