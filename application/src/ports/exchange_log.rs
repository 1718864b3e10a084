//! Port for structured exchange logging.
//!
//! Defines the [`ExchangeLogger`] trait for recording question/answer
//! exchanges to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures the full
//! exchange transcript in a machine-readable format (JSONL).

use serde_json::Value;

/// A structured exchange event for logging.
///
/// Each event has a type string and a JSON payload containing
/// event-specific fields.
pub struct ExchangeEvent {
    /// Event type identifier (e.g., "question", "answer").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ExchangeEvent {
    /// Create a new exchange event.
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging exchange events to a structured log.
///
/// Implementations write each event as a single record (e.g., one JSONL
/// line). The `log` method is intentionally synchronous and non-fallible;
/// logging failures are silently ignored.
pub trait ExchangeLogger: Send + Sync {
    /// Record an exchange event.
    fn log(&self, event: ExchangeEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoExchangeLogger;

impl ExchangeLogger for NoExchangeLogger {
    fn log(&self, _event: ExchangeEvent) {}
}
