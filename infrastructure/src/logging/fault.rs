//! Fault sink backed by tracing.

use askdesk_application::ports::fault::FaultLog;
use std::fmt::Display;
use tracing::error;

/// Production [`FaultLog`] that emits a `tracing` error record.
///
/// Escaped failures stay visible in diagnostics without feeding back into
/// the UI.
pub struct TracingFaultLog;

impl FaultLog for TracingFaultLog {
    fn unhandled(&self, context: &str, error: &dyn Display) {
        error!("Unhandled error ({}): {}", context, error);
    }
}
