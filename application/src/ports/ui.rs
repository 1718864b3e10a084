//! UI notification port
//!
//! Defines the interface for signaling request lifecycle state to the user
//! interface.

/// Callback surface for request lifecycle signals
///
/// Implementations live in the presentation layer and can render the
/// signals in various ways (spinner, status line, etc.). The surface is
/// write-only: callers signal state changes and never read them back.
pub trait UiNotifier: Send + Sync {
    /// Turn the busy indicator on or off
    fn set_loading(&self, loading: bool);

    /// Surface an error notification to the user
    fn set_error(&self, message: &str);
}

/// No-op notifier for when UI signaling is not needed
pub struct NoUi;

impl UiNotifier for NoUi {
    fn set_loading(&self, _loading: bool) {}
    fn set_error(&self, _message: &str) {}
}
