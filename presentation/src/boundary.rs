//! Top-level error capture for binary entrypoints.
//!
//! Errors that reach the top of a mode (one-shot or chat) have either
//! already been surfaced to the user or are transport failures that stay
//! out of the UI by contract. The boundary records them through the
//! injected [`FaultLog`] and swallows them; the caller decides the exit
//! code from the returned `Option`.

use askdesk_application::ports::fault::FaultLog;
use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;

/// Runs a fallible future and logs any error through the injected sink.
pub struct ErrorBoundary {
    faults: Arc<dyn FaultLog>,
}

impl ErrorBoundary {
    pub fn new(faults: Arc<dyn FaultLog>) -> Self {
        Self { faults }
    }

    /// Run `fut`, returning its success value.
    ///
    /// On error, records it with `context` and returns `None`. Nothing is
    /// rendered; user-visible error signaling already happened inside the
    /// request pathway.
    pub async fn run<T, E, F>(&self, context: &str, fut: F) -> Option<T>
    where
        E: Display,
        F: Future<Output = Result<T, E>>,
    {
        match fut.await {
            Ok(value) => Some(value),
            Err(e) => {
                self.faults.unhandled(context, &e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct RecordingFaultLog {
        entries: Mutex<Vec<(String, String)>>,
    }

    impl RecordingFaultLog {
        fn new() -> Self {
            Self {
                entries: Mutex::new(Vec::new()),
            }
        }

        fn entries(&self) -> Vec<(String, String)> {
            self.entries.lock().unwrap().clone()
        }
    }

    impl FaultLog for RecordingFaultLog {
        fn unhandled(&self, context: &str, error: &dyn Display) {
            self.entries
                .lock()
                .unwrap()
                .push((context.to_string(), error.to_string()));
        }
    }

    #[tokio::test]
    async fn test_success_passes_through() {
        let faults = Arc::new(RecordingFaultLog::new());
        let boundary = ErrorBoundary::new(faults.clone());

        let value = boundary.run("test", async { Ok::<_, String>(7) }).await;

        assert_eq!(value, Some(7));
        assert!(faults.entries().is_empty());
    }

    #[tokio::test]
    async fn test_error_is_recorded_and_swallowed() {
        let faults = Arc::new(RecordingFaultLog::new());
        let boundary = ErrorBoundary::new(faults.clone());

        let value = boundary
            .run("one-shot question", async { Err::<(), _>("connection reset") })
            .await;

        assert!(value.is_none());
        let entries = faults.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].0, "one-shot question");
        assert_eq!(entries[0].1, "connection reset");
    }
}
