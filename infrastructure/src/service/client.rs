//! HTTP gateway to the answer service.

use crate::service::response::{Disposition, classify_response};
use askdesk_application::ports::qa_gateway::{GatewayError, QaGateway};
use askdesk_application::ports::ui::UiNotifier;
use askdesk_domain::{QuestionRequest, log_preview};
use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Default headers applied to every request.
///
/// Kept as a standalone function so the header set can be inspected
/// without building a client.
pub fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers
}

/// Build the HTTP client used for a single request.
///
/// A fresh client is constructed per call so every request starts from the
/// same default state.
pub fn with_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .default_headers(default_headers())
        .build()
}

/// HTTP adapter for the [`QaGateway`] port.
///
/// Routes every response through [`classify_response`]: structured service
/// errors are surfaced to the UI exactly once before the error is returned,
/// while transport failures are passed through untouched and never reach
/// the UI.
pub struct HttpQaGateway {
    base_url: String,
    ui: Arc<dyn UiNotifier>,
}

impl HttpQaGateway {
    pub fn new(base_url: impl Into<String>, ui: Arc<dyn UiNotifier>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            ui,
        }
    }

    fn question_url(&self) -> String {
        format!("{}/question", self.base_url)
    }

    /// Turn a classified response into the port result.
    ///
    /// The Service arm is the only place the UI is notified: one line,
    /// kind and message joined by a space, missing fields left empty.
    fn settle(&self, disposition: Disposition) -> Result<Option<Value>, GatewayError> {
        match disposition {
            Disposition::Body(value) => Ok(Some(value)),
            Disposition::Unauthorized => {
                debug!("Unauthorized reply suppressed");
                Ok(None)
            }
            Disposition::Service { kind, message } => {
                self.ui.set_error(&format!("{} {}", kind, message));
                Err(GatewayError::Service { message })
            }
        }
    }
}

#[async_trait]
impl QaGateway for HttpQaGateway {
    async fn post_question(
        &self,
        request: &QuestionRequest,
    ) -> Result<Option<Value>, GatewayError> {
        let client = with_client().map_err(|e| GatewayError::Transport(Box::new(e)))?;

        let response = client
            .post(self.question_url())
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    debug!("Request to {} timed out", self.base_url);
                } else if e.is_connect() {
                    debug!("Connection to {} failed", self.base_url);
                }
                GatewayError::Transport(Box::new(e))
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::Transport(Box::new(e)))?;

        debug!("Service responded {} ({} bytes)", status, body.len());

        let disposition = classify_response(status, &body);
        if matches!(disposition, Disposition::Service { .. }) {
            debug!("Service error body: {}", log_preview(&body, 200));
        }
        self.settle(disposition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Mutex;

    struct RecordingUi {
        errors: Mutex<Vec<String>>,
    }

    impl RecordingUi {
        fn new() -> Self {
            Self {
                errors: Mutex::new(Vec::new()),
            }
        }

        fn errors(&self) -> Vec<String> {
            self.errors.lock().unwrap().clone()
        }
    }

    impl UiNotifier for RecordingUi {
        fn set_loading(&self, _loading: bool) {}

        fn set_error(&self, message: &str) {
            self.errors.lock().unwrap().push(message.to_string());
        }
    }

    fn gateway_with_ui() -> (HttpQaGateway, Arc<RecordingUi>) {
        let ui = Arc::new(RecordingUi::new());
        let gw = HttpQaGateway::new("http://localhost:4080", ui.clone());
        (gw, ui)
    }

    #[test]
    fn test_default_headers_set_json_content_type() {
        let headers = default_headers();
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
        assert_eq!(headers.len(), 1);
    }

    #[test]
    fn test_with_client_builds() {
        assert!(with_client().is_ok());
    }

    #[test]
    fn test_question_url_joins_cleanly() {
        let (gw, _ui) = gateway_with_ui();
        assert_eq!(gw.question_url(), "http://localhost:4080/question");

        // Trailing slash is trimmed at construction
        let ui = Arc::new(RecordingUi::new());
        let gw = HttpQaGateway::new("http://localhost:4080/", ui);
        assert_eq!(gw.question_url(), "http://localhost:4080/question");
    }

    #[test]
    fn test_settle_passes_body_through() {
        let (gw, ui) = gateway_with_ui();
        let body = json!({"question": "Why?", "answer": "Because."});

        let result = gw.settle(Disposition::Body(body.clone())).unwrap();

        assert_eq!(result, Some(body));
        assert!(ui.errors().is_empty());
    }

    #[test]
    fn test_settle_suppresses_unauthorized() {
        let (gw, ui) = gateway_with_ui();

        let result = gw.settle(Disposition::Unauthorized).unwrap();

        assert_eq!(result, None);
        assert!(ui.errors().is_empty());
    }

    #[test]
    fn test_settle_service_error_notifies_ui_once() {
        let (gw, ui) = gateway_with_ui();

        let err = gw
            .settle(Disposition::Service {
                kind: "IllegalArgument".to_string(),
                message: "question must not be empty".to_string(),
            })
            .unwrap_err();

        assert_eq!(err.to_string(), "question must not be empty");
        assert_eq!(ui.errors(), vec!["IllegalArgument question must not be empty"]);
    }

    #[test]
    fn test_settle_degraded_fields_keep_the_separator() {
        let cases = [("E", "", "E "), ("", "M", " M"), ("", "", " ")];

        for (kind, message, shown) in cases {
            let (gw, ui) = gateway_with_ui();
            let result = gw.settle(Disposition::Service {
                kind: kind.to_string(),
                message: message.to_string(),
            });

            assert!(result.is_err());
            assert_eq!(ui.errors(), vec![shown]);
        }
    }

    #[tokio::test]
    async fn test_send_failure_is_transport_and_skips_the_ui() {
        // Port 1 is reserved, so the connection is refused immediately
        let ui = Arc::new(RecordingUi::new());
        let gw = HttpQaGateway::new("http://127.0.0.1:1", ui.clone());

        let err = gw
            .post_question(&QuestionRequest::new("anyone there?"))
            .await
            .unwrap_err();

        assert!(matches!(err, GatewayError::Transport(_)));
        assert!(std::error::Error::source(&err).is_some());
        assert!(ui.errors().is_empty());
    }
}
