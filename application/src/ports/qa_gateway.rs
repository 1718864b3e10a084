//! Answer service gateway port
//!
//! Defines the interface for communicating with the answer service.

use askdesk_domain::QuestionRequest;
use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur during gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The service answered with a structured error.
    ///
    /// By the time this variant reaches a caller the UI has already been
    /// notified; the message carries only the service's description.
    #[error("{message}")]
    Service { message: String },

    /// The request never produced a service response.
    ///
    /// The original failure is carried untouched so callers can inspect
    /// it. The UI is not notified for this variant.
    #[error("{0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Gateway to the answer service
///
/// This port defines how the application layer talks to the service.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait QaGateway: Send + Sync {
    /// Submit a question and return the raw response body.
    ///
    /// `Ok(None)` means the service suppressed the reply (unauthenticated
    /// session). Successful replies always carry a body value, even when
    /// the service sent nothing parseable.
    async fn post_question(
        &self,
        request: &QuestionRequest,
    ) -> Result<Option<Value>, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_displays_message_only() {
        let err = GatewayError::Service {
            message: "wrong question".to_string(),
        };
        assert_eq!(err.to_string(), "wrong question");
    }

    #[test]
    fn test_transport_error_preserves_source() {
        use std::error::Error as _;

        let inner = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = GatewayError::Transport(Box::new(inner));
        assert_eq!(err.to_string(), "refused");
        let source = err.source().unwrap();
        let io = source.downcast_ref::<std::io::Error>().unwrap();
        assert_eq!(io.kind(), std::io::ErrorKind::ConnectionRefused);
    }
}
