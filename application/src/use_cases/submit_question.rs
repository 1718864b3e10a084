//! Submit Question use case.
//!
//! Executes one question/answer exchange with the answer service.

use crate::ports::exchange_log::{ExchangeEvent, ExchangeLogger, NoExchangeLogger};
use crate::ports::qa_gateway::{GatewayError, QaGateway};
use askdesk_domain::util::log_preview;
use askdesk_domain::{AnswerResponse, QuestionRequest};
use std::sync::Arc;
use tracing::{debug, info};

/// Use case for submitting a question and obtaining the typed answer.
///
/// The flow:
/// 1. POST the question through the [`QaGateway`]
/// 2. Convert the raw body via [`AnswerResponse::from_body`]
/// 3. Record the exchange through the [`ExchangeLogger`]
///
/// Gateway failures propagate unchanged: a [`GatewayError::Service`] has
/// already been surfaced to the UI by the gateway, and a
/// [`GatewayError::Transport`] carries the original failure for the caller
/// to inspect.
pub struct SubmitQuestionUseCase {
    gateway: Arc<dyn QaGateway>,
    exchange_logger: Arc<dyn ExchangeLogger>,
}

impl Clone for SubmitQuestionUseCase {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            exchange_logger: self.exchange_logger.clone(),
        }
    }
}

impl SubmitQuestionUseCase {
    pub fn new(gateway: Arc<dyn QaGateway>) -> Self {
        Self {
            gateway,
            exchange_logger: Arc::new(NoExchangeLogger),
        }
    }

    /// Create with an exchange logger.
    pub fn with_exchange_logger(mut self, logger: Arc<dyn ExchangeLogger>) -> Self {
        self.exchange_logger = logger;
        self
    }

    /// Execute one exchange.
    ///
    /// `Ok(None)` means the service produced nothing to render.
    pub async fn execute(
        &self,
        request: QuestionRequest,
    ) -> Result<Option<AnswerResponse>, GatewayError> {
        info!(
            "Submitting question: {}",
            log_preview(request.question(), 100)
        );

        self.exchange_logger.log(ExchangeEvent::new(
            "question",
            serde_json::json!({ "question": request.question() }),
        ));

        let body = self.gateway.post_question(&request).await?;
        let answer = AnswerResponse::from_body(body);

        match &answer {
            Some(a) => {
                debug!("Received answer ({} bytes)", a.answer_text().len());
                self.exchange_logger.log(ExchangeEvent::new(
                    "answer",
                    serde_json::to_value(a).unwrap_or(serde_json::Value::Null),
                ));
            }
            None => {
                debug!("Service returned no payload");
                self.exchange_logger
                    .log(ExchangeEvent::new("answer", serde_json::Value::Null));
            }
        }

        Ok(answer)
    }
}
