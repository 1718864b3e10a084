//! Application layer for askdesk
//!
//! This crate contains use cases and port definitions. It depends only on
//! the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    exchange_log::{ExchangeEvent, ExchangeLogger, NoExchangeLogger},
    fault::{FaultLog, NoFaultLog},
    qa_gateway::{GatewayError, QaGateway},
    ui::{NoUi, UiNotifier},
};
pub use use_cases::submit_question::SubmitQuestionUseCase;
