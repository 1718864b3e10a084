//! HTTP adapter for the answer service.
//!
//! This module provides the [`QaGateway`](askdesk_application::QaGateway)
//! implementation and the response classification it is built on:
//!
//! - [`client::HttpQaGateway`] posts questions and dispatches the outcome.
//! - [`response::classify_response`] is the pure decision step applied to
//!   every response (success body, suppressed 401, or structured error).

pub mod client;
pub mod response;
