//! Core domain concepts shared across the client.
//!
//! - [`question::QuestionRequest`]: a validated question to submit
//! - [`answer::AnswerResponse`]: the typed view of a service reply

pub mod answer;
pub mod question;
