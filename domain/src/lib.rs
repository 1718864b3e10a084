//! Domain layer for askdesk
//!
//! This crate contains the value objects exchanged with the answer service.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - [`QuestionRequest`]: a validated question to submit to the service
//! - [`AnswerResponse`]: the typed view of whatever the service returned

pub mod core;
pub mod util;

// Re-export commonly used types
pub use core::{answer::AnswerResponse, question::QuestionRequest};
pub use util::{log_preview, truncate_str};
