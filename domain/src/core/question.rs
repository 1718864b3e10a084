//! Question value object

use serde::{Deserialize, Serialize};

/// A question to be submitted to the answer service (Value Object)
///
/// Serializes to the wire body `{"question": "..."}` expected by the
/// service's question endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRequest {
    question: String,
}

impl QuestionRequest {
    /// Create a new question
    ///
    /// # Panics
    /// Panics if the question is empty or only whitespace
    pub fn new(question: impl Into<String>) -> Self {
        let question = question.into();
        assert!(!question.trim().is_empty(), "Question cannot be empty");
        Self { question }
    }

    /// Try to create a new question, returning None if invalid
    pub fn try_new(question: impl Into<String>) -> Option<Self> {
        let question = question.into();
        if question.trim().is_empty() {
            None
        } else {
            Some(Self { question })
        }
    }

    /// Get the question text
    pub fn question(&self) -> &str {
        &self.question
    }

    /// Consume and return the inner text
    pub fn into_question(self) -> String {
        self.question
    }
}

impl std::fmt::Display for QuestionRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.question)
    }
}

impl From<&str> for QuestionRequest {
    fn from(s: &str) -> Self {
        QuestionRequest::new(s)
    }
}

impl From<String> for QuestionRequest {
    fn from(s: String) -> Self {
        QuestionRequest::new(s)
    }
}
