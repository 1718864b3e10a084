//! Console output formatter for answers

use askdesk_domain::AnswerResponse;
use colored::Colorize;

/// Formats answers for console display
pub struct AnswerFormatter;

impl AnswerFormatter {
    /// Format the answer with the question echoed by the service
    pub fn format(answer: &AnswerResponse) -> String {
        let mut output = String::new();

        if let Some(question) = &answer.question {
            output.push_str(&format!("{} {}\n\n", "Question:".cyan().bold(), question));
        }

        output.push_str(&format!("{}\n\n", "Response:".cyan().bold()));
        output.push_str(answer.answer_text());

        output
    }

    /// Format only the answer text (concise output)
    pub fn format_answer_only(answer: &AnswerResponse) -> String {
        answer.answer_text().to_string()
    }

    /// Format as JSON
    pub fn format_json(answer: &AnswerResponse) -> String {
        serde_json::to_string_pretty(answer).unwrap_or_else(|_| "{}".to_string())
    }

    /// Notice rendered when the service suppressed the reply
    pub fn format_empty() -> String {
        "(no answer)".dimmed().to_string()
    }
}
