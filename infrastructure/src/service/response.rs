//! Response classification for the answer service.
//!
//! Every HTTP response passes through [`classify_response`] before the
//! gateway decides what to return, suppress, or surface:
//!
//! - [`Disposition::Body`] → hand the parsed body to the caller
//! - [`Disposition::Unauthorized`] → suppress the reply entirely
//! - [`Disposition::Service`] → notify the UI, then fail with the message

use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;

/// The error body shape produced by the answer service.
///
/// Every field is optional so the classifier degrades gracefully when the
/// service omits parts of the shape. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ErrorBody {
    /// Short error kind (e.g. "IllegalArgument").
    pub error: Option<String>,
    /// Human-readable description.
    pub message: Option<String>,
    /// Machine-readable error code.
    pub code: Option<String>,
    /// HTTP status echoed by the service.
    pub status: Option<u16>,
    /// Request path that produced the error.
    pub path: Option<String>,
    /// When the service recorded the error.
    pub timestamp: Option<String>,
    /// Extra error parameters, shape unspecified.
    pub params: Option<Value>,
}

/// Classification of an HTTP response from the answer service.
#[derive(Debug, PartialEq)]
pub enum Disposition {
    /// Success: the parsed body (`Null` when the body is empty or not JSON).
    Body(Value),
    /// Unauthorized: the reply is suppressed, nothing is rendered or reported.
    Unauthorized,
    /// Structured service error: `kind` names it, `message` describes it.
    ///
    /// Either string may be empty when the service omitted the field.
    Service { kind: String, message: String },
}

/// Classify a response by status code and raw body text.
///
/// This is a pure function with no side effects, called once per response:
///
/// - 2xx → [`Disposition::Body`] with the parsed JSON
/// - 401 → [`Disposition::Unauthorized`], regardless of body content
/// - anything else → [`Disposition::Service`] from the error body, with
///   missing fields degrading to empty strings
pub fn classify_response(status: StatusCode, body: &str) -> Disposition {
    if status.is_success() {
        let value = serde_json::from_str(body).unwrap_or(Value::Null);
        return Disposition::Body(value);
    }

    if status == StatusCode::UNAUTHORIZED {
        return Disposition::Unauthorized;
    }

    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    Disposition::Service {
        kind: parsed.error.unwrap_or_default(),
        message: parsed.message.unwrap_or_default(),
    }
}
