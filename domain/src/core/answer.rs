//! Answer value object

use serde::Serialize;
use serde_json::{Map, Value};

/// The typed view of a reply from the answer service (Value Object)
///
/// The service echoes the question back alongside the answer text. Both
/// fields are optional because upstream error suppression can leave a reply
/// without either. Fields the client does not model are preserved in
/// [`extra`](Self::extra) rather than dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnswerResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AnswerResponse {
    /// Convert a raw response body into a typed answer.
    ///
    /// Absent and `null` bodies yield `None`: there is nothing to render.
    /// JSON objects (including `{}`) yield a typed answer; any other JSON
    /// value is not an answer payload and also yields `None`.
    pub fn from_body(body: Option<Value>) -> Option<Self> {
        match body {
            None | Some(Value::Null) => None,
            Some(Value::Object(map)) => Some(Self::from_fields(map)),
            Some(_) => None,
        }
    }

    /// Extract the modeled fields from an object body, keeping the rest.
    ///
    /// A modeled key holding `null` is treated as absent. A modeled key
    /// holding a non-string value is left untouched in `extra`.
    fn from_fields(mut map: Map<String, Value>) -> Self {
        let question = take_string(&mut map, "question");
        let answer = take_string(&mut map, "answer");
        Self {
            question,
            answer,
            extra: map,
        }
    }

    /// The answer text, or an empty string when the reply carried none.
    pub fn answer_text(&self) -> &str {
        self.answer.as_deref().unwrap_or_default()
    }
}

fn take_string(map: &mut Map<String, Value>, key: &str) -> Option<String> {
    match map.remove(key) {
        Some(Value::String(s)) => Some(s),
        Some(Value::Null) | None => None,
        Some(other) => {
            map.insert(key.to_string(), other);
            None
        }
    }
}
