use serde_json::Value;
use tracing::{debug, info};

use crate::backend::{BackendClient, ErrorMarker};
use crate::legal::mock::build_mock_answer;
use crate::legal::types::{AnswerResult, Citation};

/// Payload fields holding the answer text, most preferred first.
const TEXT_FIELDS: &[&str] = &["answer", "text"];
/// Payload fields holding the citation list, most preferred first.
const CITATION_FIELDS: &[&str] = &["sources", "citations"];
/// Shown when a successful payload carries no usable text field.
pub const FALLBACK_TEXT: &str = "Respuesta recibida.";

/// Turns a question into the answer shown to the user.
///
/// Asks the backend when one is configured, and falls back to the local
/// mock answer on any failure.
pub struct AnswerResolver {
    backend: Option<BackendClient>,
}

impl AnswerResolver {
    pub fn new(backend: Option<BackendClient>) -> Self {
        Self { backend }
    }

    /// `None` when the backend is disabled and every answer is the mock one.
    pub fn backend(&self) -> Option<&BackendClient> {
        self.backend.as_ref()
    }

    pub async fn resolve(&self, question: &str, strict: bool, want_citations: bool) -> AnswerResult {
        let Some(backend) = &self.backend else {
            debug!("backend disabled, answering from knowledge base");
            return build_mock_answer(question, strict, want_citations);
        };

        let outcome = backend
            .send(question, strict, want_citations)
            .await
            .and_then(|payload| match payload_error(&payload) {
                Some(marker) => Err(marker),
                None => Ok(payload),
            });

        match outcome {
            // A null/false/0/"" body carries nothing to show
            Ok(payload) if !is_truthy(&payload) => {
                debug!("empty backend payload, answering from knowledge base");
                build_mock_answer(question, strict, want_citations)
            }
            Ok(payload) => {
                let mut result = answer_from_payload(&payload);
                if !want_citations {
                    result.citations.clear();
                }
                info!(
                    answer_len = result.text.len(),
                    citations = result.citations.len(),
                    "backend answer resolved"
                );
                result
            }
            Err(marker) => {
                let mock = build_mock_answer(question, strict, want_citations);
                info!(reason = %marker, "falling back to mock answer");
                AnswerResult {
                    text: format!("{}\n\n{}", marker.message, mock.text),
                    citations: mock.citations,
                }
            }
        }
    }
}

/// A 2xx payload may still report failure through any truthy `error` field.
/// A string is shown as-is; other values get the generic unreachable message.
fn payload_error(payload: &Value) -> Option<ErrorMarker> {
    let error = payload.get("error").filter(|v| is_truthy(v))?;
    Some(match error.as_str() {
        Some(msg) => ErrorMarker::new(msg),
        None => ErrorMarker::unreachable(),
    })
}

/// Everything except `null`, `false`, `0` and `""` counts as present.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn answer_from_payload(payload: &Value) -> AnswerResult {
    let text = TEXT_FIELDS
        .iter()
        .find_map(|field| payload.get(field).and_then(Value::as_str).filter(|s| !s.is_empty()))
        .unwrap_or(FALLBACK_TEXT)
        .to_string();

    let citations = CITATION_FIELDS
        .iter()
        .find_map(|field| payload.get(field).and_then(Value::as_array))
        .map(|entries| entries.iter().map(citation_from_value).collect())
        .unwrap_or_default();

    AnswerResult { text, citations }
}

/// Shape is not checked: missing fields become empty, non-strings are rendered as JSON.
fn citation_from_value(entry: &Value) -> Citation {
    let field = |name: &str| -> String {
        match entry.get(name) {
            Some(Value::String(s)) => s.clone(),
            None | Some(Value::Null) => String::new(),
            Some(other) => other.to_string(),
        }
    };

    Citation {
        code: field("code"),
        article: field("article"),
        document: field("document"),
    }
}
