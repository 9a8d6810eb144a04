//! Chat wire contract between the UI and the relay backend.
//!
//! The backend behind `/api/chat` is interchangeable (automation webhook or
//! direct model call), so reply bodies are heterogeneous. Extraction is an
//! ordered list of field probes rather than inline conditionals, so changing a
//! backend shape means editing [`REPLY_FIELDS`], not call sites.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// Author of a chat turn, matching the provider's role vocabulary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

/// One text fragment of a turn.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

/// A prior conversation turn as replayed to the backend on every call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub parts: Vec<Part>,
}

impl ChatTurn {
    /// Build a single-part turn.
    #[must_use]
    pub fn new(role: ChatRole, text: impl Into<String>) -> Self {
        Self { role, parts: vec![Part { text: text.into() }] }
    }
}

/// Request body for `POST /api/chat`.
///
/// The webhook variant of the backend also accepts a bare
/// `{message, session_id}` shape; both are covered by the optional fields.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub history: Vec<ChatTurn>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// ISO-8601 instant of submission, set by the client.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// Reply fields probed in order when reading a backend response body.
pub const REPLY_FIELDS: [&str; 4] = ["response", "message", "output", "text"];

/// Extract the assistant reply from a backend response body.
///
/// Probes [`REPLY_FIELDS`] in order on a JSON object and returns the first
/// usable field; empty-string and `null` hits fall through to the next
/// probe, and a non-string hit is rendered through its JSON serialization.
/// When nothing matches, the whole body is serialized as the reply as a
/// best-effort fallback, not an error.
#[must_use]
pub fn extract_reply(body: &Value) -> String {
    if let Value::Object(map) = body {
        for field in REPLY_FIELDS {
            match map.get(field) {
                Some(Value::String(text)) if !text.is_empty() => return text.clone(),
                Some(other) if !other.is_null() && !other.is_string() => {
                    return other.to_string();
                }
                _ => {}
            }
        }
    }
    body.to_string()
}

/// Error text for a failed relay call.
///
/// Prefers the server-supplied `error` field, falling back to a generic
/// status-tagged message.
#[must_use]
pub fn error_message(status: u16, body: &Value) -> String {
    body.get("error")
        .and_then(Value::as_str)
        .map_or_else(|| format!("Erro {status}: Falha na comunicação com Agente"), str::to_owned)
}
