//! Direct Gemini integration.
//!
//! Thin HTTP wrapper for `models/{model}:generateContent`. The business
//! context is injected as the leading user turn, then the replayed history,
//! then the new message. Pure parsing in [`parse_reply`] for testability.

use std::time::Duration;

use model::chat::{ChatRequest, ChatRole, ChatTurn, Part};
use serde_json::json;

use super::{ChatRelay, RelayError, RelayResponse, context};
use crate::config::RelayTimeouts;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const TEMPERATURE: f64 = 0.7;
const MAX_OUTPUT_TOKENS: u32 = 500;

// =============================================================================
// CLIENT
// =============================================================================

#[derive(Debug)]
pub struct GeminiRelay {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiRelay {
    /// Build a direct-model relay for `model` authenticated by `api_key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(api_key: String, model: String, timeouts: RelayTimeouts) -> Result<Self, RelayError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| RelayError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, api_key, model })
    }
}

#[async_trait::async_trait]
impl ChatRelay for GeminiRelay {
    async fn relay(&self, request: &ChatRequest) -> Result<RelayResponse, RelayError> {
        let contents =
            build_contents(&context::business_context(), &request.history, &request.message);
        let body = ApiRequest {
            contents: &contents,
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };

        let url = format!("{API_BASE}/models/{}:generateContent", self.model);
        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| RelayError::Upstream(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| RelayError::Upstream(e.to_string()))?;

        if status != 200 {
            return Err(RelayError::Provider { status, body: text });
        }

        let reply = parse_reply(&text)?;
        Ok(RelayResponse { status: 200, body: json!({ "response": reply }).to_string() })
    }

    fn name(&self) -> &'static str {
        "gemini"
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    contents: &'a [ChatTurn],
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(serde::Serialize)]
struct GenerationConfig {
    temperature: f64,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

#[derive(serde::Deserialize)]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(serde::Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(serde::Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

// =============================================================================
// PURE HELPERS
// =============================================================================

/// Assemble the full content sequence: context turn, prior history, new
/// message. The context rides as a user turn because the v1beta API scopes
/// `systemInstruction` differently per model family.
fn build_contents(business_context: &str, history: &[ChatTurn], message: &str) -> Vec<ChatTurn> {
    let mut contents = Vec::with_capacity(history.len() + 2);
    contents.push(ChatTurn::new(ChatRole::User, business_context));
    contents.extend_from_slice(history);
    contents.push(ChatTurn::new(ChatRole::User, message));
    contents
}

/// Extract the completion text from a `generateContent` response body.
fn parse_reply(body: &str) -> Result<String, RelayError> {
    let api: ApiResponse =
        serde_json::from_str(body).map_err(|e| RelayError::Parse(e.to_string()))?;

    let reply: String = api
        .candidates
        .first()
        .map(|c| c.content.parts.iter().map(|p| p.text.as_str()).collect())
        .unwrap_or_default();

    if reply.trim().is_empty() {
        return Err(RelayError::Parse("empty completion".into()));
    }
    Ok(reply)
}

#[cfg(test)]
#[path = "gemini_test.rs"]
mod tests;
