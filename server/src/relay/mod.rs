//! Chat relay: interchangeable backends for `/api/chat`.
//!
//! DESIGN
//! ======
//! The source system shipped two divergent chat backends: a pass-through
//! proxy to an automation webhook and a direct Gemini integration with a
//! business-context instruction. Both live here behind one trait; the
//! [`RelayDispatch`] enum picks the strategy selected at startup.

pub mod context;
pub mod gemini;
pub mod webhook;

use model::chat::ChatRequest;

use crate::config::{RelayBackendKind, RelayConfig};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by relay operations.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The webhook strategy was selected without a webhook URL.
    #[error("Missing N8N_WEBHOOK_URL")]
    MissingWebhookUrl,

    /// The direct-model strategy was selected without its credential.
    #[error("missing API key: env var {var} not set")]
    MissingApiKey { var: String },

    /// The outbound HTTP call failed at the network level.
    #[error("upstream request failed: {0}")]
    Upstream(String),

    /// The AI provider returned a non-success HTTP status.
    #[error("provider response error: status {status}")]
    Provider { status: u16, body: String },

    /// The provider response body could not be interpreted.
    #[error("provider response parse failed: {0}")]
    Parse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// TRAIT + RESPONSE
// =============================================================================

/// Status and JSON body to surface for a relayed chat turn.
///
/// The webhook strategy relays the upstream status and body verbatim; the
/// direct-model strategy always yields `200` with `{"response": …}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayResponse {
    pub status: u16,
    pub body: String,
}

/// Backend-neutral async trait for chat relaying. Enables mocking in tests.
#[async_trait::async_trait]
pub trait ChatRelay: Send + Sync {
    /// Forward one chat turn and produce the response to surface.
    ///
    /// # Errors
    ///
    /// Returns a [`RelayError`] when the upstream call fails at the network
    /// level or the provider response cannot be used.
    async fn relay(&self, request: &ChatRequest) -> Result<RelayResponse, RelayError>;

    /// Short strategy name for logs.
    fn name(&self) -> &'static str;
}

// =============================================================================
// DISPATCH
// =============================================================================

/// Concrete relay that dispatches to the configured strategy.
#[derive(Debug)]
pub enum RelayDispatch {
    Webhook(webhook::WebhookRelay),
    Gemini(gemini::GeminiRelay),
}

impl RelayDispatch {
    /// Build the relay selected by a parsed typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the selected strategy is missing its required
    /// setting or its HTTP client fails to build.
    pub fn from_config(config: RelayConfig) -> Result<Self, RelayError> {
        match config.backend {
            RelayBackendKind::Webhook => {
                let url = config.webhook_url.ok_or(RelayError::MissingWebhookUrl)?;
                Ok(Self::Webhook(webhook::WebhookRelay::new(url, config.timeouts)?))
            }
            RelayBackendKind::Gemini => {
                let api_key = config
                    .gemini_api_key
                    .ok_or_else(|| RelayError::MissingApiKey { var: "GEMINI_API_KEY".into() })?;
                Ok(Self::Gemini(gemini::GeminiRelay::new(
                    api_key,
                    config.gemini_model,
                    config.timeouts,
                )?))
            }
        }
    }
}

#[async_trait::async_trait]
impl ChatRelay for RelayDispatch {
    async fn relay(&self, request: &ChatRequest) -> Result<RelayResponse, RelayError> {
        match self {
            Self::Webhook(r) => r.relay(request).await,
            Self::Gemini(r) => r.relay(request).await,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Webhook(r) => r.name(),
            Self::Gemini(r) => r.name(),
        }
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
