//! Relay configuration parsed from environment variables.
//!
//! Configuration is read once in `main` and handed to the relay constructors
//! as a typed value; nothing below this module touches the process
//! environment.

use crate::relay::RelayError;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Which relay strategy answers `/api/chat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayBackendKind {
    /// Pass-through proxy to the automation webhook.
    Webhook,
    /// Direct Gemini integration with business-context injection.
    Gemini,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelayTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub backend: RelayBackendKind,
    pub webhook_url: Option<String>,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub timeouts: RelayTimeouts,
}

impl RelayConfig {
    /// Build typed relay config from environment variables.
    ///
    /// - `RELAY_BACKEND`: `webhook` (default) or `gemini`
    /// - `N8N_WEBHOOK_URL`: target for the webhook strategy
    /// - `GEMINI_API_KEY`: credential for the direct-model strategy
    /// - `GEMINI_MODEL`: model name, default `gemini-3-flash-preview`
    /// - `RELAY_REQUEST_TIMEOUT_SECS`: default 120
    /// - `RELAY_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns an error if `RELAY_BACKEND` names an unknown strategy.
    pub fn from_env() -> Result<Self, RelayError> {
        let backend = parse_backend(std::env::var("RELAY_BACKEND").ok().as_deref())?;
        let webhook_url = std::env::var("N8N_WEBHOOK_URL").ok().filter(|v| !v.trim().is_empty());
        let gemini_api_key = std::env::var("GEMINI_API_KEY").ok().filter(|v| !v.trim().is_empty());
        let gemini_model =
            std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string());
        let timeouts = RelayTimeouts {
            request_secs: env_parse_u64("RELAY_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("RELAY_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { backend, webhook_url, gemini_api_key, gemini_model, timeouts })
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

fn parse_backend(raw: Option<&str>) -> Result<RelayBackendKind, RelayError> {
    match raw.unwrap_or("webhook") {
        "webhook" => Ok(RelayBackendKind::Webhook),
        "gemini" => Ok(RelayBackendKind::Gemini),
        other => Err(RelayError::ConfigParse(format!("unknown RELAY_BACKEND: {other}"))),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
