//! Webhook pass-through relay.
//!
//! Forwards the incoming chat request verbatim to the configured automation
//! webhook and relays its status code and body unchanged, success or not.
//! No retries, no response reshaping; the client owns reply extraction.

use std::time::Duration;

use model::chat::ChatRequest;

use super::{ChatRelay, RelayError, RelayResponse};
use crate::config::RelayTimeouts;

#[derive(Debug)]
pub struct WebhookRelay {
    http: reqwest::Client,
    url: String,
}

impl WebhookRelay {
    /// Build a pass-through relay targeting `url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(url: String, timeouts: RelayTimeouts) -> Result<Self, RelayError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| RelayError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, url })
    }
}

#[async_trait::async_trait]
impl ChatRelay for WebhookRelay {
    async fn relay(&self, request: &ChatRequest) -> Result<RelayResponse, RelayError> {
        let response = self
            .http
            .post(&self.url)
            .json(request)
            .send()
            .await
            .map_err(|e| RelayError::Upstream(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| RelayError::Upstream(e.to_string()))?;

        // Upstream errors are relayed as-is, not converted to RelayError:
        // the webhook owns its own error payloads.
        Ok(RelayResponse { status, body })
    }

    fn name(&self) -> &'static str {
        "webhook"
    }
}
