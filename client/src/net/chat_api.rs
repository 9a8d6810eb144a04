//! HTTP client for the chat relay endpoint.
//!
//! Client-side (hydrate): real calls via `gloo-net`. Server-side (SSR):
//! a stub returning `ChatError::Connection`, since the relay is only
//! reachable from the browser session.

#![allow(clippy::unused_async)]

use model::chat::ChatTurn;
use thiserror::Error;

/// Relay endpoint, overridable at build time for split deployments.
const ENDPOINT: &str = match option_env!("CHAT_ENDPOINT") {
    Some(url) => url,
    None => "/api/chat",
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChatError {
    /// The server answered with a non-success status.
    #[error("{message}")]
    Server { message: String },
    /// The request never completed (network down, or running on the server).
    #[error("sem conexão")]
    Connection,
}

/// POST one message plus the transcript so far, returning the agent reply.
///
/// No retries and no queueing. The caller guarantees `message` is non-empty
/// after trimming and decides what to show the user on failure.
///
/// # Errors
///
/// `ChatError::Server` when the relay answers with an error status,
/// `ChatError::Connection` when the request cannot be completed at all.
pub async fn send_chat(message: &str, history: &[ChatTurn]) -> Result<String, ChatError> {
    #[cfg(feature = "hydrate")]
    {
        use model::chat::{error_message, extract_reply, ChatRequest};

        let request = ChatRequest {
            message: message.to_owned(),
            history: history.to_vec(),
            session_id: None,
            timestamp: Some(String::from(js_sys::Date::new_0().to_iso_string())),
        };

        let resp = gloo_net::http::Request::post(ENDPOINT)
            .json(&request)
            .map_err(|_| ChatError::Connection)?
            .send()
            .await
            .map_err(|_| ChatError::Connection)?;

        let status = resp.status();
        let body: serde_json::Value = resp
            .json()
            .await
            .unwrap_or(serde_json::Value::Null);

        if status >= 400 {
            return Err(ChatError::Server {
                message: error_message(status, &body),
            });
        }

        Ok(extract_reply(&body))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (message, history);
        Err(ChatError::Connection)
    }
}
