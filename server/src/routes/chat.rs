//! Chat relay route.

use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Json, Response};
use model::chat::ChatRequest;
use serde_json::json;
use tracing::{error, info};

use crate::relay::RelayError;
use crate::state::AppState;

/// `POST /api/chat`: forward one chat turn to the configured relay backend.
///
/// Empty messages never reach the backend; a missing relay (unset env vars)
/// answers 500 so the client renders its fixed fallback entry.
pub async fn relay_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Response {
    if request.message.trim().is_empty() {
        return (StatusCode::BAD_REQUEST, Json(json!({"error": "message is required"})))
            .into_response();
    }

    let Some(relay) = state.relay.clone() else {
        return (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"error": "relay não configurado"})))
            .into_response();
    };

    info!(backend = relay.name(), history_len = request.history.len(), "chat: relaying message");

    match relay.relay(&request).await {
        Ok(upstream) => {
            let status = StatusCode::from_u16(upstream.status).unwrap_or(StatusCode::BAD_GATEWAY);
            (status, [(header::CONTENT_TYPE, "application/json")], upstream.body).into_response()
        }
        Err(e) => {
            error!(error = %e, "chat: relay call failed");
            let (status, payload) = error_payload(&e);
            (status, Json(payload)).into_response()
        }
    }
}

/// Map a relay failure to the HTTP surface.
///
/// Configuration problems carry their description; provider and transport
/// failures get a generic body so raw upstream payloads never leak out.
fn error_payload(error: &RelayError) -> (StatusCode, serde_json::Value) {
    match error {
        RelayError::ConfigParse(_)
        | RelayError::MissingWebhookUrl
        | RelayError::MissingApiKey { .. }
        | RelayError::HttpClientBuild(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, json!({"error": error.to_string()}))
        }
        RelayError::Upstream(_) | RelayError::Provider { .. } | RelayError::Parse(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({"error": "Falha ao consultar o agente de IA"}),
        ),
    }
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
