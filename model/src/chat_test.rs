use super::*;
use serde_json::json;

// =============================================================
// extract_reply
// =============================================================

#[test]
fn extract_reply_reads_response_field_first() {
    let body = json!({"response": "r", "message": "m", "output": "o", "text": "t"});
    assert_eq!(extract_reply(&body), "r");
}

#[test]
fn extract_reply_probes_fields_in_order() {
    assert_eq!(extract_reply(&json!({"message": "All systems normal"})), "All systems normal");
    assert_eq!(extract_reply(&json!({"output": "o", "text": "t"})), "o");
    assert_eq!(extract_reply(&json!({"text": "t"})), "t");
}

#[test]
fn extract_reply_serializes_non_string_hit() {
    let body = json!({"response": {"nested": true}});
    assert_eq!(extract_reply(&body), r#"{"nested":true}"#);
}

#[test]
fn extract_reply_skips_null_fields() {
    let body = json!({"response": null, "message": "fallback"});
    assert_eq!(extract_reply(&body), "fallback");
}

#[test]
fn extract_reply_skips_empty_string_fields() {
    let body = json!({"response": "", "message": "fallback"});
    assert_eq!(extract_reply(&body), "fallback");
}

#[test]
fn extract_reply_all_fields_empty_falls_back_to_body() {
    let body = json!({"response": "", "text": ""});
    assert_eq!(extract_reply(&body), r#"{"response":"","text":""}"#);
}

#[test]
fn extract_reply_falls_back_to_whole_body() {
    let body = json!({"status": "done"});
    assert_eq!(extract_reply(&body), r#"{"status":"done"}"#);

    let body = json!("plain string body");
    assert_eq!(extract_reply(&body), r#""plain string body""#);
}

// =============================================================
// error_message
// =============================================================

#[test]
fn error_message_prefers_server_supplied_text() {
    let body = json!({"error": "API key missing"});
    assert_eq!(error_message(500, &body), "API key missing");
}

#[test]
fn error_message_falls_back_to_status_text() {
    assert_eq!(
        error_message(502, &json!({})),
        "Erro 502: Falha na comunicação com Agente"
    );
}

// =============================================================
// wire shapes
// =============================================================

#[test]
fn chat_request_skips_absent_optional_fields() {
    let req = ChatRequest { message: "oi".to_owned(), ..Default::default() };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value, json!({"message": "oi"}));
}

#[test]
fn chat_request_serializes_history_turns() {
    let req = ChatRequest {
        message: "status?".to_owned(),
        history: vec![
            ChatTurn::new(ChatRole::User, "oi"),
            ChatTurn::new(ChatRole::Model, "olá"),
        ],
        session_id: None,
        timestamp: Some("2023-10-27T12:00:00Z".to_owned()),
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["history"][0]["role"], "user");
    assert_eq!(value["history"][1]["role"], "model");
    assert_eq!(value["history"][0]["parts"][0]["text"], "oi");
    assert_eq!(value["timestamp"], "2023-10-27T12:00:00Z");
}

#[test]
fn chat_request_accepts_bare_webhook_shape() {
    let req: ChatRequest =
        serde_json::from_value(json!({"message": "oi", "session_id": "s-1"})).unwrap();
    assert!(req.history.is_empty());
    assert_eq!(req.session_id.as_deref(), Some("s-1"));
}
