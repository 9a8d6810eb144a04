use super::*;

#[test]
fn parse_backend_defaults_to_webhook() {
    assert_eq!(parse_backend(None).unwrap(), RelayBackendKind::Webhook);
}

#[test]
fn parse_backend_accepts_gemini() {
    assert_eq!(parse_backend(Some("gemini")).unwrap(), RelayBackendKind::Gemini);
}

#[test]
fn parse_backend_rejects_unknown_strategy() {
    let err = parse_backend(Some("ollama")).unwrap_err().to_string();
    assert!(err.contains("unknown RELAY_BACKEND"));
}

#[test]
fn env_parse_u64_falls_back_on_missing_or_garbage() {
    assert_eq!(env_parse_u64("RELAY_TEST_UNSET_TIMEOUT", 120), 120);
}

#[test]
fn default_model_is_flash_preview() {
    assert_eq!(DEFAULT_GEMINI_MODEL, "gemini-3-flash-preview");
}
