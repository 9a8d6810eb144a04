use super::*;

#[test]
fn default_transcript_opens_with_the_welcome() {
    let state = ChatState::default();
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].role, ChatRole::Model);
    assert!(state.messages[0].text.starts_with("Bem-vindo"));
    assert!(!state.loading);
    assert!(state.input.is_empty());
}

#[test]
fn append_is_order_preserving_and_append_only() {
    let mut state = ChatState::default();
    let baseline = state.messages.len();

    for i in 0..5 {
        state.append(ChatRole::User, format!("msg {i}"), f64::from(i));
    }

    assert_eq!(state.messages.len(), baseline + 5);
    for i in 0..5 {
        assert_eq!(state.messages[baseline + i].text, format!("msg {i}"));
    }
    // The welcome entry is untouched.
    assert!(state.messages[0].text.starts_with("Bem-vindo"));
}

#[test]
fn history_projects_roles_and_text_without_timestamps() {
    let mut state = ChatState::default();
    state.append(ChatRole::User, "qual o prazo do 104?", 1000.0);
    state.append(ChatRole::Model, "Amanhã.", 2000.0);

    let history = state.history();
    assert_eq!(history.len(), 3);
    assert_eq!(history[1].role, ChatRole::User);
    assert_eq!(history[1].parts.len(), 1);
    assert_eq!(history[1].parts[0].text, "qual o prazo do 104?");
    assert_eq!(history[2].role, ChatRole::Model);
}

#[test]
fn offline_reply_is_the_fixed_fallback_text() {
    assert_eq!(OFFLINE_REPLY, "Sem conexão com NBL Cloud.");
}

#[test]
fn blank_replies_render_the_processing_error_entry() {
    assert_eq!(reply_text(""), "Erro no processamento.");
    assert_eq!(reply_text("   \n"), "Erro no processamento.");
    assert_eq!(reply_text("Tudo em dia."), "Tudo em dia.");
}
