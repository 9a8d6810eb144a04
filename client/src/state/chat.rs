#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use model::chat::{ChatRole, ChatTurn};

/// Fixed fallback entry appended when a relay call fails for any reason.
pub const OFFLINE_REPLY: &str = "Sem conexão com NBL Cloud.";

/// Entry shown when the relay answered successfully but with no usable text.
pub const EMPTY_REPLY: &str = "Erro no processamento.";

const WELCOME: &str = "Bem-vindo ao centro de inteligência gráfica NBL. Estou monitorando \
                       o fluxo lateral para te auxiliar. O que deseja consultar?";

/// A single transcript entry. Immutable once appended.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: f64,
}

/// State for the chat panel: transcript, input draft, in-flight flag.
#[derive(Clone, Debug)]
pub struct ChatState {
    /// Append-only transcript in insertion order.
    pub messages: Vec<ChatMessage>,
    pub input: String,
    pub loading: bool,
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            messages: vec![ChatMessage { role: ChatRole::Model, text: WELCOME.to_owned(), timestamp: 0.0 }],
            input: String::new(),
            loading: false,
        }
    }
}

impl ChatState {
    /// Append one message; prior entries are never mutated or removed.
    pub fn append(&mut self, role: ChatRole, text: impl Into<String>, timestamp: f64) {
        self.messages.push(ChatMessage { role, text: text.into(), timestamp });
    }

    /// Project the transcript into the wire history shape (timestamps drop).
    #[must_use]
    pub fn history(&self) -> Vec<ChatTurn> {
        self.messages
            .iter()
            .map(|m| ChatTurn::new(m.role, m.text.clone()))
            .collect()
    }
}

/// Transcript text for a successful relay reply. A blank reply never lands
/// as an empty bubble; it renders the fixed processing-error entry instead.
#[must_use]
pub fn reply_text(reply: &str) -> String {
    if reply.trim().is_empty() {
        EMPTY_REPLY.to_owned()
    } else {
        reply.to_owned()
    }
}
