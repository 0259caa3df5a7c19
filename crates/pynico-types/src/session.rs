use serde::{Deserialize, Serialize};
use crate::message::Message;

/// Title every session carries until its first user message arrives
pub const PLACEHOLDER_TITLE: &str = "Nova Conversa";

/// Model-authored greeting that opens every session
pub const GREETING_TEXT: &str = "Olá! Eu sou o PyNico. Estou aqui para te ajudar com suas dúvidas sobre Python. No que você está trabalhando hoje?";

/// Titles are cut to this many characters
pub const TITLE_MAX_CHARS: usize = 30;
const TITLE_ELLIPSIS: &str = "...";

/// One independent conversation thread.
///
/// Serialized as `{ id, title, messages }`, the same layout the web
/// front end has always written to `localStorage`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSession {
    pub id: String,
    pub title: String,
    pub messages: Vec<Message>,
}

impl ChatSession {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: PLACEHOLDER_TITLE.to_string(),
            messages: vec![greeting()],
        }
    }

    pub fn has_user_message(&self) -> bool {
        self.messages.iter().any(Message::is_user)
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }
}

pub fn greeting() -> Message {
    Message::model(GREETING_TEXT)
}

/// Derive a session title from the first user message.
/// Counts Unicode scalar values, so multi-byte text is never split.
pub fn title_from_first_message(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(TITLE_MAX_CHARS).collect();
    if chars.next().is_some() {
        format!("{}{}", head, TITLE_ELLIPSIS)
    } else {
        head
    }
}

/// Summary of a session for the history sidebar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub id: String,
    pub title: String,
    pub message_count: usize,
}

impl From<&ChatSession> for SessionSummary {
    fn from(session: &ChatSession) -> Self {
        Self {
            id: session.id.clone(),
            title: session.title.clone(),
            message_count: session.message_count(),
        }
    }
}
