//! Read-only projection of the store and busy flag for the presentation layer.

use pynico_types::{
    message::Message,
    session::{ChatSession, SessionSummary},
};

use crate::store::SessionStore;

#[derive(Debug, Clone, Copy)]
pub struct ChatView<'a> {
    /// None when the active pointer does not resolve
    pub active_session: Option<&'a ChatSession>,
    pub active_session_id: Option<&'a str>,
    pub sessions: &'a [ChatSession],
    pub is_sending: bool,
}

pub fn project(store: &SessionStore, is_sending: bool) -> ChatView<'_> {
    ChatView {
        active_session: store.active_session(),
        active_session_id: store.active_session_id(),
        sessions: store.sessions(),
        is_sending,
    }
}

impl<'a> ChatView<'a> {
    pub fn messages(&self) -> &'a [Message] {
        self.active_session
            .map(|s| s.messages.as_slice())
            .unwrap_or(&[])
    }

    /// The active session holds nothing beyond its greeting
    pub fn shows_welcome(&self) -> bool {
        self.active_session
            .is_some_and(|s| s.messages.len() <= 1)
    }

    pub fn is_active(&self, session_id: &str) -> bool {
        self.active_session_id == Some(session_id)
    }

    pub fn summaries(&self) -> Vec<SessionSummary> {
        self.sessions.iter().map(SessionSummary::from).collect()
    }
}
