//! Session store: the ordered collection of chat sessions and the active pointer.
//!
//! Sessions are kept newest-created first. After `initialize` the store is
//! never empty and `active_session_id` always names a member.

use std::collections::HashSet;

use pynico_types::{
    message::Message,
    session::{greeting, title_from_first_message, ChatSession},
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionStore {
    sessions: Vec<ChatSession>,
    active_session_id: Option<String>,
    /// Bumped by every mutation; lets observers detect change without diffing
    revision: u64,
}

impl SessionStore {
    /// An uninitialized store: no sessions, no active pointer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate the store once at startup.
    ///
    /// Non-empty `loaded` data is installed as-is (newest first) and its
    /// first session becomes active. Otherwise one fresh session is created.
    pub fn initialize(&mut self, loaded: Option<Vec<ChatSession>>) {
        let sessions = sanitize(loaded.unwrap_or_default());
        if sessions.is_empty() {
            self.sessions.clear();
            self.active_session_id = None;
            self.create_session();
            return;
        }

        log::info!("Restored {} chat session(s)", sessions.len());
        self.active_session_id = sessions.first().map(|s| s.id.clone());
        self.sessions = sessions;
        self.bump();
    }

    pub fn create_session(&mut self) -> &ChatSession {
        let mut id = new_session_id();
        while self.get(&id).is_some() {
            id = new_session_id();
        }

        self.sessions.insert(0, ChatSession::new(id.clone()));
        self.active_session_id = Some(id);
        self.bump();
        &self.sessions[0]
    }

    /// Returns false (and changes nothing) when `id` is unknown.
    pub fn select_session(&mut self, id: &str) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        if self.active_session_id.as_deref() != Some(id) {
            self.active_session_id = Some(id.to_string());
            self.bump();
        }
        true
    }

    /// Remove a session. Deleting the active one promotes the next-most-recent
    /// remaining session; deleting the last one leaves a fresh session.
    pub fn delete_session(&mut self, id: &str) -> bool {
        let Some(index) = self.sessions.iter().position(|s| s.id == id) else {
            return false;
        };
        self.sessions.remove(index);
        self.bump();

        if self.sessions.is_empty() {
            self.active_session_id = None;
            self.create_session();
        } else if self.active_session_id.as_deref() == Some(id) {
            self.active_session_id = self.sessions.first().map(|s| s.id.clone());
        }
        true
    }

    /// Append to the matching session. The first user message also
    /// rewrites the placeholder title, exactly once.
    pub fn append_message(&mut self, session_id: &str, message: Message) -> bool {
        let Some(session) = self.sessions.iter_mut().find(|s| s.id == session_id) else {
            return false;
        };
        if message.is_user() && !session.has_user_message() {
            session.title = title_from_first_message(&message.text);
        }
        session.messages.push(message);
        self.bump();
        true
    }

    pub fn sessions(&self) -> &[ChatSession] {
        &self.sessions
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ChatSession> {
        self.sessions.iter().find(|s| s.id == id)
    }

    pub fn active_session_id(&self) -> Option<&str> {
        self.active_session_id.as_deref()
    }

    pub fn active_session(&self) -> Option<&ChatSession> {
        self.active_session_id.as_deref().and_then(|id| self.get(id))
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Full copy of the collection, suitable for persisting.
    pub fn snapshot(&self) -> Vec<ChatSession> {
        self.sessions.clone()
    }

    fn bump(&mut self) {
        self.revision += 1;
    }
}

fn new_session_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Drop duplicate ids and re-seed empty transcripts from loaded data.
fn sanitize(sessions: Vec<ChatSession>) -> Vec<ChatSession> {
    let mut seen = HashSet::new();
    sessions
        .into_iter()
        .filter_map(|mut session| {
            if !seen.insert(session.id.clone()) {
                log::warn!("Dropping stored session with duplicate id {}", session.id);
                return None;
            }
            if session.messages.is_empty() {
                session.messages.push(greeting());
            }
            Some(session)
        })
        .collect()
}
