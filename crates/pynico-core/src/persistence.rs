//! Persistence adapter: session history and theme preference on a `StoragePort`.
//!
//! Persistence is best-effort. Loads fail soft to "no data", saves log and
//! swallow errors. Nothing here ever returns an error to the caller.

use std::rc::Rc;

use pynico_types::{
    config::StorageConfig,
    session::ChatSession,
    theme::Theme,
    ChatError,
};

use crate::ports::StoragePort;
use crate::store::SessionStore;

pub struct PersistenceAdapter {
    storage: Rc<dyn StoragePort>,
    sessions_key: String,
    theme_key: String,
}

impl PersistenceAdapter {
    pub fn new(storage: Rc<dyn StoragePort>, config: &StorageConfig) -> Self {
        Self {
            storage,
            sessions_key: config.sessions_key.clone(),
            theme_key: config.theme_key.clone(),
        }
    }

    pub fn backend_name(&self) -> &str {
        self.storage.backend_name()
    }

    /// Stored sessions, or None when storage is missing, unreadable, corrupt or empty.
    pub async fn load_sessions(&self) -> Option<Vec<ChatSession>> {
        let raw = match self.storage.get(&self.sessions_key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                log::info!("No saved chat history under {}", self.sessions_key);
                return None;
            }
            Err(e) => {
                log::warn!("Failed to read chat history: {}", e);
                return None;
            }
        };

        match decode_sessions(&raw) {
            Ok(sessions) if sessions.is_empty() => {
                log::info!("Saved chat history is empty");
                None
            }
            Ok(sessions) => Some(sessions),
            Err(e) => {
                log::warn!("{}; starting a fresh session", e);
                None
            }
        }
    }

    /// Write a full snapshot. An empty collection is never written.
    pub async fn save_sessions(&self, sessions: &[ChatSession]) {
        if sessions.is_empty() {
            log::debug!("Skipping save of empty session collection");
            return;
        }

        let json = match serde_json::to_vec(sessions) {
            Ok(json) => json,
            Err(e) => {
                log::error!("{}", ChatError::StorageWriteFailed(e.to_string()));
                return;
            }
        };

        if let Err(e) = self.storage.set(&self.sessions_key, &json).await {
            log::error!("{}", ChatError::StorageWriteFailed(e.to_string()));
        }
    }

    pub async fn load_theme(&self) -> Theme {
        match self.storage.get(&self.theme_key).await {
            Ok(Some(raw)) => std::str::from_utf8(&raw)
                .ok()
                .and_then(Theme::parse)
                .unwrap_or_default(),
            Ok(None) => Theme::default(),
            Err(e) => {
                log::warn!("Failed to read theme preference: {}", e);
                Theme::default()
            }
        }
    }

    pub async fn save_theme(&self, theme: Theme) {
        if let Err(e) = self.storage.set(&self.theme_key, theme.as_str().as_bytes()).await {
            log::warn!("Failed to save theme preference: {}", e);
        }
    }
}

fn decode_sessions(raw: &[u8]) -> Result<Vec<ChatSession>, ChatError> {
    serde_json::from_slice(raw).map_err(|e| ChatError::StorageCorrupt(e.to_string()))
}

/// Turns store revisions into save requests.
///
/// The host calls `take_snapshot` after every event-loop turn and writes
/// each returned snapshot in order.
#[derive(Debug, Default)]
pub struct SessionAutosave {
    saved_revision: Option<u64>,
}

impl SessionAutosave {
    pub fn new() -> Self {
        Self::default()
    }

    /// A full snapshot if the store changed since the last call and is non-empty.
    pub fn take_snapshot(&mut self, store: &SessionStore) -> Option<Vec<ChatSession>> {
        if store.is_empty() || self.saved_revision == Some(store.revision()) {
            return None;
        }
        self.saved_revision = Some(store.revision());
        Some(store.snapshot())
    }
}
