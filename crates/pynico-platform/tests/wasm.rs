//! WASM-target tests for pynico-platform (Node.js runtime).
//!
//! Tests MemoryStorage and the persistence adapter on top of it under
//! wasm32-unknown-unknown via `wasm-pack test --node`.
//!
//! localStorage needs a browser `window` and is not covered here.

use wasm_bindgen_test::*;

use pynico_platform::storage::{open_storage, MemoryStorage};
use pynico_core::persistence::{PersistenceAdapter, SessionAutosave};
use pynico_core::ports::StoragePort;
use pynico_core::store::SessionStore;
use pynico_types::config::{StorageBackendType, StorageConfig};
use pynico_types::message::Message;
use pynico_types::theme::Theme;
use std::rc::Rc;

// ─── MemoryStorage Tests ─────────────────────────────────

#[wasm_bindgen_test]
fn memory_storage_backend_name() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.backend_name(), "memory");
}

#[wasm_bindgen_test]
async fn memory_storage_get_missing() {
    let storage = MemoryStorage::new();
    assert!(storage.get("nonexistent").await.unwrap().is_none());
}

#[wasm_bindgen_test]
async fn memory_storage_overwrite() {
    let storage = MemoryStorage::new();
    storage.set("key", b"v1").await.unwrap();
    storage.set("key", b"v2").await.unwrap();
    assert_eq!(storage.get("key").await.unwrap(), Some(b"v2".to_vec()));
}

#[wasm_bindgen_test]
fn configured_memory_backend() {
    let storage = open_storage(&StorageBackendType::Memory);
    assert_eq!(storage.backend_name(), "memory");
}

// ─── Persistence Tests ───────────────────────────────────

#[wasm_bindgen_test]
async fn autosave_then_reload_restores_sessions() {
    let storage: Rc<dyn StoragePort> = Rc::new(MemoryStorage::new());
    let persistence = PersistenceAdapter::new(storage, &StorageConfig::default());

    let mut store = SessionStore::new();
    store.initialize(persistence.load_sessions().await);
    let id = store.active_session_id().unwrap().to_string();
    store.append_message(&id, Message::user("Oi"));
    store.append_message(&id, Message::model("Olá!"));

    let mut autosave = SessionAutosave::new();
    let snapshot = autosave.take_snapshot(&store).unwrap();
    persistence.save_sessions(&snapshot).await;

    let mut reloaded = SessionStore::new();
    reloaded.initialize(persistence.load_sessions().await);
    assert_eq!(reloaded.sessions(), store.sessions());
    assert_eq!(reloaded.active_session().unwrap().title, "Oi");
}

#[wasm_bindgen_test]
async fn theme_preference_persists() {
    let storage: Rc<dyn StoragePort> = Rc::new(MemoryStorage::new());
    let persistence = PersistenceAdapter::new(storage, &StorageConfig::default());
    assert_eq!(persistence.load_theme().await, Theme::Dark);
    persistence.save_theme(Theme::Light).await;
    assert_eq!(persistence.load_theme().await, Theme::Light);
}
