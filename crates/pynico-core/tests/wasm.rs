//! WASM-target tests for pynico-core.
//!
//! Runs the store, coordinator and controller flows under
//! wasm32-unknown-unknown via `wasm-pack test --node`.

use wasm_bindgen_test::*;

use pynico_core::controller::ChatController;
use pynico_core::coordinator::{SendOutcome, SubmitRejected};
use pynico_core::event_bus::EventBus;
use pynico_core::ports::ChatPort;
use pynico_core::store::SessionStore;
use pynico_types::message::*;
use pynico_types::session::*;
use pynico_types::{ChatError, Result};

use async_trait::async_trait;
use std::cell::Cell;
use std::rc::Rc;

struct MockChat {
    reply: Result<String>,
    calls: Cell<usize>,
}

#[async_trait(?Send)]
impl ChatPort for MockChat {
    async fn send_message(&self, _history: &[Message], _text: &str) -> Result<String> {
        self.calls.set(self.calls.get() + 1);
        self.reply.clone()
    }
}

fn controller(reply: Result<String>) -> (ChatController, Rc<MockChat>) {
    let remote = Rc::new(MockChat { reply, calls: Cell::new(0) });
    let controller = ChatController::new(remote.clone(), EventBus::new());
    controller.initialize(None);
    (controller, remote)
}

// ─── SessionStore Tests ──────────────────────────────────

#[wasm_bindgen_test]
fn store_starts_with_default_session() {
    let mut store = SessionStore::new();
    store.initialize(None);
    let session = store.active_session().unwrap();
    assert_eq!(session.title, PLACEHOLDER_TITLE);
    assert_eq!(session.messages, vec![greeting()]);
}

#[wasm_bindgen_test]
fn store_delete_last_creates_fresh() {
    let mut store = SessionStore::new();
    store.initialize(None);
    let id = store.active_session_id().unwrap().to_string();
    store.delete_session(&id);
    assert_eq!(store.len(), 1);
    assert_ne!(store.active_session_id(), Some(id.as_str()));
}

// ─── ChatController Tests ────────────────────────────────

#[wasm_bindgen_test]
async fn controller_submit_success() {
    let (controller, remote) = controller(Ok("Olá!".to_string()));
    let outcome = controller.submit("Oi").await.unwrap();
    assert!(matches!(outcome, Some(SendOutcome::Replied { .. })));
    assert_eq!(remote.calls.get(), 1);
    controller.with_view(|view| {
        assert_eq!(view.messages().len(), 3);
        assert_eq!(view.active_session.unwrap().title, "Oi");
    });
}

#[wasm_bindgen_test]
async fn controller_submit_failure() {
    let (controller, _remote) = controller(Err(ChatError::Network("offline".to_string())));
    let outcome = controller.submit("Oi").await.unwrap();
    assert!(matches!(outcome, Some(SendOutcome::Failed { .. })));
    assert!(!controller.is_sending());
    controller.with_view(|view| assert_eq!(view.messages().len(), 2));
}

#[wasm_bindgen_test]
async fn controller_rejects_whitespace() {
    let (controller, remote) = controller(Ok("unused".to_string()));
    let result = controller.submit("   ").await;
    assert_eq!(result.unwrap_err(), SubmitRejected::EmptyInput);
    assert_eq!(remote.calls.get(), 0);
}

#[wasm_bindgen_test]
fn controller_rejects_overlapping_submit() {
    let (controller, remote) = controller(Ok("unused".to_string()));
    let _ticket = controller.begin_submit("first").unwrap();
    assert_eq!(controller.begin_submit("second").unwrap_err(), SubmitRejected::Busy);
    assert_eq!(remote.calls.get(), 0);
    controller.with_view(|view| assert_eq!(view.messages().len(), 2));
}
