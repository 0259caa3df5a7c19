//! WASM-target tests for pynico-ui.
//!
//! Covers the widget-independent state under wasm32-unknown-unknown
//! via `wasm-pack test --node`.

use wasm_bindgen_test::*;

use pynico_types::event::ChatEvent;
use pynico_types::theme::Theme;
use pynico_ui::state::{UiState, STATUS_READY, STATUS_SENDING};
use pynico_ui::theme::{palette, DARK, LIGHT};

#[wasm_bindgen_test]
fn test_failed_send_sets_banner_and_next_send_clears_it() {
    let mut state = UiState::new();
    state.process_events(vec![
        ChatEvent::SendStarted { ticket: 1, session_id: "s".to_string() },
        ChatEvent::SendFailed {
            ticket: 1,
            session_id: "s".to_string(),
            message: "Timeout after 60000ms".to_string(),
        },
    ]);
    assert_eq!(state.last_error.as_deref(), Some("Timeout after 60000ms"));

    state.process_events(vec![ChatEvent::SendStarted { ticket: 2, session_id: "s".to_string() }]);
    assert!(state.last_error.is_none());
    assert_eq!(state.status_text, STATUS_SENDING);

    state.process_events(vec![ChatEvent::ReplyReceived { ticket: 2, session_id: "s".to_string() }]);
    assert_eq!(state.status_text, STATUS_READY);
}

#[wasm_bindgen_test]
fn test_accept_submit_clears_input() {
    let mut state = UiState::new();
    state.input_text = "O que é uma lista?".to_string();
    state.accept_submit();
    assert!(state.input_text.is_empty());
}

#[wasm_bindgen_test]
fn test_palette_follows_theme() {
    assert_eq!(palette(Theme::Dark).bg_primary, DARK.bg_primary);
    assert_eq!(palette(Theme::Light).bg_primary, LIGHT.bg_primary);
}
