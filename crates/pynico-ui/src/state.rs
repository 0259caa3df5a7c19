//! Presentation-local state.
//!
//! Everything about sessions and messages comes from the core's
//! `ChatView`; this only holds what the widgets themselves need.

use pynico_types::{event::ChatEvent, theme::Theme};

pub const STATUS_READY: &str = "Pronto";
pub const STATUS_SENDING: &str = "Pensando...";

pub struct UiState {
    /// Input field content
    pub input_text: String,
    pub sidebar_collapsed: bool,
    pub show_about: bool,
    pub theme: Theme,
    /// Status line text
    pub status_text: String,
    /// Error from the last failed send; shown inline, never persisted
    pub last_error: Option<String>,
}

/// Requests from the panels that the app forwards to the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    NewChat,
    SelectSession(String),
    DeleteSession(String),
    Submit(String),
    ToggleTheme,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            input_text: String::new(),
            sidebar_collapsed: false,
            show_about: false,
            theme: Theme::default(),
            status_text: STATUS_READY.to_string(),
            last_error: None,
        }
    }

    /// Process events from the EventBus and update UI state
    pub fn process_events(&mut self, events: Vec<ChatEvent>) {
        for event in events {
            match event {
                ChatEvent::SendStarted { .. } => {
                    self.last_error = None;
                    self.status_text = STATUS_SENDING.to_string();
                }
                ChatEvent::ReplyReceived { .. } => {
                    self.status_text = STATUS_READY.to_string();
                }
                ChatEvent::SendFailed { message, .. } => {
                    self.status_text = format!("Erro: {}", message);
                    self.last_error = Some(message);
                }
                ChatEvent::SessionCreated { .. } | ChatEvent::SessionSelected { .. } => {
                    self.last_error = None;
                }
                ChatEvent::SessionDeleted { .. } => {}
            }
        }
    }

    /// A submit was accepted by the coordinator
    pub fn accept_submit(&mut self) {
        self.input_text.clear();
    }

    pub fn dismiss_error(&mut self) {
        self.last_error = None;
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
