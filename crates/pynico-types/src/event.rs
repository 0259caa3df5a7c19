use serde::{Deserialize, Serialize};

/// Events emitted by the chat controller.
/// UI subscribes to these for status and error feedback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChatEvent {
    SessionCreated { session_id: String },

    SessionSelected { session_id: String },

    SessionDeleted { session_id: String },

    /// User message appended, remote call about to be issued
    SendStarted { ticket: u64, session_id: String },

    /// Model reply appended
    ReplyReceived { ticket: u64, session_id: String },

    /// Remote call failed; the user message stays, no reply is appended
    SendFailed {
        ticket: u64,
        session_id: String,
        message: String,
    },
}
