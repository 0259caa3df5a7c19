//! Send coordinator: the two-phase send-message state machine.
//!
//! `begin` checks the guards, captures the history, appends the user turn
//! optimistically and enters `Sending`. `settle` applies the remote outcome
//! and always returns to `Idle`. At most one send is in flight.

use pynico_types::{message::Message, ChatError, Result};

use crate::store::SessionStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendState {
    Idle,
    Sending { ticket: u64, session_id: String },
}

/// Why a submit was refused. No state is touched when this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejected {
    EmptyInput,
    Busy,
    NoActiveSession,
}

/// One accepted send, carried from `begin` to `settle`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendTicket {
    pub id: u64,
    pub session_id: String,
    /// Messages of the session as they were before the user turn was appended
    pub history: Vec<Message>,
    pub text: String,
}

#[derive(Debug, Clone)]
pub enum SendOutcome {
    Replied { ticket: u64, session_id: String },
    Failed { ticket: u64, session_id: String, error: ChatError },
}

pub struct SendCoordinator {
    state: SendState,
    ticket_counter: u64,
}

impl SendCoordinator {
    pub fn new() -> Self {
        Self {
            state: SendState::Idle,
            ticket_counter: 0,
        }
    }

    /// The busy flag
    pub fn is_sending(&self) -> bool {
        matches!(self.state, SendState::Sending { .. })
    }

    pub fn begin(
        &mut self,
        store: &mut SessionStore,
        text: &str,
    ) -> std::result::Result<SendTicket, SubmitRejected> {
        if text.trim().is_empty() {
            return Err(SubmitRejected::EmptyInput);
        }
        if self.is_sending() {
            return Err(SubmitRejected::Busy);
        }
        let (session_id, history) = match store.active_session() {
            Some(session) => (session.id.clone(), session.messages.clone()),
            None => return Err(SubmitRejected::NoActiveSession),
        };

        store.append_message(&session_id, Message::user(text));

        self.ticket_counter += 1;
        let ticket = self.ticket_counter;
        self.state = SendState::Sending {
            ticket,
            session_id: session_id.clone(),
        };

        Ok(SendTicket {
            id: ticket,
            session_id,
            history,
            text: text.to_string(),
        })
    }

    /// Apply the remote outcome for `ticket`. Returns None for a stale ticket.
    pub fn settle(
        &mut self,
        store: &mut SessionStore,
        ticket: u64,
        outcome: Result<String>,
    ) -> Option<SendOutcome> {
        let session_id = match &self.state {
            SendState::Sending { ticket: current, session_id } if *current == ticket => {
                session_id.clone()
            }
            _ => return None,
        };
        self.state = SendState::Idle;

        match outcome {
            Ok(reply) => {
                // The session may have been deleted meanwhile; append is then a no-op.
                store.append_message(&session_id, Message::model(reply));
                Some(SendOutcome::Replied { ticket, session_id })
            }
            Err(error) => Some(SendOutcome::Failed { ticket, session_id, error }),
        }
    }
}

impl Default for SendCoordinator {
    fn default() -> Self {
        Self::new()
    }
}
