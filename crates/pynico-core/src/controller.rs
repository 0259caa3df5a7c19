//! Chat controller: the presentation boundary of the core.
//!
//! Owns the session store and send coordinator behind one `Rc<RefCell<_>>`
//! (single-threaded, WASM). Borrows are only held in synchronous sections;
//! the remote call is the only suspension point.

use std::cell::RefCell;
use std::rc::Rc;

use pynico_types::{event::ChatEvent, session::ChatSession};

use crate::coordinator::{SendCoordinator, SendOutcome, SendTicket, SubmitRejected};
use crate::event_bus::EventBus;
use crate::ports::ChatPort;
use crate::store::SessionStore;
use crate::view_model::{project, ChatView};

/// State mutated by the controller
pub struct ChatCore {
    pub store: SessionStore,
    pub sender: SendCoordinator,
}

#[derive(Clone)]
pub struct ChatController {
    core: Rc<RefCell<ChatCore>>,
    remote: Rc<dyn ChatPort>,
    event_bus: EventBus,
}

impl ChatController {
    pub fn new(remote: Rc<dyn ChatPort>, event_bus: EventBus) -> Self {
        Self {
            core: Rc::new(RefCell::new(ChatCore {
                store: SessionStore::new(),
                sender: SendCoordinator::new(),
            })),
            remote,
            event_bus,
        }
    }

    /// Populate the store from loaded history (or a fresh session).
    pub fn initialize(&self, loaded: Option<Vec<ChatSession>>) {
        let active = {
            let mut core = self.core.borrow_mut();
            core.store.initialize(loaded);
            core.store.active_session_id().map(String::from)
        };
        if let Some(session_id) = active {
            self.event_bus.emit(ChatEvent::SessionSelected { session_id });
        }
    }

    pub fn is_initialized(&self) -> bool {
        !self.core.borrow().store.is_empty()
    }

    /// None before `initialize`: a session created then would make the
    /// restored history look already loaded and get it overwritten.
    pub fn create_session(&self) -> Option<String> {
        if !self.is_initialized() {
            log::debug!("Ignoring new session before history is restored");
            return None;
        }
        let session_id = self.core.borrow_mut().store.create_session().id.clone();
        self.event_bus.emit(ChatEvent::SessionCreated {
            session_id: session_id.clone(),
        });
        Some(session_id)
    }

    pub fn select_session(&self, id: &str) {
        if self.core.borrow_mut().store.select_session(id) {
            self.event_bus.emit(ChatEvent::SessionSelected {
                session_id: id.to_string(),
            });
        } else {
            log::debug!("Ignoring selection of unknown session {}", id);
        }
    }

    pub fn delete_session(&self, id: &str) {
        let (deleted, promoted) = {
            let mut core = self.core.borrow_mut();
            let before = core.store.active_session_id().map(String::from);
            let deleted = core.store.delete_session(id);
            let after = core.store.active_session_id().map(String::from);
            (deleted, after.filter(|a| before.as_ref() != Some(a)))
        };
        if !deleted {
            log::debug!("Ignoring deletion of unknown session {}", id);
            return;
        }
        self.event_bus.emit(ChatEvent::SessionDeleted {
            session_id: id.to_string(),
        });
        if let Some(session_id) = promoted {
            self.event_bus.emit(ChatEvent::SessionSelected { session_id });
        }
    }

    /// Phase one: guards, optimistic user append, enter `Sending`.
    /// The user message is visible as soon as this returns.
    pub fn begin_submit(&self, text: &str) -> Result<SendTicket, SubmitRejected> {
        let ticket = {
            let mut core = self.core.borrow_mut();
            let ChatCore { store, sender } = &mut *core;
            sender.begin(store, text)
        };
        match &ticket {
            Ok(ticket) => self.event_bus.emit(ChatEvent::SendStarted {
                ticket: ticket.id,
                session_id: ticket.session_id.clone(),
            }),
            Err(reason) => log::debug!("Submit rejected: {:?}", reason),
        }
        ticket
    }

    /// Phase two: call the remote once and settle. Always leaves `Idle`.
    pub async fn complete(&self, ticket: SendTicket) -> Option<SendOutcome> {
        let result = self.remote.send_message(&ticket.history, &ticket.text).await;

        let outcome = {
            let mut core = self.core.borrow_mut();
            let ChatCore { store, sender } = &mut *core;
            sender.settle(store, ticket.id, result)
        };

        match &outcome {
            Some(SendOutcome::Replied { ticket, session_id }) => {
                self.event_bus.emit(ChatEvent::ReplyReceived {
                    ticket: *ticket,
                    session_id: session_id.clone(),
                });
            }
            Some(SendOutcome::Failed { ticket, session_id, error }) => {
                log::error!("Failed to send message: {}", error);
                self.event_bus.emit(ChatEvent::SendFailed {
                    ticket: *ticket,
                    session_id: session_id.clone(),
                    message: error.to_string(),
                });
            }
            None => log::warn!("Dropping reply for stale send {}", ticket.id),
        }
        outcome
    }

    pub async fn submit(&self, text: &str) -> Result<Option<SendOutcome>, SubmitRejected> {
        let ticket = self.begin_submit(text)?;
        Ok(self.complete(ticket).await)
    }

    pub fn is_sending(&self) -> bool {
        self.core.borrow().sender.is_sending()
    }

    pub fn with_view<R>(&self, f: impl FnOnce(ChatView<'_>) -> R) -> R {
        let core = self.core.borrow();
        f(project(&core.store, core.sender.is_sending()))
    }

    pub fn with_store<R>(&self, f: impl FnOnce(&SessionStore) -> R) -> R {
        f(&self.core.borrow().store)
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }
}
