//! Chat transport — one message out, one reply back.
//!
//! `exchange` never fails: every outcome becomes a `GuideEvent` that is
//! both published on the bus and returned. At most one request is in
//! flight per session; a concurrent call for the same session is answered
//! with `Busy` without reaching the port. Requests for different sessions
//! never block each other.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use guide_types::{
    GuideError,
    api::ChatMessageRequest,
    event::GuideEvent,
    session::SessionId,
};
use crate::event_bus::EventBus;
use crate::ports::ChatApiPort;

/// A chat request the conversation wants sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outbound {
    pub session_id: SessionId,
    pub request_id: u64,
    pub message: String,
}

pub struct ChatTransport {
    api: RefCell<Rc<dyn ChatApiPort>>,
    bus: EventBus,
    in_flight: RefCell<HashSet<SessionId>>,
}

/// Releases a session's slot on every exit path, including a dropped future.
struct InFlight<'a> {
    sessions: &'a RefCell<HashSet<SessionId>>,
    session_id: SessionId,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.sessions.borrow_mut().remove(&self.session_id);
    }
}

impl ChatTransport {
    pub fn new(api: Rc<dyn ChatApiPort>, bus: EventBus) -> Self {
        Self {
            api: RefCell::new(api),
            bus,
            in_flight: RefCell::new(HashSet::new()),
        }
    }

    /// Point later requests at a different backend. Requests already in
    /// flight finish against the old one and keep their slots.
    pub fn set_api(&self, api: Rc<dyn ChatApiPort>) {
        *self.api.borrow_mut() = api;
    }

    /// Whether any session has a request outstanding
    pub fn is_busy(&self) -> bool {
        !self.in_flight.borrow().is_empty()
    }

    pub fn is_busy_for(&self, session_id: &SessionId) -> bool {
        self.in_flight.borrow().contains(session_id)
    }

    pub async fn exchange(&self, outbound: Outbound) -> GuideEvent {
        let event = self.exchange_inner(outbound).await;
        self.bus.emit(event.clone());
        event
    }

    async fn exchange_inner(&self, outbound: Outbound) -> GuideEvent {
        let Outbound { session_id, request_id, message } = outbound;

        if !self.in_flight.borrow_mut().insert(session_id.clone()) {
            log::warn!(
                "Chat request {} rejected: session {} already has a request in flight",
                request_id,
                session_id
            );
            return GuideEvent::ReplyFailed {
                session_id,
                request_id,
                message: GuideError::Busy.to_string(),
            };
        }
        let _guard = InFlight {
            sessions: &self.in_flight,
            session_id: session_id.clone(),
        };

        let req = ChatMessageRequest {
            message,
            session_id: session_id.clone(),
        };
        log::debug!("Sending chat request {} for session {}", request_id, session_id);

        let api = self.api.borrow().clone();
        match api.send_message(&req).await {
            Ok(resp) => GuideEvent::ReplyReceived {
                session_id,
                request_id,
                text: resp.reply,
            },
            Err(e) => {
                log::error!("Error getting AI response: {}", e);
                GuideEvent::ReplyFailed {
                    session_id,
                    request_id,
                    message: e.to_string(),
                }
            }
        }
    }
}
