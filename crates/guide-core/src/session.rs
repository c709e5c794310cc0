//! Chat session lifecycle.
//!
//! An id is generated when the assistant page mounts and registered with
//! the backend once. A failed registration is logged and recorded but the
//! id stays usable: chat is gated only on having a local id.

use guide_types::{
    api::CreateSessionRequest,
    event::GuideEvent,
    session::{SessionId, SessionStatus},
};
use crate::event_bus::EventBus;
use crate::ports::ChatApiPort;

#[derive(Debug, Clone)]
pub struct SessionManager {
    id: SessionId,
    status: SessionStatus,
}

impl SessionManager {
    /// Generate a fresh id. Registration is a separate async step.
    pub fn start() -> Self {
        Self::with_id(SessionId::generate())
    }

    pub fn with_id(id: SessionId) -> Self {
        Self {
            id,
            status: SessionStatus::Pending,
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn status(&self) -> &SessionStatus {
        &self.status
    }

    /// Track registration events for this session.
    pub fn apply(&mut self, event: &GuideEvent) {
        match event {
            GuideEvent::SessionRegistered { session_id } if *session_id == self.id => {
                self.status = SessionStatus::Registered;
            }
            GuideEvent::SessionRegistrationFailed { session_id, message }
                if *session_id == self.id =>
            {
                self.status = SessionStatus::Failed(message.clone());
            }
            _ => {}
        }
    }

    /// Register `session_id` with the backend and publish the outcome.
    ///
    /// Takes the id by value so callers can spawn this without holding a
    /// borrow of the manager across the await.
    pub async fn register(
        session_id: SessionId,
        api: &dyn ChatApiPort,
        bus: &EventBus,
    ) -> SessionStatus {
        let req = CreateSessionRequest {
            session_id: session_id.clone(),
        };
        match api.create_session(&req).await {
            Ok(ack) => {
                log::info!("Session created: {} ({})", session_id, ack);
                bus.emit(GuideEvent::SessionRegistered { session_id });
                SessionStatus::Registered
            }
            Err(e) => {
                log::error!("Error creating session {}: {}", session_id, e);
                let message = e.to_string();
                bus.emit(GuideEvent::SessionRegistrationFailed {
                    session_id,
                    message: message.clone(),
                });
                SessionStatus::Failed(message)
            }
        }
    }
}
