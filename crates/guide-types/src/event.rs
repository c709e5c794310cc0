use serde::{Deserialize, Serialize};
use crate::hero::Hero;
use crate::session::SessionId;

/// Results of async work (fetches, registration, chat replies).
/// The UI drains these from the event bus and folds them into state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GuideEvent {
    /// Hero list fetched
    HeroesLoaded { heroes: Vec<Hero> },

    /// Hero list fetch failed
    HeroesFailed { message: String },

    /// Backend acknowledged the session
    SessionRegistered { session_id: SessionId },

    /// Session registration failed; the id stays in use
    SessionRegistrationFailed { session_id: SessionId, message: String },

    /// Assistant replied to a chat request
    ReplyReceived { session_id: SessionId, request_id: u64, text: String },

    /// Chat request failed
    ReplyFailed { session_id: SessionId, request_id: u64, message: String },
}
