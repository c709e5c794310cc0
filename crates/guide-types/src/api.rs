//! Request/response bodies for the chat backend.

use serde::{Deserialize, Serialize};
use crate::session::SessionId;

/// Body of `POST /api/chat/create_session`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSessionRequest {
    pub session_id: SessionId,
}

/// Body of `POST /api/chat/message`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessageRequest {
    pub message: String,
    pub session_id: SessionId,
}

/// Reply from `POST /api/chat/message`. Unknown fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessageResponse {
    pub reply: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_related: Option<bool>,
}

/// Error body some backend failures carry
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}
