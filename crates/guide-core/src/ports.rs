//! Port traits — the hexagonal architecture boundary.
//!
//! These traits are defined here in `guide-core` (pure Rust).
//! Implementations live in `guide-platform` (browser adapters).
//! The core never imports platform code; it only depends on these traits.

use async_trait::async_trait;
use guide_types::{
    Result,
    api::{ChatMessageRequest, ChatMessageResponse, CreateSessionRequest},
    hero::Hero,
};

// ─── Hero Data Port ──────────────────────────────────────────

#[async_trait(?Send)]
pub trait HeroApiPort {
    /// Fetch the full hero collection (no pagination)
    async fn fetch_heroes(&self) -> Result<Vec<Hero>>;
}

// ─── Chat Port ───────────────────────────────────────────────

#[async_trait(?Send)]
pub trait ChatApiPort {
    /// Register a session id. The acknowledgment body is not validated.
    async fn create_session(&self, req: &CreateSessionRequest) -> Result<serde_json::Value>;

    /// Send one message and await one reply
    async fn send_message(&self, req: &ChatMessageRequest) -> Result<ChatMessageResponse>;
}
