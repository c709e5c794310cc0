//! Backend REST adapter.
//!
//! One client serves both ports: `GET /api/heroes`, and the two chat
//! endpoints under `/api/chat/`. Uses browser `fetch()` via gloo-net.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use guide_core::ports::{ChatApiPort, HeroApiPort};
use guide_types::{
    GuideError, Result,
    api::{ApiErrorBody, ChatMessageRequest, ChatMessageResponse, CreateSessionRequest},
    config::GuideConfig,
    hero::Hero,
};

pub struct BackendClient {
    config: GuideConfig,
}

impl BackendClient {
    pub fn new(config: GuideConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GuideConfig {
        &self.config
    }

    async fn post_json<B, T>(&self, url: &str, body: &B) -> Result<T>
    where
        B: serde::Serialize,
        T: DeserializeOwned,
    {
        log::debug!("POST {}", url);
        let response = Request::post(url)
            .json(body)
            .map_err(|e| GuideError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| GuideError::Network(e.to_string()))?;

        decode(response).await
    }
}

/// Map a non-2xx response to `Http`, otherwise decode the JSON body.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    if !response.ok() {
        let status = response.status();
        let status_text = response.status_text();
        let body = response.text().await.unwrap_or_default();
        return Err(GuideError::Http {
            status,
            message: error_detail(&body, &status_text),
        });
    }

    response
        .json()
        .await
        .map_err(|e| GuideError::Decode(e.to_string()))
}

pub const UNKNOWN_API_ERROR: &str = "Unknown error from API";

/// The body's `detail` field when present. A JSON body without one falls
/// back to the HTTP status text; a body that is not JSON at all is unknown.
pub fn error_detail(body: &str, status_text: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => parsed
            .detail
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| status_text.to_string()),
        Err(_) => UNKNOWN_API_ERROR.to_string(),
    }
}

#[async_trait(?Send)]
impl HeroApiPort for BackendClient {
    async fn fetch_heroes(&self) -> Result<Vec<Hero>> {
        let url = self.config.heroes_url();
        log::debug!("GET {}", url);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| GuideError::Network(e.to_string()))?;

        decode(response).await
    }
}

#[async_trait(?Send)]
impl ChatApiPort for BackendClient {
    async fn create_session(&self, req: &CreateSessionRequest) -> Result<serde_json::Value> {
        self.post_json(&self.config.create_session_url(), req).await
    }

    async fn send_message(&self, req: &ChatMessageRequest) -> Result<ChatMessageResponse> {
        self.post_json(&self.config.chat_message_url(), req).await
    }
}
