use serde::{Deserialize, Serialize};
use crate::{GuideError, Result};

pub const DEFAULT_API_BASE: &str = "https://dota2backend-production.up.railway.app";

/// Top-level client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuideConfig {
    pub api_base: String,
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

impl GuideConfig {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }

    /// Default config, with `GUIDE_API_BASE` (set at build time) taking precedence.
    pub fn from_env() -> Self {
        match option_env!("GUIDE_API_BASE") {
            Some(base) if !base.trim().is_empty() => Self::new(base.trim()),
            _ => Self::default(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let base = self.api_base.trim();
        if base.is_empty() {
            return Err(GuideError::Config("API base URL is empty".to_string()));
        }
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(GuideError::Config(format!(
                "API base URL must start with http:// or https://: {}",
                base
            )));
        }
        Ok(())
    }

    fn base(&self) -> &str {
        self.api_base.trim().trim_end_matches('/')
    }

    pub fn heroes_url(&self) -> String {
        format!("{}/api/heroes", self.base())
    }

    pub fn create_session_url(&self) -> String {
        format!("{}/api/chat/create_session", self.base())
    }

    pub fn chat_message_url(&self) -> String {
        format!("{}/api/chat/message", self.base())
    }
}
