use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GuideError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API Error: {status} - {message}")]
    Http { status: u16, message: String },

    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("A request is already in flight")]
    Busy,

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for GuideError {
    fn from(e: serde_json::Error) -> Self {
        GuideError::Serialization(e.to_string())
    }
}
