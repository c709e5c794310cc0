pub mod hero;
pub mod message;
pub mod session;
pub mod api;
pub mod event;
pub mod config;
pub mod error;


pub use error::GuideError;
pub type Result<T> = std::result::Result<T, GuideError>;
