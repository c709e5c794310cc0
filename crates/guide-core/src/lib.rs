pub mod ports;
pub mod event_bus;
pub mod directory;
pub mod session;
pub mod transport;
pub mod conversation;
pub mod content;

#[cfg(test)]
mod tests;
