//! Browser adapters for the guide-core ports.
//!
//! Everything here talks to the network through `fetch()` and only does
//! useful work on wasm32; the core crates stay platform-free.

pub mod api;
