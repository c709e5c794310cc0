//! egui front end: page state, theme and one panel per page.
//!
//! Panels only render and report what the user did; side effects are
//! returned as [`state::Effect`]s for the app layer to run.

pub mod state;
pub mod theme;
pub mod panels;
