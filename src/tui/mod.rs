//! TUI (Terminal User Interface) module for the portfolio view.
//!
//! Renders the portfolio as a sectioned dashboard:
//! - Hero with the animated typewriter headline
//! - Skills grid
//! - Project gallery with a detail pane
//! - Achievements and community work

mod app;
mod ui;

pub use app::{App, AppState, Section};
