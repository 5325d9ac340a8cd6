//! Command implementations for the folio CLI.
//!
//! This module contains the actual implementations of CLI commands,
//! separated from the argument parsing definitions in cli/mod.rs.

pub mod completions;
pub mod content;
pub mod intro;
pub mod view;
