//! folio - a personal developer portfolio that lives in your terminal.
//!
//! This library provides the pieces behind the folio binary: the portfolio
//! content model, the typewriter text-cycling effect, and the ratatui view
//! that renders hero, skills, projects, and achievements sections.

#![deny(missing_docs)]

include!(concat!(env!("OUT_DIR"), "/version.rs"));

pub mod cli;
pub mod content;
pub mod tui;
pub mod typewriter;

// Re-export key types for convenience
pub use content::Profile;
pub use typewriter::{Timing, Typewriter, TypewriterError, TypewriterHandle};
