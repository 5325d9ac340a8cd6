//! Content command implementation.
//!
//! This module implements the `folio content` command for dumping the
//! portfolio content as JSON.

use std::path::Path;

use crate::cli::output::{copy_or_print, OutputError};
use crate::cli::ContentCommand;
use crate::content::{ContentError, Profile};

/// Result type for content command operations.
pub type ContentCommandResult = Result<(), ContentCommandError>;

/// Error type for content command operations.
#[derive(Debug, thiserror::Error)]
pub enum ContentCommandError {
    /// The content file could not be loaded.
    #[error(transparent)]
    Content(#[from] ContentError),
    /// The profile failed to serialise.
    #[error("Failed to serialise content: {0}")]
    Serialise(#[from] serde_json::Error),
    /// Clipboard copy was requested and failed.
    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Execute the content command.
pub fn content(cmd: &ContentCommand, path: Option<&Path>) -> ContentCommandResult {
    let profile = Profile::load(path)?;
    let json = if cmd.pretty {
        serde_json::to_string_pretty(&profile)?
    } else {
        serde_json::to_string(&profile)?
    };

    if cmd.copy {
        copy_or_print(&json)?;
    } else {
        println!("{json}");
    }
    Ok(())
}
