//! View command implementation.
//!
//! This module implements the `folio view` command (and the bare `folio`
//! invocation) that opens the interactive portfolio.

use std::path::Path;
use std::time::Duration;

use crate::cli::ViewCommand;
use crate::content::{ContentError, Profile};
use crate::tui::{App, AppState};
use crate::typewriter::{Timing, TypewriterError};

/// Result type for view command operations.
pub type ViewCommandResult = Result<(), ViewCommandError>;

/// Error type for view command operations.
#[derive(Debug, thiserror::Error)]
pub enum ViewCommandError {
    /// The content file could not be loaded.
    #[error(transparent)]
    Content(#[from] ContentError),
    /// The profile cannot drive the typewriter (no hero phrases).
    #[error("Invalid content: {0}")]
    Typewriter(#[from] TypewriterError),
    /// Terminal I/O failed.
    #[error("Terminal error: {0}")]
    Io(#[from] std::io::Error),
}

/// Execute the view command: load content, validate it, run the TUI.
///
/// Content and typewriter errors surface before the alternate screen is
/// entered, so a bad `--content` file never leaves the terminal in raw mode.
pub fn view(cmd: &ViewCommand, content: Option<&Path>) -> ViewCommandResult {
    let profile = Profile::load(content)?;
    let timing = Timing::from_base(
        Duration::from_millis(cmd.speed),
        Duration::from_millis(cmd.pause),
    );
    let state = AppState::new(profile, timing)?;

    let mut app = App::new(state)?;
    app.run()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_view_rejects_missing_content_file() {
        let cmd = ViewCommand::default();
        let result = view(&cmd, Some(Path::new("/nonexistent/profile.toml")));
        assert!(matches!(result, Err(ViewCommandError::Content(_))));
    }

    #[test]
    fn test_view_rejects_profile_without_phrases() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
name = "Nobody"
status = "n/a"
headline = "n/a"
tagline = "n/a"
location = "n/a"
hero_phrases = []
"#
        )
        .unwrap();

        let cmd = ViewCommand::default();
        let result = view(&cmd, Some(file.path()));
        assert!(matches!(result, Err(ViewCommandError::Typewriter(_))));
    }
}
