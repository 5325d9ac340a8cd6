//! Intro command implementation.
//!
//! This module implements the `folio intro` command: inline typewriter
//! playback on the current line, no alternate screen.

use std::io::{self, Write};
use std::path::Path;
use std::sync::mpsc;
use std::time::Duration;

use crate::cli::IntroCommand;
use crate::content::{ContentError, Profile};
use crate::typewriter::{Timing, Typewriter, TypewriterError, TypewriterHandle};

/// Result type for intro command operations.
pub type IntroCommandResult = Result<(), IntroCommandError>;

/// Error type for intro command operations.
#[derive(Debug, thiserror::Error)]
pub enum IntroCommandError {
    /// The content file could not be loaded.
    #[error(transparent)]
    Content(#[from] ContentError),
    /// The profile cannot drive the typewriter (no hero phrases).
    #[error("Invalid content: {0}")]
    Typewriter(#[from] TypewriterError),
}

/// Execute the intro command.
///
/// Runs the typewriter on its background thread, prints each frame in place,
/// and stops the thread after the requested number of full cycles.
pub fn intro(cmd: &IntroCommand, content: Option<&Path>) -> IntroCommandResult {
    let profile = Profile::load(content)?;
    let timing = Timing::from_base(
        Duration::from_millis(cmd.speed),
        Duration::from_millis(cmd.pause),
    );
    let typewriter = Typewriter::new(profile.hero_phrases.clone(), timing)?;
    let total_ticks = typewriter.cycle_ticks() * cmd.cycles;

    let (tx, rx) = mpsc::channel();
    let mut handle = TypewriterHandle::spawn(typewriter, move |frame| {
        let _ = tx.send(frame.to_string());
    });

    for frame in rx.iter().take(total_ticks) {
        print!("\r\x1b[2KHello, I'm \x1b[1;36m{frame}\x1b[0m\x1b[36m▌\x1b[0m");
        let _ = io::stdout().flush();
    }
    handle.stop();

    // Leave the full name on screen rather than a half-deleted phrase.
    println!(
        "\r\x1b[2KHello, I'm \x1b[1;36m{}\x1b[0m",
        profile.hero_phrases[0]
    );
    Ok(())
}
