//! Clipboard output for portfolio links and content.
//!
//! The terminal cannot open a browser, so the next best thing is putting a
//! URL (or the content JSON) on the clipboard. Callers that own the screen
//! (the TUI) use the silent variant and render the result themselves.

use thiserror::Error;

/// Error type for output operations.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Failed to copy content to the system clipboard.
    #[error("Failed to copy to clipboard: {0}")]
    ClipboardError(String),
}

/// Copy text to the system clipboard without printing anything.
pub fn copy_to_clipboard(text: &str) -> Result<(), OutputError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| OutputError::ClipboardError(e.to_string()))?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| OutputError::ClipboardError(e.to_string()))
}

/// Copy text to the clipboard, falling back to stdout if that fails.
///
/// Reports what happened on stderr either way, so the copied payload itself
/// stays clean on stdout.
pub fn copy_or_print(text: &str) -> Result<(), OutputError> {
    match copy_to_clipboard(text) {
        Ok(()) => {
            eprintln!("\x1b[32mCopied to clipboard!\x1b[0m");
            eprintln!("\x1b[2m({} characters)\x1b[0m", text.len());
            Ok(())
        }
        Err(e) => {
            eprintln!("\x1b[31mFailed to access clipboard:\x1b[0m {e}");
            eprintln!("\x1b[2mFalling back to stdout...\x1b[0m");
            println!("{text}");
            Err(e)
        }
    }
}
