//! System clipboard access for copying results.

use arboard::Clipboard;

/// Clipboard failures.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("Failed to access clipboard: {0}")]
    Unavailable(#[source] arboard::Error),

    #[error("Failed to copy to clipboard: {0}")]
    Write(#[source] arboard::Error),
}

/// Copies text to the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard = Clipboard::new().map_err(ClipboardError::Unavailable)?;
    clipboard
        .set_text(text.to_string())
        .map_err(ClipboardError::Write)
}
