use arboard::Clipboard as Arboard;

use crate::domain::AppError;
use crate::ports::Clipboard;

/// Arboard-based clipboard implementation.
///
/// Connects on each call rather than at construction so a headless
/// environment surfaces as a recoverable dispatch failure, not a startup
/// crash.
pub struct ArboardClipboard;

impl ArboardClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ArboardClipboard {
    fn default() -> Self {
        Self::new()
    }
}

fn clipboard_error(err: impl std::fmt::Display) -> AppError {
    AppError::Output { target: "clipboard".to_string(), reason: err.to_string() }
}

impl Clipboard for ArboardClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), AppError> {
        let mut clipboard = Arboard::new().map_err(clipboard_error)?;
        clipboard.set_text(text).map_err(clipboard_error)
    }

    fn read_text(&mut self) -> Result<String, AppError> {
        let mut clipboard = Arboard::new().map_err(clipboard_error)?;
        clipboard.get_text().map_err(clipboard_error)
    }
}
