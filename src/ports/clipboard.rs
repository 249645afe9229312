use crate::domain::AppError;

/// Port for the system clipboard.
pub trait Clipboard {
    /// Write text to the clipboard.
    fn write_text(&mut self, text: &str) -> Result<(), AppError>;

    /// Read the current clipboard text.
    fn read_text(&mut self) -> Result<String, AppError>;
}
