use crate::domain::AppError;

/// Port for interactive terminal prompts.
///
/// Cancellation (interrupt during a selection) surfaces as an error that
/// propagates as fatal; there is no partial result.
pub trait InteractivePrompt {
    /// Ask a yes/no question. `number_select` switches to a numbered list
    /// so a single keypress answers.
    fn confirm(
        &self,
        message: &str,
        help: &str,
        default: bool,
        number_select: bool,
    ) -> Result<bool, AppError>;

    /// Choose one item from a list, returning its index. `default` is the
    /// pre-selected index; `number_select` renders numbered items so a
    /// single keypress answers.
    fn select_one(
        &self,
        message: &str,
        help: &str,
        items: &[String],
        default: usize,
        number_select: bool,
    ) -> Result<usize, AppError>;

    /// Read one line of free text.
    fn input_line(&self, prompt: &str) -> Result<String, AppError>;
}
