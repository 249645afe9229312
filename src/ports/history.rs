use crate::domain::AppError;

/// Port for locating the user's most recent shell command.
///
/// Implementations are best-effort by design: shell history is an
/// approximation of what actually ran, never a guarantee.
pub trait HistorySource {
    /// The most recent suitable command, already stripped of history
    /// bookkeeping prefixes.
    fn last_command(&self) -> Result<String, AppError>;
}
