//! Fix-mode capture: obtain the text of a previously failed command.

use std::fs;
use std::path::Path;

use crate::domain::AppError;
use crate::ports::{CommandRunner, HistorySource, InteractivePrompt};

/// Captures fix-mode content from an explicit file or by re-running the
/// user's last shell command.
pub struct FixCaptor<H: HistorySource, R: CommandRunner, P: InteractivePrompt> {
    history: H,
    runner: R,
    prompt: P,
    /// Configured fix file path, used in guidance when capture fails.
    suggested_fix_file: String,
}

impl<H: HistorySource, R: CommandRunner, P: InteractivePrompt> FixCaptor<H, R, P> {
    pub fn new(history: H, runner: R, prompt: P, suggested_fix_file: String) -> Self {
        Self { history, runner, prompt, suggested_fix_file }
    }

    /// Resolve the fix content.
    ///
    /// An explicit fix file wins; otherwise the last shell command is
    /// located and re-executed (after confirmation in interactive mode).
    pub fn capture(
        &self,
        fix_file: Option<&Path>,
        interactive: bool,
        number_select: bool,
    ) -> Result<String, AppError> {
        if let Some(path) = fix_file {
            return self.read_fix_file(path);
        }

        let command = self.history.last_command().map_err(|err| self.with_suggestion(err))?;

        if interactive {
            let confirmed = self.prompt.confirm(
                &format!("Re-run last command to capture output?\n  $ {command}"),
                "This will execute the command and capture its output for fixing",
                true,
                number_select,
            )?;
            if !confirmed {
                return Err(self.fix_error("user declined to re-run command"));
            }
        } else {
            println!("Re-running last command: {command}");
        }

        let output =
            self.runner.run_capture(&command).map_err(|err| self.with_suggestion(err))?;
        Ok(format!("$ {command}\n\n{output}").trim().to_string())
    }

    fn read_fix_file(&self, path: &Path) -> Result<String, AppError> {
        let content = fs::read_to_string(path).map_err(|err| AppError::FixMode {
            message: format!("failed to read fix file '{}': {err}", path.display()),
            fix_file: path.display().to_string(),
        })?;

        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Err(AppError::FixMode {
                message: "fix file is empty".to_string(),
                fix_file: path.display().to_string(),
            });
        }
        Ok(trimmed.to_string())
    }

    fn fix_error(&self, message: &str) -> AppError {
        AppError::FixMode {
            message: message.to_string(),
            fix_file: self.suggested_fix_file.clone(),
        }
    }

    /// Rewrite a collaborator's fix error so the guidance names the
    /// configured fix file.
    fn with_suggestion(&self, err: AppError) -> AppError {
        match err {
            AppError::FixMode { message, .. } => self.fix_error(&message),
            other => other,
        }
    }
}
