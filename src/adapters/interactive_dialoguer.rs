use dialoguer::{Confirm, Input, Select};

use crate::domain::AppError;
use crate::ports::InteractivePrompt;

/// Dialoguer-based terminal prompts.
pub struct DialoguerPrompt;

impl DialoguerPrompt {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompt {
    fn default() -> Self {
        Self::new()
    }
}

fn cancelled() -> AppError {
    AppError::validation("selection", "", "selection cancelled")
}

impl InteractivePrompt for DialoguerPrompt {
    fn confirm(
        &self,
        message: &str,
        help: &str,
        default: bool,
        number_select: bool,
    ) -> Result<bool, AppError> {
        if number_select {
            let items = if default { ["Yes (default)", "No"] } else { ["Yes", "No (default)"] };
            let selection = Select::new()
                .with_prompt(format!("{message}\n  {help}"))
                .items(&items)
                .default(if default { 0 } else { 1 })
                .interact_opt()
                .map_err(|err| {
                    AppError::validation("selection", "", format!("prompt failed: {err}"))
                })?;
            return match selection {
                Some(index) => Ok(index == 0),
                None => Err(cancelled()),
            };
        }

        Confirm::new()
            .with_prompt(message)
            .default(default)
            .interact_opt()
            .map_err(|err| AppError::validation("selection", "", format!("prompt failed: {err}")))?
            .ok_or_else(cancelled)
    }

    fn select_one(
        &self,
        message: &str,
        help: &str,
        items: &[String],
        default: usize,
        number_select: bool,
    ) -> Result<usize, AppError> {
        let prompt = if help.is_empty() {
            message.to_string()
        } else {
            format!("{message}\n  {help}")
        };
        let rendered: Vec<String> = if number_select {
            items.iter().enumerate().map(|(i, item)| format!("{}. {item}", i + 1)).collect()
        } else {
            items.to_vec()
        };

        Select::new()
            .with_prompt(prompt)
            .items(&rendered)
            .default(default)
            .interact_opt()
            .map_err(|err| AppError::validation("selection", "", format!("prompt failed: {err}")))?
            .ok_or_else(cancelled)
    }

    fn input_line(&self, prompt: &str) -> Result<String, AppError> {
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|err| AppError::validation("input", "", format!("prompt failed: {err}")))
    }
}
