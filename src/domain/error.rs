use thiserror::Error;

/// Library-wide error type for prompter operations.
///
/// The taxonomy is closed: every failure surfaced to the user is one of
/// these variants, each paired with remedial guidance via [`AppError::guidance`].
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded, parsed, or validated.
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// No template file matched the requested name in any root.
    #[error("template '{name}' not found")]
    TemplateNotFound { name: String },

    /// A template was found but could not be parsed or rendered.
    #[error("template '{name}' is invalid: {reason}")]
    TemplateInvalid { name: String, reason: String },

    /// A referenced file or directory could not be resolved.
    #[error("failed to collect content from '{path}': {reason}")]
    ContentCollection { path: String, reason: String },

    /// Fix-mode capture failed.
    #[error("fix mode failed: {message}")]
    FixMode { message: String, fix_file: String },

    /// Writing to an output sink failed.
    #[error("failed to output to target '{target}': {reason}")]
    Output { target: String, reason: String },

    /// Request or input validation failed.
    #[error("validation failed for {field}: '{value}' ({reason})")]
    Validation { field: String, value: String, reason: String },
}

impl AppError {
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        AppError::Configuration { message: message.into() }
    }

    pub fn validation<F, V, R>(field: F, value: V, reason: R) -> Self
    where
        F: Into<String>,
        V: Into<String>,
        R: Into<String>,
    {
        AppError::Validation { field: field.into(), value: value.into(), reason: reason.into() }
    }

    /// Whether the orchestrator may continue past this error.
    ///
    /// A named optional pre/post template that is missing, or a clipboard
    /// write that failed, degrade with a warning instead of aborting.
    pub fn is_recoverable(&self) -> bool {
        match self {
            AppError::TemplateNotFound { .. } => true,
            AppError::Output { target, .. } => target == "clipboard",
            _ => false,
        }
    }

    /// Actionable guidance for the user, often including the exact command to run.
    pub fn guidance(&self) -> String {
        match self {
            AppError::Configuration { message } => {
                if message.contains("permission") {
                    "Check file permissions for your configuration directory. Ensure you have \
                     read/write access to ~/.config/prompter/."
                        .to_string()
                } else {
                    "Check your configuration file syntax and ensure all paths exist. Use \
                     'prompter --config /path/to/config.toml' to specify a different config file."
                        .to_string()
                }
            }
            AppError::TemplateNotFound { name } => format!(
                "Template '{name}' was not found in the pre/ or post/ template directories. \
                 Template names are case-insensitive; run 'prompter list' to see what is \
                 available, or omit the --pre/--post flag to continue without it."
            ),
            AppError::TemplateInvalid { name, .. } => format!(
                "Template '{name}' has syntax errors. Check for balanced {{{{ }}}} delimiters \
                 and that every referenced variable exists in the template data."
            ),
            AppError::ContentCollection { path, .. } => format!(
                "Ensure '{path}' exists and you have read permissions. Check that the path is \
                 spelled correctly and accessible."
            ),
            AppError::FixMode { message, fix_file } => {
                if message.contains("empty") {
                    format!(
                        "Fix file '{fix_file}' is empty. Capture the failing command output \
                         first: your-command 2>&1 | tee {fix_file}"
                    )
                } else {
                    format!(
                        "Could not capture the previous command automatically. Pipe the output \
                         into a fix file instead:\n  your-command 2>&1 | tee {fix_file}\nthen \
                         run: prompter --fix --fix-file {fix_file}"
                    )
                }
            }
            AppError::Output { target, .. } => {
                if target == "clipboard" {
                    "Clipboard access failed. Ensure you are running in a graphical environment \
                     or use --target stdout instead."
                        .to_string()
                } else if target == "editor" {
                    "Editor launch failed. Check that the editor is installed and on PATH, or \
                     set the EDITOR environment variable / --editor flag."
                        .to_string()
                } else if let Some(path) = target.strip_prefix("file:") {
                    format!(
                        "Failed to write to '{path}'. Check that the directory exists and you \
                         have write permissions."
                    )
                } else {
                    "Check that the output target is valid and accessible.".to_string()
                }
            }
            AppError::Validation { field, .. } => match field.as_str() {
                "base_prompt" => "A base prompt is required in non-interactive mode. Provide a \
                                  prompt argument or drop the -y flag to answer interactively."
                    .to_string(),
                "target" => "Target must be 'clipboard', 'stdout', or 'file:/path/to/file'. \
                             Example: --target file:/tmp/prompt.txt"
                    .to_string(),
                "config_path" => "The configuration file path must exist and be readable. Check \
                                  the path passed to --config."
                    .to_string(),
                "directory_strategy" => {
                    "directory_strategy must be 'git' or 'filesystem'.".to_string()
                }
                _ => "Check the input value and ensure it meets the required format.".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_not_found_is_recoverable() {
        let err = AppError::TemplateNotFound { name: "review".to_string() };
        assert!(err.is_recoverable());
    }

    #[test]
    fn clipboard_output_is_recoverable_but_file_is_not() {
        let clip = AppError::Output { target: "clipboard".to_string(), reason: "no display".to_string() };
        let file = AppError::Output { target: "file:/tmp/x".to_string(), reason: "denied".to_string() };
        assert!(clip.is_recoverable());
        assert!(!file.is_recoverable());
    }

    #[test]
    fn fix_mode_guidance_names_the_tee_recipe() {
        let err = AppError::FixMode {
            message: "no shell history found".to_string(),
            fix_file: "/tmp/prompter-fix.txt".to_string(),
        };
        assert!(err.guidance().contains("2>&1 | tee /tmp/prompter-fix.txt"));
    }

    #[test]
    fn validation_errors_are_fatal() {
        let err = AppError::validation("target", "bogus", "unsupported output target");
        assert!(!err.is_recoverable());
    }
}
