use std::path::PathBuf;

use crate::domain::AppError;
use crate::domain::config::Config;

/// One prompt-generation invocation as assembled from external input.
///
/// Constructed once per run. The orchestrator fills in template names,
/// target, and fix file from config defaults before assembly; after that
/// the request is read-only.
#[derive(Debug, Clone)]
pub struct PromptRequest {
    pub base_prompt: String,
    pub pre_template: String,
    pub post_template: String,
    pub files: Vec<String>,
    pub directory: String,
    pub fix_mode: bool,
    pub fix_file: String,
    pub target: String,
    pub editor: String,
    /// Set only when --editor was given explicitly, never from config.
    pub editor_requested: bool,
    pub interactive: bool,
    pub force_interactive: bool,
    pub force_non_interactive: bool,
    pub number_select: bool,
    pub from_clipboard: bool,
    pub config_path: Option<PathBuf>,
}

impl PromptRequest {
    pub fn new() -> Self {
        Self {
            base_prompt: String::new(),
            pre_template: String::new(),
            post_template: String::new(),
            files: Vec::new(),
            directory: String::new(),
            fix_mode: false,
            fix_file: String::new(),
            target: String::new(),
            editor: String::new(),
            editor_requested: false,
            interactive: true,
            force_interactive: false,
            force_non_interactive: false,
            number_select: false,
            from_clipboard: false,
            config_path: None,
        }
    }

    /// Fill fields the user left empty from config defaults.
    ///
    /// The editor is deliberately not defaulted here: it only applies when
    /// explicitly requested. In fix mode the fix file is likewise left
    /// alone so an unset value falls through to history capture.
    pub fn apply_defaults(&mut self, config: &Config) {
        if self.pre_template.is_empty() && !config.default_pre.is_empty() {
            self.pre_template = config.default_pre.clone();
        }
        if self.post_template.is_empty() && !config.default_post.is_empty() {
            self.post_template = config.default_post.clone();
        }
        if self.target.is_empty() {
            self.target = config.target.to_string();
        }
        if !self.fix_mode && self.fix_file.is_empty() {
            self.fix_file = config.fix_file.display().to_string();
        }
    }

    /// Check flag invariants that must hold before any side effect runs.
    ///
    /// Called first thing on a run, ahead of interactive-mode resolution,
    /// clipboard reads, and input prompts.
    pub fn validate_flags(&self) -> Result<(), AppError> {
        if self.force_interactive && self.force_non_interactive {
            return Err(AppError::validation(
                "interactive",
                "-i -y",
                "force-interactive and force-non-interactive are mutually exclusive",
            ));
        }
        Ok(())
    }

    /// Validate the request after interactive-mode resolution.
    pub fn validate(&self) -> Result<(), AppError> {
        self.validate_flags()?;

        if !self.interactive && self.base_prompt.is_empty() && !self.fix_mode && !self.from_clipboard
        {
            return Err(AppError::validation(
                "base_prompt",
                "",
                "required in non-interactive mode",
            ));
        }

        if !self.target.is_empty() {
            crate::domain::config::Target::parse(&self.target)?;
        }

        if let Some(path) = &self.config_path
            && !path.exists()
        {
            return Err(AppError::validation(
                "config_path",
                path.display().to_string(),
                "file does not exist",
            ));
        }

        if !self.pre_template.is_empty() && self.pre_template.trim().is_empty() {
            return Err(AppError::validation(
                "template_name",
                &self.pre_template,
                "pre-template name cannot be blank",
            ));
        }
        if !self.post_template.is_empty() && self.post_template.trim().is_empty() {
            return Err(AppError::validation(
                "template_name",
                &self.post_template,
                "post-template name cannot be blank",
            ));
        }

        Ok(())
    }
}

impl Default for PromptRequest {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflicting_interactive_flags_fail_validation() {
        let mut request = PromptRequest::new();
        request.force_interactive = true;
        request.force_non_interactive = true;

        let err = request.validate_flags().unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
        assert!(request.validate().is_err());
    }

    #[test]
    fn non_interactive_requires_base_prompt() {
        let mut request = PromptRequest::new();
        request.interactive = false;

        assert!(request.validate().is_err());

        request.fix_mode = true;
        assert!(request.validate().is_ok());
    }

    #[test]
    fn bogus_target_fails_validation() {
        let mut request = PromptRequest::new();
        request.base_prompt = "Fix this bug".to_string();
        request.target = "bogus".to_string();

        let err = request.validate().unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[test]
    fn file_target_passes_validation() {
        let mut request = PromptRequest::new();
        request.base_prompt = "Fix this bug".to_string();
        request.target = "file:/tmp/out.txt".to_string();

        assert!(request.validate().is_ok());
    }

    #[test]
    fn defaults_fill_only_empty_fields() {
        use crate::domain::config::{DirectoryStrategy, Target};

        let config = Config {
            templates_root: PathBuf::from("/templates"),
            local_templates_root: None,
            editor: "nvim".to_string(),
            default_pre: "engineering".to_string(),
            default_post: String::new(),
            fix_file: PathBuf::from("/tmp/prompter-fix.txt"),
            directory_strategy: DirectoryStrategy::Git,
            target: Target::Clipboard,
            interactive_default: true,
        };

        let mut request = PromptRequest::new();
        request.post_template = "explicit".to_string();
        request.apply_defaults(&config);

        assert_eq!(request.pre_template, "engineering");
        assert_eq!(request.post_template, "explicit");
        assert_eq!(request.target, "clipboard");
        assert_eq!(request.fix_file, "/tmp/prompter-fix.txt");

        let mut fix_request = PromptRequest::new();
        fix_request.fix_mode = true;
        fix_request.apply_defaults(&config);
        assert!(fix_request.fix_file.is_empty());
    }
}
