//! Sequences configuration, template rendering, fix capture, and assembly.

use chrono::Local;

use crate::app::fix::FixCaptor;
use crate::domain::config::Config;
use crate::domain::{
    AppError, ExecutionContext, FixInfo, GitInfo, PromptRequest, TemplateData, TemplateKind,
    assembler,
};
use crate::ports::{CommandRunner, HistorySource, InteractivePrompt, TemplateRenderer, TemplateStore};

/// Root-level template rendered as the fix-mode opener when present.
const FIX_TEMPLATE_FILE: &str = "fix.md";

/// Coordinates the prompt-assembly pipeline for one invocation.
pub struct Orchestrator<'a, S: TemplateStore, R: TemplateRenderer> {
    ctx: &'a ExecutionContext,
    store: S,
    renderer: R,
    git: GitInfo,
}

impl<'a, S: TemplateStore, R: TemplateRenderer> Orchestrator<'a, S, R> {
    pub fn new(ctx: &'a ExecutionContext, store: S, renderer: R, git: GitInfo) -> Self {
        Self { ctx, store, renderer, git }
    }

    /// Generate the assembled prompt text.
    pub fn generate<H, C, P>(
        &self,
        request: &PromptRequest,
        config: &Config,
        captor: &FixCaptor<H, C, P>,
    ) -> Result<String, AppError>
    where
        H: HistorySource,
        C: CommandRunner,
        P: InteractivePrompt,
    {
        request.validate()?;

        if request.fix_mode {
            self.generate_fix(request, config, captor)
        } else {
            self.generate_normal(request, config)
        }
    }

    fn generate_normal(
        &self,
        request: &PromptRequest,
        config: &Config,
    ) -> Result<String, AppError> {
        let mut parts: Vec<String> = Vec::new();

        if !request.pre_template.is_empty() {
            self.render_optional(request, config, &request.pre_template, TemplateKind::Pre, &mut parts)?;
        }

        if !request.base_prompt.is_empty() {
            parts.push(request.base_prompt.clone());
        }

        let directory = self.resolved_directory(request, config);
        if let Some(block) =
            assembler::reference_block(&request.files, directory.as_deref())
        {
            parts.push(block);
        }

        if !request.post_template.is_empty() {
            self.render_optional(request, config, &request.post_template, TemplateKind::Post, &mut parts)?;
        }

        Ok(assembler::join_parts(&parts))
    }

    fn generate_fix<H, C, P>(
        &self,
        request: &PromptRequest,
        config: &Config,
        captor: &FixCaptor<H, C, P>,
    ) -> Result<String, AppError>
    where
        H: HistorySource,
        C: CommandRunner,
        P: InteractivePrompt,
    {
        let fix_file = (!request.fix_file.is_empty())
            .then(|| std::path::PathBuf::from(&request.fix_file));
        let captured =
            captor.capture(fix_file.as_deref(), request.interactive, request.number_select)?;

        let opener = match self.store.load_root_file(FIX_TEMPLATE_FILE) {
            Ok(handle) => {
                let data =
                    self.template_data(request, config, FixInfo::from_captured(&captured));
                self.renderer.render(&handle, &data)?.trim().to_string()
            }
            Err(AppError::TemplateNotFound { .. }) => {
                assembler::DEFAULT_FIX_OPENER.to_string()
            }
            Err(other) => return Err(other),
        };

        Ok(assembler::join_parts(&[opener, captured]))
    }

    /// Render a named pre/post template into `parts`.
    ///
    /// A missing template is recoverable: warn and continue without that
    /// part. Any other failure is fatal.
    fn render_optional(
        &self,
        request: &PromptRequest,
        config: &Config,
        name: &str,
        kind: TemplateKind,
        parts: &mut Vec<String>,
    ) -> Result<(), AppError> {
        match self.render_named(request, config, name, kind) {
            Ok(content) => {
                if !content.is_empty() {
                    parts.push(content);
                }
                Ok(())
            }
            Err(err) if err.is_recoverable() => {
                eprintln!("Warning: {err}");
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    fn render_named(
        &self,
        request: &PromptRequest,
        config: &Config,
        name: &str,
        kind: TemplateKind,
    ) -> Result<String, AppError> {
        let handle = self.store.discover(name, Some(kind))?;
        let data = self.template_data(request, config, FixInfo::default());
        self.renderer.render(&handle, &data)
    }

    fn resolved_directory(&self, request: &PromptRequest, config: &Config) -> Option<String> {
        if request.directory.is_empty() {
            return None;
        }
        let repo_root =
            (!self.git.root.is_empty()).then(|| std::path::PathBuf::from(&self.git.root));
        let resolved = assembler::resolve_directory(
            self.ctx,
            config.directory_strategy,
            &request.directory,
            repo_root.as_deref(),
        );
        Some(resolved.display().to_string())
    }

    fn template_data(
        &self,
        request: &PromptRequest,
        config: &Config,
        fix: FixInfo,
    ) -> TemplateData {
        TemplateData {
            prompt: request.base_prompt.clone(),
            now: Local::now().to_rfc3339(),
            cwd: self.ctx.cwd.display().to_string(),
            files: request.files.clone(),
            dir: self.resolved_directory(request, config).unwrap_or_default(),
            git: self.git.clone(),
            config: config.as_map(),
            env: self.ctx.env.clone(),
            fix,
        }
    }
}
