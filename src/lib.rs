//! prompter: assemble AI coding prompts from templates, file references,
//! and captured command output.
//!
//! The crate is layered hexagonally: `domain` holds pure types and
//! assembly rules, `ports` the trait seams, `adapters` the concrete
//! integrations (filesystem, clipboard, git, terminal), and `app` the
//! orchestration that ties one invocation together.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

use std::path::{Path, PathBuf};

use adapters::{
    ArboardClipboard, DialoguerPrompt, FilesystemTemplateStore, MinijinjaRenderer, ShellCommandRunner,
    ShellHistory,
};
use app::{FixCaptor, Orchestrator, OutputDispatcher};
use domain::config::{self, ConfigLayer};
use domain::{AppError, ExecutionContext, PromptRequest, TemplateKind};
use ports::Clipboard;

/// Run one prompt-generation invocation against the real process environment.
pub fn run(request: PromptRequest) -> Result<(), AppError> {
    run_with_context(&ExecutionContext::from_process(), request)
}

/// Run one prompt-generation invocation against an explicit context.
pub fn run_with_context(
    ctx: &ExecutionContext,
    mut request: PromptRequest,
) -> Result<(), AppError> {
    request.validate_flags()?;
    ensure_config_path_exists(request.config_path.as_deref())?;
    let config = config::resolve(ctx, request.config_path.as_deref(), ConfigLayer::default())?;

    request.interactive = if request.force_interactive {
        true
    } else if request.force_non_interactive {
        false
    } else {
        config.interactive_default
    };

    if request.from_clipboard {
        let mut clipboard = ArboardClipboard::new();
        let pasted = clipboard.read_text()?;
        if request.base_prompt.is_empty() {
            request.base_prompt = pasted;
        } else if !pasted.is_empty() {
            request.base_prompt = format!("{}\n\n{pasted}", request.base_prompt);
        }
    }

    request.apply_defaults(&config);

    let store = FilesystemTemplateStore::from_config(&config);
    app::interactive::collect_missing_inputs(ctx, &mut request, &store, &DialoguerPrompt::new())?;

    request.validate()?;

    let git = adapters::snapshot(&ctx.cwd);
    let orchestrator = Orchestrator::new(ctx, store, MinijinjaRenderer::new(), git);
    let captor = FixCaptor::new(
        ShellHistory::new(ctx),
        ShellCommandRunner::new(),
        DialoguerPrompt::new(),
        config.fix_file.display().to_string(),
    );

    let prompt = orchestrator.generate(&request, &config, &captor)?;

    let mut dispatcher = OutputDispatcher::new(ctx, ArboardClipboard::new());
    dispatcher.deliver(&prompt, &request, &config)
}

/// An explicitly passed config path must exist; only the default location
/// may be silently absent.
fn ensure_config_path_exists(config_path: Option<&Path>) -> Result<(), AppError> {
    if let Some(path) = config_path
        && !path.exists()
    {
        return Err(AppError::validation(
            "config_path",
            path.display().to_string(),
            "file does not exist",
        ));
    }
    Ok(())
}

/// List the configured template roots and every discoverable template.
pub fn list_templates(
    ctx: &ExecutionContext,
    config_path: Option<&Path>,
) -> Result<String, AppError> {
    ensure_config_path_exists(config_path)?;
    let config = config::resolve(ctx, config_path, ConfigLayer::default())?;
    let store = FilesystemTemplateStore::from_config(&config);
    app::list::execute(&store)
}

/// Save a new pre/post template under the global templates root, asking
/// for any detail the caller left out.
pub fn add_template(
    ctx: &ExecutionContext,
    config_path: Option<&Path>,
    kind: Option<TemplateKind>,
    name: Option<String>,
    content: Option<String>,
) -> Result<PathBuf, AppError> {
    ensure_config_path_exists(config_path)?;
    let config = config::resolve(ctx, config_path, ConfigLayer::default())?;
    app::add::run(&config, &DialoguerPrompt::new(), kind, name, content)
}
