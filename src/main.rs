use std::path::PathBuf;

use clap::{Parser, Subcommand};
use prompter::domain::{AppError, ExecutionContext, PromptRequest, TemplateKind};

#[derive(Parser)]
#[command(name = "prompter")]
#[command(version)]
#[command(
    about = "Assemble AI coding prompts from templates, file references, and command output",
    long_about = None
)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// The base prompt text
    base_prompt: Option<String>,

    /// Pre-template name to render before the base prompt
    #[arg(long, value_name = "NAME")]
    pre: Option<String>,

    /// Post-template name to render after the base prompt
    #[arg(long, value_name = "NAME")]
    post: Option<String>,

    /// File path to reference (repeatable)
    #[arg(short, long = "file", value_name = "PATH")]
    file: Vec<String>,

    /// Directory to reference; defaults to the current directory
    #[arg(
        short,
        long = "dir",
        value_name = "PATH",
        num_args = 0..=1,
        default_missing_value = "."
    )]
    dir: Option<String>,

    /// Build a fix prompt from the previous command's output
    #[arg(long)]
    fix: bool,

    /// Read fix content from this file instead of re-running the last command
    #[arg(long, value_name = "PATH")]
    fix_file: Option<String>,

    /// Output target: clipboard, stdout, or file:/path
    #[arg(short, long, value_name = "TARGET")]
    target: Option<String>,

    /// Open the prompt in an editor; optionally names the editor binary
    #[arg(
        short,
        long,
        value_name = "EDITOR",
        num_args = 0..=1,
        default_missing_value = ""
    )]
    editor: Option<String>,

    /// Append the current clipboard contents to the base prompt
    #[arg(short = 'c', long = "clipboard")]
    from_clipboard: bool,

    /// Force interactive prompting
    #[arg(short, long)]
    interactive: bool,

    /// Skip all interactive prompts
    #[arg(short = 'y', long)]
    yes: bool,

    /// Answer confirmations with a numbered selection
    #[arg(short, long)]
    number_select: bool,

    /// Use this configuration file instead of ~/.config/prompter/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List template roots and every discoverable template
    List {
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
    },
    /// Save a new template under the templates root
    Add {
        /// Template body; prompted for when omitted
        content: Option<String>,
        /// Save as a pre-template with this name
        #[arg(long, value_name = "NAME")]
        pre: Option<String>,
        /// Save as a post-template with this name
        #[arg(long, value_name = "NAME")]
        post: Option<String>,
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    let ctx = ExecutionContext::from_process();

    let result = match cli.command {
        Some(Commands::List { config }) => prompter::list_templates(&ctx, config.as_deref())
            .map(|listing| println!("{listing}")),
        Some(Commands::Add { content, pre, post, config }) => {
            add(&ctx, config, pre, post, content)
        }
        None => prompter::run_with_context(&ctx, build_request(cli)),
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        eprintln!("Suggestion: {}", err.guidance());
        std::process::exit(1);
    }
}

fn build_request(cli: Cli) -> PromptRequest {
    let mut request = PromptRequest::new();
    request.base_prompt = cli.base_prompt.unwrap_or_default();
    request.pre_template = cli.pre.unwrap_or_default();
    request.post_template = cli.post.unwrap_or_default();
    request.files = cli.file;
    request.directory = cli.dir.unwrap_or_default();
    request.fix_mode = cli.fix;
    request.fix_file = cli.fix_file.unwrap_or_default();
    request.target = cli.target.unwrap_or_default();
    request.editor_requested = cli.editor.is_some();
    request.editor = cli.editor.unwrap_or_default();
    request.from_clipboard = cli.from_clipboard;
    request.force_interactive = cli.interactive;
    request.force_non_interactive = cli.yes;
    request.number_select = cli.number_select;
    request.config_path = cli.config;
    request
}

fn add(
    ctx: &ExecutionContext,
    config: Option<PathBuf>,
    pre: Option<String>,
    post: Option<String>,
    content: Option<String>,
) -> Result<(), AppError> {
    let (kind, name) = match (pre, post) {
        (Some(name), None) => (Some(TemplateKind::Pre), Some(name)),
        (None, Some(name)) => (Some(TemplateKind::Post), Some(name)),
        (None, None) => (None, None),
        (Some(_), Some(_)) => {
            return Err(AppError::validation(
                "template_kind",
                "",
                "pass at most one of --pre <name> or --post <name>",
            ));
        }
    };

    let path = prompter::add_template(ctx, config.as_deref(), kind, name, content)?;
    println!("Template saved to {}", path.display());
    Ok(())
}
