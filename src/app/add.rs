//! Implements the `add` subcommand: save a new template under the global
//! templates root, collecting missing details interactively.

use std::fs;
use std::path::PathBuf;

use crate::domain::config::Config;
use crate::domain::template_name::TEMPLATE_EXTENSION;
use crate::domain::{AppError, TemplateKind};
use crate::ports::InteractivePrompt;

/// Run the add flow, prompting for whatever the caller left out.
///
/// With an explicit kind the flow is non-interactive and an existing
/// template is refused outright; when the kind was collected through a
/// prompt, an existing template asks for overwrite confirmation instead.
pub fn run<P: InteractivePrompt>(
    config: &Config,
    prompt: &P,
    kind: Option<TemplateKind>,
    name: Option<String>,
    content: Option<String>,
) -> Result<PathBuf, AppError> {
    let collected = kind.is_none();

    let kind = match kind {
        Some(kind) => kind,
        None => {
            let items: Vec<String> =
                TemplateKind::ALL.iter().map(|kind| kind.dir_name().to_string()).collect();
            let chosen = prompt.select_one(
                "Select template type",
                "Pre-templates are added before your prompt, post-templates after",
                &items,
                0,
                false,
            )?;
            TemplateKind::ALL[chosen]
        }
    };

    let name = match name {
        Some(name) => name,
        None => prompt.input_line("Enter template name")?,
    };
    let name = name.trim();
    let name = name.strip_suffix(".md").unwrap_or(name).trim().to_string();

    let content = match content {
        Some(content) => content,
        None => prompt.input_line("Enter template content")?,
    };

    let path = template_path(config, kind, &name);
    let overwrite = collected
        && path.exists()
        && prompt.confirm(
            &format!("Template file already exists: {}. Overwrite?", path.display()),
            "",
            false,
            false,
        )?;

    execute(config, kind, &name, &content, overwrite)
}

/// Where a template of this kind and name lives under the global root.
pub fn template_path(config: &Config, kind: TemplateKind, name: &str) -> PathBuf {
    config.templates_root.join(kind.dir_name()).join(format!("{name}.{TEMPLATE_EXTENSION}"))
}

/// Write `content` as `<kind>/<name>.md` and return the path.
pub fn execute(
    config: &Config,
    kind: TemplateKind,
    name: &str,
    content: &str,
    overwrite: bool,
) -> Result<PathBuf, AppError> {
    if name.is_empty() {
        return Err(AppError::validation("name", name, "template name cannot be empty"));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(AppError::validation(
            "name",
            name,
            "template name cannot contain path separators",
        ));
    }

    let path = template_path(config, kind, name);
    if path.exists() && !overwrite {
        return Err(AppError::validation(
            "name",
            name,
            format!("template already exists at {}", path.display()),
        ));
    }

    let dir = config.templates_root.join(kind.dir_name());
    fs::create_dir_all(&dir).map_err(|err| {
        AppError::configuration(format!(
            "failed to create template directory '{}': {err}",
            dir.display()
        ))
    })?;
    fs::write(&path, content).map_err(|err| {
        AppError::configuration(format!(
            "failed to write template '{}': {err}",
            path.display()
        ))
    })?;

    Ok(path)
}
