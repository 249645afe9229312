//! Interactive collection of the inputs a request left unspecified.

use crate::domain::{AppError, ExecutionContext, PromptRequest, TemplateKind};
use crate::ports::{InteractivePrompt, TemplateStore};

/// Selection entry meaning "continue without a template".
const NONE_OPTION: &str = "None";

/// Fill in whatever the request is missing by asking the user.
///
/// Applies only in interactive mode and never in fix mode. Fields the
/// user already supplied (or config defaults filled) are not prompted
/// for. Template selections offer default-marked templates first, so the
/// pre-selected entry is the marked one when it exists.
pub fn collect_missing_inputs<S, P>(
    ctx: &ExecutionContext,
    request: &mut PromptRequest,
    store: &S,
    prompt: &P,
) -> Result<(), AppError>
where
    S: TemplateStore,
    P: InteractivePrompt,
{
    if !request.interactive || request.fix_mode {
        return Ok(());
    }

    if request.base_prompt.is_empty() {
        let entered = prompt.input_line("Enter your base prompt")?;
        let entered = entered.trim();
        if entered.is_empty() {
            return Err(AppError::validation("base_prompt", "", "a base prompt is required"));
        }
        request.base_prompt = entered.to_string();
    }

    if request.pre_template.is_empty()
        && let Some(name) = select_template(
            store,
            prompt,
            TemplateKind::Pre,
            "Select a pre-template (prepended to prompt)",
            "Pre-templates are added before your base prompt",
            request.number_select,
        )?
    {
        request.pre_template = name;
    }

    if request.post_template.is_empty()
        && let Some(name) = select_template(
            store,
            prompt,
            TemplateKind::Post,
            "Select a post-template (appended to prompt)",
            "Post-templates are added after your base prompt",
            request.number_select,
        )?
    {
        request.post_template = name;
    }

    if request.directory.is_empty() && request.files.is_empty() {
        let include = prompt.confirm(
            "Include current directory context in the prompt?",
            "This will reference the current directory in the prompt",
            false,
            request.number_select,
        )?;
        if include {
            request.directory = ctx.cwd.display().to_string();
        }
    }

    Ok(())
}

/// Offer the discovered templates of one kind for selection.
///
/// Options are ordered default-marked first, then [`NONE_OPTION`], then
/// the rest, with index 0 pre-selected. No templates means no prompt.
fn select_template<S, P>(
    store: &S,
    prompt: &P,
    kind: TemplateKind,
    message: &str,
    help: &str,
    number_select: bool,
) -> Result<Option<String>, AppError>
where
    S: TemplateStore,
    P: InteractivePrompt,
{
    let mut defaults: Vec<String> = Vec::new();
    let mut regulars: Vec<String> = Vec::new();
    for entry in store.entries()?.into_iter().filter(|entry| entry.kind == kind) {
        if defaults.contains(&entry.name) || regulars.contains(&entry.name) {
            continue;
        }
        if entry.is_default {
            defaults.push(entry.name);
        } else {
            regulars.push(entry.name);
        }
    }

    if defaults.is_empty() && regulars.is_empty() {
        return Ok(None);
    }

    let mut options = defaults;
    options.push(NONE_OPTION.to_string());
    options.extend(regulars);

    let chosen = prompt.select_one(message, help, &options, 0, number_select)?;
    let name = &options[chosen];
    Ok((name != NONE_OPTION).then(|| name.clone()))
}
