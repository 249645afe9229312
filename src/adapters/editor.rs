use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::domain::{AppError, ExecutionContext};

/// Fallback editor binaries checked on disk, in order.
const FALLBACK_EDITORS: [&str; 4] = ["nvim", "vim", "vi", "nano"];

/// Final fallback when nothing else resolves.
const LAST_RESORT: &str = "vi";

/// Resolve the editor command to launch.
///
/// Precedence: explicit flag > `$VISUAL` > `$EDITOR` > configured editor >
/// first fallback binary present under /usr/bin > `vi`.
pub fn resolve_editor(ctx: &ExecutionContext, explicit: &str, configured: &str) -> String {
    if !explicit.is_empty() {
        return explicit.to_string();
    }
    if let Some(visual) = ctx.env_var("VISUAL")
        && !visual.is_empty()
    {
        return visual.to_string();
    }
    if let Some(editor) = ctx.env_var("EDITOR")
        && !editor.is_empty()
    {
        return editor.to_string();
    }
    if !configured.is_empty() {
        return configured.to_string();
    }
    for candidate in FALLBACK_EDITORS {
        if Path::new("/usr/bin").join(candidate).exists() {
            return candidate.to_string();
        }
    }
    LAST_RESORT.to_string()
}

/// Write the text to a fresh temporary file and open the editor on it,
/// inheriting the current terminal.
pub fn open_in_editor(text: &str, editor: &str) -> Result<(), AppError> {
    let editor_error = |reason: String| AppError::Output {
        target: "editor".to_string(),
        reason,
    };

    let mut file = tempfile::Builder::new()
        .prefix("prompter-")
        .suffix(".md")
        .tempfile()
        .map_err(|err| editor_error(format!("failed to create temporary file: {err}")))?;
    file.write_all(text.as_bytes())
        .map_err(|err| editor_error(format!("failed to write temporary file: {err}")))?;
    file.flush()
        .map_err(|err| editor_error(format!("failed to write temporary file: {err}")))?;

    let status = Command::new(editor)
        .arg(file.path())
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|err| editor_error(format!("failed to launch editor '{editor}': {err}")))?;

    if !status.success() {
        return Err(editor_error(format!("editor '{editor}' exited with {status}")));
    }
    Ok(())
}
