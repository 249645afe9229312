//! Delivers an assembled prompt to its target.

use std::fs;

use crate::adapters::{open_in_editor, resolve_editor};
use crate::domain::config::{Config, Target};
use crate::domain::{AppError, ExecutionContext, PromptRequest};
use crate::ports::Clipboard;

/// Routes the finished prompt to the clipboard, stdout, or a file, then
/// optionally into an editor.
pub struct OutputDispatcher<'a, C: Clipboard> {
    ctx: &'a ExecutionContext,
    clipboard: C,
}

impl<'a, C: Clipboard> OutputDispatcher<'a, C> {
    pub fn new(ctx: &'a ExecutionContext, clipboard: C) -> Self {
        Self { ctx, clipboard }
    }

    /// Send the prompt to the resolved target.
    ///
    /// A clipboard failure is recoverable: warn and fall back to stdout so
    /// the prompt is never silently lost. File and editor failures are
    /// fatal.
    pub fn deliver(
        &mut self,
        text: &str,
        request: &PromptRequest,
        config: &Config,
    ) -> Result<(), AppError> {
        let target = if request.target.is_empty() {
            config.target.clone()
        } else {
            Target::parse(&request.target)?
        };

        match target {
            Target::Clipboard => match self.clipboard.write_text(text) {
                Ok(()) => println!("Prompt copied to clipboard"),
                Err(err) if err.is_recoverable() => {
                    eprintln!("Warning: {err}");
                    eprintln!("Falling back to stdout:");
                    println!("{text}");
                }
                Err(err) => return Err(err),
            },
            Target::Stdout => println!("{text}"),
            Target::File(path) => {
                fs::write(&path, text).map_err(|err| AppError::Output {
                    target: format!("file:{}", path.display()),
                    reason: err.to_string(),
                })?;
                println!("Prompt written to {}", path.display());
            }
        }

        if request.editor_requested {
            let editor = resolve_editor(self.ctx, &request.editor, &config.editor);
            open_in_editor(text, &editor)?;
        }

        Ok(())
    }
}
