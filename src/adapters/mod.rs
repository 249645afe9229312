mod clipboard_arboard;
mod editor;
mod git_snapshot;
mod interactive_dialoguer;
mod memory_template_store;
mod renderer_minijinja;
mod shell_history;
mod shell_runner;
mod template_filesystem;

pub use clipboard_arboard::ArboardClipboard;
pub use editor::{open_in_editor, resolve_editor};
pub use git_snapshot::snapshot;
pub use interactive_dialoguer::DialoguerPrompt;
pub use memory_template_store::MemoryTemplateStore;
pub use renderer_minijinja::MinijinjaRenderer;
pub use shell_history::ShellHistory;
pub use shell_runner::ShellCommandRunner;
pub use template_filesystem::FilesystemTemplateStore;
