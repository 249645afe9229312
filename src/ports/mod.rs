mod clipboard;
mod command_runner;
mod history;
mod interactive;
mod renderer;
mod template_store;

pub use clipboard::Clipboard;
pub use command_runner::CommandRunner;
pub use history::HistorySource;
pub use interactive::InteractivePrompt;
pub use renderer::TemplateRenderer;
pub use template_store::{TemplateEntry, TemplateStore};
