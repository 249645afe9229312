pub mod assembler;
pub mod config;
mod context;
mod error;
mod request;
mod template_data;
pub mod template_name;

pub use context::ExecutionContext;
pub use error::AppError;
pub use request::PromptRequest;
pub use template_data::{FixInfo, GitInfo, TemplateData, TemplateHandle};
pub use template_name::TemplateKind;
