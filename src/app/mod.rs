pub mod add;
pub mod fix;
pub mod interactive;
pub mod list;
mod orchestrator;
mod output;

pub use fix::FixCaptor;
pub use orchestrator::Orchestrator;
pub use output::OutputDispatcher;
