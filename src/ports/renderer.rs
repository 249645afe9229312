use crate::domain::{AppError, TemplateData, TemplateHandle};

/// Port for executing a parsed template against a data context.
pub trait TemplateRenderer {
    /// Render the template. Syntax or reference errors surface as
    /// [`AppError::TemplateInvalid`] carrying the template name.
    fn render(&self, handle: &TemplateHandle, data: &TemplateData) -> Result<String, AppError>;
}
