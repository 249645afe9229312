use crate::domain::AppError;

/// Port for executing a shell command and capturing its combined output.
pub trait CommandRunner {
    /// Run `command` through a subprocess shell and return stdout+stderr.
    ///
    /// A non-zero exit status is not an error: the captured output is the
    /// point, whatever the command's outcome. Only a failure to spawn the
    /// shell at all is reported.
    fn run_capture(&self, command: &str) -> Result<String, AppError>;
}
