use std::process::Command;

use crate::domain::AppError;
use crate::ports::CommandRunner;

/// Runs commands through `sh -c` and captures their combined output.
///
/// No timeout is applied: a long-running command blocks the invocation,
/// matching the strictly sequential pipeline.
pub struct ShellCommandRunner;

impl ShellCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ShellCommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for ShellCommandRunner {
    fn run_capture(&self, command: &str) -> Result<String, AppError> {
        let output =
            Command::new("sh").arg("-c").arg(command).output().map_err(|err| {
                AppError::FixMode {
                    message: format!("failed to execute '{command}': {err}"),
                    fix_file: String::new(),
                }
            })?;

        // Exit status is deliberately ignored: fix mode exists to show the
        // failure, so whatever output was produced is the capture.
        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        Ok(combined)
    }
}
