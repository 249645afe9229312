use std::fs;
use std::path::PathBuf;

use crate::domain::{AppError, ExecutionContext};
use crate::ports::HistorySource;

/// History file names checked under the home directory, in order. The
/// first existing file wins.
const HISTORY_FILES: [&str; 2] = [".zsh_history", ".bash_history"];

/// Lines invoking the tool itself are skipped to avoid recursive capture.
const SELF_INVOCATION: &str = "prompter";

/// Best-effort shell-history reader.
///
/// History files lag the live session and formats vary between shells, so
/// this is an approximation by contract, never a terminal reconstruction.
pub struct ShellHistory {
    home: PathBuf,
}

impl ShellHistory {
    pub fn new(ctx: &ExecutionContext) -> Self {
        Self { home: ctx.home.clone() }
    }

    fn history_error(&self, message: &str) -> AppError {
        AppError::FixMode {
            message: message.to_string(),
            fix_file: "/tmp/prompter-fix.txt".to_string(),
        }
    }
}

impl HistorySource for ShellHistory {
    fn last_command(&self) -> Result<String, AppError> {
        let path = HISTORY_FILES
            .iter()
            .map(|name| self.home.join(name))
            .find(|path| path.is_file())
            .ok_or_else(|| self.history_error("no shell history found"))?;

        let content = fs::read(&path).map_err(|err| {
            self.history_error(&format!("failed to read {}: {err}", path.display()))
        })?;
        // History files are not guaranteed valid UTF-8 (zsh metafies
        // multibyte input); degrade lossily rather than fail.
        let content = String::from_utf8_lossy(&content);

        for line in content.lines().rev() {
            let line = strip_history_prefix(line.trim());
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if line.contains(SELF_INVOCATION) {
                continue;
            }
            return Ok(line.to_string());
        }

        Err(self.history_error("no suitable command found in history"))
    }
}

/// Strip the zsh extended-history prefix `": <timestamp>:<elapsed>;"`.
fn strip_history_prefix(line: &str) -> &str {
    if let Some(rest) = line.strip_prefix(": ")
        && let Some((meta, command)) = rest.split_once(';')
        && meta.chars().all(|ch| ch.is_ascii_digit() || ch == ':')
    {
        return command;
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    fn history_in(home: &TempDir, file: &str, content: &str) -> ShellHistory {
        fs::write(home.path().join(file), content).unwrap();
        let ctx = ExecutionContext::new(
            home.path().to_path_buf(),
            home.path().to_path_buf(),
            BTreeMap::new(),
        );
        ShellHistory::new(&ctx)
    }

    #[test]
    fn last_command_comes_from_the_end_of_the_file() {
        let home = TempDir::new().unwrap();
        let history = history_in(&home, ".bash_history", "ls\ncargo build\ngo test ./...\n");

        assert_eq!(history.last_command().unwrap(), "go test ./...");
    }

    #[test]
    fn zsh_timestamp_prefixes_are_stripped() {
        let home = TempDir::new().unwrap();
        let history =
            history_in(&home, ".zsh_history", ": 1724489000:0;make check\n");

        assert_eq!(history.last_command().unwrap(), "make check");
    }

    #[test]
    fn self_invocations_comments_and_blanks_are_skipped() {
        let home = TempDir::new().unwrap();
        let history = history_in(
            &home,
            ".bash_history",
            "npm test\n# a comment\n\nprompter --fix -y\n",
        );

        assert_eq!(history.last_command().unwrap(), "npm test");
    }

    #[test]
    fn missing_history_is_a_fix_mode_error() {
        let home = TempDir::new().unwrap();
        let ctx = ExecutionContext::new(
            home.path().to_path_buf(),
            home.path().to_path_buf(),
            BTreeMap::new(),
        );
        let history = ShellHistory::new(&ctx);

        let err = history.last_command().unwrap_err();
        assert!(matches!(err, AppError::FixMode { .. }));
        assert!(err.guidance().contains("tee"));
    }

    #[test]
    fn zsh_history_is_preferred_over_bash() {
        let home = TempDir::new().unwrap();
        fs::write(home.path().join(".bash_history"), "from bash\n").unwrap();
        let history = history_in(&home, ".zsh_history", "from zsh\n");

        assert_eq!(history.last_command().unwrap(), "from zsh");
    }
}
