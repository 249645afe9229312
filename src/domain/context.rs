use std::collections::BTreeMap;
use std::path::PathBuf;

/// Ambient process state captured once at startup.
///
/// Every component receives this explicitly instead of reading environment
/// variables or the working directory mid-algorithm, so each one is
/// unit-testable without process-level fixtures.
#[derive(Debug, Clone)]
pub struct ExecutionContext {
    pub home: PathBuf,
    pub cwd: PathBuf,
    pub env: BTreeMap<String, String>,
}

impl ExecutionContext {
    pub fn new(home: PathBuf, cwd: PathBuf, env: BTreeMap<String, String>) -> Self {
        Self { home, cwd, env }
    }

    /// Snapshot the real process environment.
    pub fn from_process() -> Self {
        let env: BTreeMap<String, String> = std::env::vars().collect();
        let home = env.get("HOME").map(PathBuf::from).unwrap_or_else(|| PathBuf::from("/"));
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self { home, cwd, env }
    }

    pub fn env_var(&self, key: &str) -> Option<&str> {
        self.env.get(key).map(String::as_str)
    }

    /// Expand a leading `~` against the context home directory.
    pub fn expand_path(&self, path: &str) -> PathBuf {
        if path == "~" {
            return self.home.clone();
        }
        if let Some(rest) = path.strip_prefix("~/") {
            return self.home.join(rest);
        }
        PathBuf::from(path)
    }
}

impl Default for ExecutionContext {
    fn default() -> Self {
        Self::new(PathBuf::from("/"), PathBuf::from("."), BTreeMap::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_path_replaces_tilde() {
        let ctx = ExecutionContext::new(
            PathBuf::from("/home/dev"),
            PathBuf::from("/work"),
            BTreeMap::new(),
        );

        assert_eq!(ctx.expand_path("~/notes"), PathBuf::from("/home/dev/notes"));
        assert_eq!(ctx.expand_path("~"), PathBuf::from("/home/dev"));
        assert_eq!(ctx.expand_path("/abs/path"), PathBuf::from("/abs/path"));
        assert_eq!(ctx.expand_path("relative"), PathBuf::from("relative"));
    }
}
