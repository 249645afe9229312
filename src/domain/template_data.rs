use std::collections::BTreeMap;

use serde::Serialize;

/// A loaded, parsed template bound to its discovered path and display name.
///
/// Transient: owned for the duration of one render call, never cached
/// across invocations. Each run re-discovers and re-reads from disk so
/// template authors see their edits immediately.
#[derive(Debug, Clone)]
pub struct TemplateHandle {
    pub name: String,
    pub path: std::path::PathBuf,
    pub source: String,
}

/// The rendering context exposed to templates as named fields.
///
/// Built fresh per render call; never mutated by the renderer.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateData {
    pub prompt: String,
    /// Render timestamp, RFC 3339.
    pub now: String,
    pub cwd: String,
    pub files: Vec<String>,
    pub dir: String,
    pub git: GitInfo,
    pub config: BTreeMap<String, String>,
    pub env: BTreeMap<String, String>,
    pub fix: FixInfo,
}

/// Git repository snapshot, empty outside a repository.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GitInfo {
    pub root: String,
    pub branch: String,
    pub commit: String,
    pub dirty: bool,
}

/// Fix-mode record for templates.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FixInfo {
    pub enabled: bool,
    pub raw: String,
    pub command: String,
    pub output: String,
}

impl FixInfo {
    /// Split captured content of the form `$ cmd\n\n<output>` into its parts.
    pub fn from_captured(raw: &str) -> Self {
        let mut info =
            FixInfo { enabled: true, raw: raw.to_string(), ..Default::default() };
        if let Some((first, rest)) = raw.split_once('\n') {
            info.command = first.trim_start_matches("$ ").to_string();
            info.output = rest.trim_start_matches('\n').to_string();
        } else {
            info.command = raw.trim_start_matches("$ ").to_string();
        }
        info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captured_content_splits_into_command_and_output() {
        let info = FixInfo::from_captured("$ go test ./...\n\nFAIL");

        assert!(info.enabled);
        assert_eq!(info.command, "go test ./...");
        assert_eq!(info.output, "FAIL");
    }

    #[test]
    fn command_only_capture_has_empty_output() {
        let info = FixInfo::from_captured("$ make build");

        assert_eq!(info.command, "make build");
        assert!(info.output.is_empty());
    }
}
