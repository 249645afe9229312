use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::AppError;

/// Fully resolved configuration. Produced once per run; read-only afterward.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root directory holding `pre/` and `post/` template subdirectories.
    pub templates_root: PathBuf,
    /// Optional project-local template root. Wins ties against the global root.
    pub local_templates_root: Option<PathBuf>,
    pub editor: String,
    pub default_pre: String,
    pub default_post: String,
    pub fix_file: PathBuf,
    pub directory_strategy: DirectoryStrategy,
    pub target: Target,
    pub interactive_default: bool,
}

impl Config {
    /// Snapshot of the resolved values, exposed to templates as the `config` map.
    pub fn as_map(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        map.insert("templates_root".to_string(), self.templates_root.display().to_string());
        map.insert(
            "local_templates_root".to_string(),
            self.local_templates_root
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
        );
        map.insert("editor".to_string(), self.editor.clone());
        map.insert("default_pre".to_string(), self.default_pre.clone());
        map.insert("default_post".to_string(), self.default_post.clone());
        map.insert("fix_file".to_string(), self.fix_file.display().to_string());
        map.insert(
            "directory_strategy".to_string(),
            self.directory_strategy.as_str().to_string(),
        );
        map.insert("target".to_string(), self.target.to_string());
        map.insert("interactive_default".to_string(), self.interactive_default.to_string());
        map
    }

    /// Template roots in precedence order: local first when configured.
    pub fn template_roots(&self) -> Vec<PathBuf> {
        let mut roots = Vec::new();
        if let Some(local) = &self.local_templates_root {
            roots.push(local.clone());
        }
        roots.push(self.templates_root.clone());
        roots
    }
}

/// How the `.` directory placeholder resolves to an absolute path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryStrategy {
    /// Prefer the enclosing git repository root, falling back to the cwd.
    Git,
    /// Always the current working directory.
    Filesystem,
}

impl DirectoryStrategy {
    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value {
            "git" => Ok(DirectoryStrategy::Git),
            "filesystem" => Ok(DirectoryStrategy::Filesystem),
            other => Err(AppError::configuration(format!(
                "invalid directory_strategy: {other} (must be 'git' or 'filesystem')"
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DirectoryStrategy::Git => "git",
            DirectoryStrategy::Filesystem => "filesystem",
        }
    }
}

/// Output sink descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Clipboard,
    Stdout,
    File(PathBuf),
}

impl Target {
    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value {
            "clipboard" => Ok(Target::Clipboard),
            "stdout" => Ok(Target::Stdout),
            other => {
                if let Some(path) = other.strip_prefix("file:") {
                    if path.is_empty() {
                        return Err(AppError::validation(
                            "target",
                            other,
                            "file target requires a path",
                        ));
                    }
                    Ok(Target::File(PathBuf::from(path)))
                } else {
                    Err(AppError::validation(
                        "target",
                        other,
                        "must be 'clipboard', 'stdout', or 'file:/path'",
                    ))
                }
            }
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Target::Clipboard => write!(f, "clipboard"),
            Target::Stdout => write!(f, "stdout"),
            Target::File(path) => write!(f, "file:{}", path.display()),
        }
    }
}

/// One configuration layer: every field optional so layers can be merged
/// in precedence order. Deserialized from the config file, built from the
/// environment overlay, and supplied by callers as explicit overrides.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
    pub templates_root: Option<String>,
    pub local_templates_root: Option<String>,
    pub editor: Option<String>,
    pub default_pre: Option<String>,
    pub default_post: Option<String>,
    pub fix_file: Option<String>,
    pub directory_strategy: Option<String>,
    pub target: Option<String>,
    pub interactive_default: Option<bool>,
}

impl ConfigLayer {
    /// Overlay `other` on top of this layer: present values win.
    pub fn merge(&mut self, other: ConfigLayer) {
        if other.templates_root.is_some() {
            self.templates_root = other.templates_root;
        }
        if other.local_templates_root.is_some() {
            self.local_templates_root = other.local_templates_root;
        }
        if other.editor.is_some() {
            self.editor = other.editor;
        }
        if other.default_pre.is_some() {
            self.default_pre = other.default_pre;
        }
        if other.default_post.is_some() {
            self.default_post = other.default_post;
        }
        if other.fix_file.is_some() {
            self.fix_file = other.fix_file;
        }
        if other.directory_strategy.is_some() {
            self.directory_strategy = other.directory_strategy;
        }
        if other.target.is_some() {
            self.target = other.target;
        }
        if other.interactive_default.is_some() {
            self.interactive_default = other.interactive_default;
        }
    }
}
